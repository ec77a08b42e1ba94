// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use tribune_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynConversationsDomainService, DynConversationsRepository, DynReadTrackingDomainService,
};
use crate::domain::conversations::models::{ConversationError, ConversationId};
use crate::domain::conversations::services::SendMessageRequest;
use crate::domain::messaging::models::{Message, MessageId, ReadTrackingError};
use crate::domain::shared::models::UserId;

#[derive(InjectDependencies)]
pub struct MessagesService {
    #[inject]
    conversations_domain_service: DynConversationsDomainService,
    #[inject]
    conversations_repo: DynConversationsRepository,
    #[inject]
    read_tracking_domain_service: DynReadTrackingDomainService,
}

impl MessagesService {
    pub async fn send_message(
        &self,
        conversation_id: &ConversationId,
        sender: &UserId,
        request: SendMessageRequest,
    ) -> Result<Message, ConversationError> {
        self.conversations_domain_service
            .append_message(conversation_id, sender, request)
            .await
    }

    /// The conversation's messages in insertion order, which is also the
    /// display order.
    pub async fn load_messages(
        &self,
        conversation_id: &ConversationId,
        viewer: &UserId,
    ) -> Result<Vec<Message>, ReadTrackingError> {
        let conversation = self
            .conversations_repo
            .get(conversation_id)
            .await?
            .ok_or_else(|| ReadTrackingError::ConversationNotFound(conversation_id.clone()))?;

        if !conversation.is_participant(viewer) {
            return Err(ReadTrackingError::NotParticipant);
        }

        Ok(self.conversations_repo.get_messages(conversation_id).await?)
    }

    pub async fn mark_read(
        &self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
        actor: &UserId,
    ) -> Result<Message, ReadTrackingError> {
        self.read_tracking_domain_service
            .mark_read(conversation_id, message_id, actor)
            .await
    }

    pub async fn mark_conversation_read(
        &self,
        conversation_id: &ConversationId,
        actor: &UserId,
    ) -> Result<u64, ReadTrackingError> {
        self.read_tracking_domain_service
            .mark_conversation_read(conversation_id, actor)
            .await
    }

    pub async fn unread_count(
        &self,
        conversation_id: &ConversationId,
        viewer: &UserId,
    ) -> Result<u64, ReadTrackingError> {
        self.read_tracking_domain_service
            .unread_count_for(conversation_id, viewer)
            .await
    }

    /// Unread messages addressed to `user_id` across all their
    /// conversations. Eventually consistent with concurrent appends.
    pub async fn total_unread_count(&self, user_id: &UserId) -> Result<u64> {
        let conversations = self.conversations_repo.get_all_for_user(user_id).await?;
        let mut total = 0;

        for conversation in conversations {
            let Some(other) = conversation.other_participant(user_id) else {
                continue;
            };
            total += self
                .conversations_repo
                .unread_count(&conversation.id, other)
                .await?;
        }

        Ok(total)
    }
}
