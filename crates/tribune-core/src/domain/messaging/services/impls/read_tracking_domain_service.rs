// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use tribune_proc_macros::DependenciesStruct;

use crate::app::deps::{DynConversationsRepository, DynTimeProvider};
use crate::domain::conversations::models::ConversationId;
use crate::domain::messaging::models::{Message, MessageId, ReadTrackingError};
use crate::domain::shared::models::UserId;

use super::super::ReadTrackingDomainService as ReadTrackingDomainServiceTrait;

#[derive(DependenciesStruct)]
pub struct ReadTrackingDomainService {
    conversations_repo: DynConversationsRepository,
    time_provider: DynTimeProvider,
}

#[async_trait]
impl ReadTrackingDomainServiceTrait for ReadTrackingDomainService {
    async fn mark_read(
        &self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
        actor: &UserId,
    ) -> Result<Message, ReadTrackingError> {
        let conversation = self
            .conversations_repo
            .get(conversation_id)
            .await?
            .ok_or_else(|| ReadTrackingError::ConversationNotFound(conversation_id.clone()))?;

        if !conversation.is_participant(actor) {
            return Err(ReadTrackingError::NotParticipant);
        }

        let message = self
            .conversations_repo
            .get_message(conversation_id, message_id)
            .await?
            .ok_or_else(|| ReadTrackingError::MessageNotFound(message_id.clone()))?;

        // An already-read message stays a no-op for anyone, including the
        // sender; the self-mark guard only applies to the actual transition.
        if message.is_read {
            return Ok(message);
        }

        if &message.sender == actor {
            return Err(ReadTrackingError::SelfMarkForbidden);
        }

        self.conversations_repo
            .mark_message_read(conversation_id, message_id, self.time_provider.now())
            .await?
            .ok_or_else(|| ReadTrackingError::MessageNotFound(message_id.clone()))
    }

    async fn mark_conversation_read(
        &self,
        conversation_id: &ConversationId,
        actor: &UserId,
    ) -> Result<u64, ReadTrackingError> {
        let conversation = self
            .conversations_repo
            .get(conversation_id)
            .await?
            .ok_or_else(|| ReadTrackingError::ConversationNotFound(conversation_id.clone()))?;

        if !conversation.is_participant(actor) {
            return Err(ReadTrackingError::NotParticipant);
        }

        Ok(self
            .conversations_repo
            .mark_all_read(conversation_id, actor, self.time_provider.now())
            .await?)
    }

    async fn unread_count_for(
        &self,
        conversation_id: &ConversationId,
        viewer: &UserId,
    ) -> Result<u64, ReadTrackingError> {
        let conversation = self
            .conversations_repo
            .get(conversation_id)
            .await?
            .ok_or_else(|| ReadTrackingError::ConversationNotFound(conversation_id.clone()))?;

        let Some(other) = conversation.other_participant(viewer) else {
            return Err(ReadTrackingError::NotParticipant);
        };

        Ok(self
            .conversations_repo
            .unread_count(conversation_id, other)
            .await?)
    }
}
