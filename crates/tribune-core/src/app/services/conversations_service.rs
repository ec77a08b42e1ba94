// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use itertools::Itertools;

use tribune_proc_macros::InjectDependencies;

use crate::app::deps::{DynConversationsDomainService, DynConversationsRepository};
use crate::domain::conversations::models::{Conversation, ConversationError, ConversationId};
use crate::domain::conversations::services::CreateConversationRequest;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationsFilter {
    #[default]
    All,
    Active,
    Closed,
}

#[derive(InjectDependencies)]
pub struct ConversationsService {
    #[inject]
    conversations_domain_service: DynConversationsDomainService,
    #[inject]
    conversations_repo: DynConversationsRepository,
}

impl ConversationsService {
    pub async fn create_conversation(
        &self,
        request: CreateConversationRequest,
    ) -> Result<Conversation, ConversationError> {
        self.conversations_domain_service
            .create_conversation(request)
            .await
    }

    pub async fn close_conversation(
        &self,
        conversation_id: &ConversationId,
        actor: &UserId,
    ) -> Result<Conversation, ConversationError> {
        self.conversations_domain_service
            .close_conversation(conversation_id, actor)
            .await
    }

    pub async fn rate_conversation(
        &self,
        conversation_id: &ConversationId,
        actor: &UserId,
        rating: u8,
        feedback: Option<String>,
    ) -> Result<Conversation, ConversationError> {
        self.conversations_domain_service
            .rate_conversation(conversation_id, actor, rating, feedback)
            .await
    }

    pub async fn load_conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<Conversation>> {
        self.conversations_repo.get(conversation_id).await
    }

    /// The user's conversations, most recently active first.
    pub async fn load_conversations(
        &self,
        user_id: &UserId,
        filter: ConversationsFilter,
    ) -> Result<Vec<Conversation>> {
        let conversations = self.conversations_repo.get_all_for_user(user_id).await?;

        Ok(conversations
            .into_iter()
            .filter(|conversation| match filter {
                ConversationsFilter::All => true,
                ConversationsFilter::Active => !conversation.is_closed,
                ConversationsFilter::Closed => conversation.is_closed,
            })
            .sorted_by(|a, b| {
                (b.last_message_at, b.created_at).cmp(&(a.last_message_at, a.created_at))
            })
            .collect())
    }
}
