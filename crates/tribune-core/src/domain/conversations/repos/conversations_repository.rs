// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::conversations::models::{
    Conversation, ConversationError, ConversationId, Rating,
};
use crate::domain::messaging::models::{Message, MessageId};
use crate::domain::shared::models::UserId;

/// Storage for conversations and the message ledgers they own.
///
/// The conversation row is the serialization point for its own messages:
/// `create`, `append_message`, `close`, `set_rating`, `mark_message_read`
/// and `mark_all_read` must each execute as one atomic unit against the
/// addressed conversation, and rollup fields must be maintained via
/// `Conversation::register_message` inside that same unit. No ordering is
/// guaranteed across different conversations.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConversationsRepository: Send + Sync {
    /// Inserts the conversation together with its first message. Neither is
    /// ever observable without the other. Returns the conversation with the
    /// first message already rolled up.
    async fn create(
        &self,
        conversation: Conversation,
        first_message: Message,
    ) -> Result<Conversation>;

    async fn get(&self, id: &ConversationId) -> Result<Option<Conversation>>;

    async fn get_all_for_user(&self, user_id: &UserId) -> Result<Vec<Conversation>>;

    /// Appends `message` to the ledger and updates the rollup fields in the
    /// same unit. The closed flag is re-checked inside the critical section;
    /// system messages bypass that check. Fails with `ConversationNotFound`
    /// or `ConversationClosed`.
    async fn append_message(
        &self,
        id: &ConversationId,
        message: Message,
    ) -> Result<Conversation, ConversationError>;

    /// Transitions the conversation to closed and appends `notice` (the
    /// system message recording the close) in one unit. Fails with
    /// `AlreadyClosed` carrying the existing close state.
    async fn close(
        &self,
        id: &ConversationId,
        closed_by: UserId,
        closed_at: DateTime<Utc>,
        notice: Message,
    ) -> Result<Conversation, ConversationError>;

    /// Sets or replaces the citizen rating. Fails with
    /// `ConversationNotClosed` when the conversation is still open.
    async fn set_rating(
        &self,
        id: &ConversationId,
        rating: Rating,
        feedback: Option<String>,
    ) -> Result<Conversation, ConversationError>;

    async fn get_message(
        &self,
        id: &ConversationId,
        message_id: &MessageId,
    ) -> Result<Option<Message>>;

    /// All messages of the conversation in insertion order.
    async fn get_messages(&self, id: &ConversationId) -> Result<Vec<Message>>;

    /// Marks a single message as read. Idempotent; an already-read message
    /// is returned unchanged with its original `read_at`.
    async fn mark_message_read(
        &self,
        id: &ConversationId,
        message_id: &MessageId,
        read_at: DateTime<Utc>,
    ) -> Result<Option<Message>>;

    /// Set-based bulk transition of every unread message not sent by
    /// `excluding_sender`. Returns the number of messages transitioned.
    /// Messages inserted after the update began may be missed; they simply
    /// remain unread.
    async fn mark_all_read(
        &self,
        id: &ConversationId,
        excluding_sender: &UserId,
        read_at: DateTime<Utc>,
    ) -> Result<u64>;

    /// Number of unread messages sent by `sent_by`.
    async fn unread_count(&self, id: &ConversationId, sent_by: &UserId) -> Result<u64>;
}
