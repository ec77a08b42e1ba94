// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::conversations::models::ConversationId;
use crate::domain::messaging::models::{Message, MessageId, ReadTrackingError};
use crate::domain::shared::models::UserId;

/// Read-state transitions over a conversation's ledger. Messages only ever
/// move from unread to read; there is no way back.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ReadTrackingDomainService: Send + Sync {
    /// Marks a single message as read on behalf of `actor`. Idempotent;
    /// marking an already-read message changes nothing and preserves the
    /// original `read_at`, no matter who asks. Fails with
    /// `SelfMarkForbidden` when `actor` sent the message and it is still
    /// unread.
    async fn mark_read(
        &self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
        actor: &UserId,
    ) -> Result<Message, ReadTrackingError>;

    /// Marks every unread message not sent by `actor` as read in one
    /// set-based update. Returns the number of messages transitioned.
    async fn mark_conversation_read(
        &self,
        conversation_id: &ConversationId,
        actor: &UserId,
    ) -> Result<u64, ReadTrackingError>;

    /// Number of unread messages the other participant has sent `viewer`.
    async fn unread_count_for(
        &self,
        conversation_id: &ConversationId,
        viewer: &UserId,
    ) -> Result<u64, ReadTrackingError>;
}
