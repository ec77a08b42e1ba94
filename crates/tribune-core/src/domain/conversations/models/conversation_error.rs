// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::directory::models::DirectoryError;
use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::{UserId, ValidationError};

use super::ConversationId;

#[derive(thiserror::Error, Debug)]
pub enum ConversationError {
    #[error("A citizen cannot start a conversation with themselves.")]
    InvalidParticipants,
    #[error("Only citizens may start conversations.")]
    NotCitizen,
    #[error("Only conversation participants may perform this action.")]
    NotParticipant,
    #[error("Conversation {0} does not exist.")]
    ConversationNotFound(ConversationId),
    #[error("The conversation is closed and no longer accepts messages.")]
    ConversationClosed,
    #[error("The conversation was already closed by {closed_by} at {closed_at}.")]
    AlreadyClosed {
        closed_by: UserId,
        closed_at: DateTime<Utc>,
    },
    #[error("The conversation must be closed before it can be rated.")]
    ConversationNotClosed,
    #[error("Message {0} does not belong to this conversation.")]
    InvalidReply(MessageId),
    #[error("The directory has no record of this representative.")]
    UnknownRepresentative,
    #[error("The representative directory is unavailable: {0}")]
    DirectoryUnavailable(DirectoryError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
