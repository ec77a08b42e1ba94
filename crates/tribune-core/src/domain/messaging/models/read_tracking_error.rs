// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::conversations::models::ConversationId;
use crate::domain::messaging::models::MessageId;

#[derive(thiserror::Error, Debug)]
pub enum ReadTrackingError {
    #[error("Conversation {0} does not exist.")]
    ConversationNotFound(ConversationId),
    #[error("Message {0} does not exist in this conversation.")]
    MessageNotFound(MessageId),
    #[error("Only conversation participants may access read state.")]
    NotParticipant,
    #[error("A sender cannot mark their own message as read.")]
    SelfMarkForbidden,
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
