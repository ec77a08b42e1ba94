// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::conversations::models::ConversationId;
use crate::domain::messaging::models::MessageId;
use crate::domain::moderation::models::ReportId;
use crate::domain::shared::models::UserId;

#[derive(thiserror::Error, Debug)]
pub enum ModerationError {
    #[error("Conversation {0} does not exist.")]
    ConversationNotFound(ConversationId),
    #[error("Message {0} does not exist in this conversation.")]
    MessageNotFound(MessageId),
    #[error("Report {0} does not exist.")]
    ReportNotFound(ReportId),
    #[error("Only conversation participants may report messages.")]
    NotParticipant,
    #[error("A sender cannot report their own message.")]
    CannotReportSelf,
    #[error("This message was already reported by the same user.")]
    DuplicateReport,
    #[error("The report was already reviewed by {reviewed_by} at {reviewed_at}.")]
    AlreadyReviewed {
        reviewed_by: UserId,
        reviewed_at: DateTime<Utc>,
    },
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
