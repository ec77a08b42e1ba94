// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use tribune_utils::id_string;

use crate::domain::conversations::models::ConversationId;
use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::UserId;

id_string!(ReportId);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportReason {
    Spam,
    Inappropriate,
    Harassment,
    Misinformation,
    Other,
}

/// A participant's complaint about a message in one of their conversations.
/// At most one report exists per (message, reporter) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub conversation_id: ConversationId,
    pub message_id: MessageId,
    pub reporter: UserId,
    pub reason: ReportReason,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,

    pub is_reviewed: bool,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<UserId>,
    pub action_taken: Option<String>,
}

impl Report {
    pub fn new(
        id: ReportId,
        conversation_id: ConversationId,
        message_id: MessageId,
        reporter: UserId,
        reason: ReportReason,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Report {
            id,
            conversation_id,
            message_id,
            reporter,
            reason,
            description,
            created_at,
            is_reviewed: false,
            reviewed_at: None,
            reviewed_by: None,
            action_taken: None,
        }
    }
}
