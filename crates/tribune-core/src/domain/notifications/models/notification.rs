// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use tribune_utils::id_string;

use crate::domain::shared::models::UserId;

id_string!(NotificationId);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    NewMessage,
    ConversationClosed,
    SystemUpdate,
    Maintenance,
}

/// A per-user inbox entry derived from domain events. Rebuildable from the
/// ledger; delivery to external channels happens outside the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    /// Id of the conversation, message or report this notification points
    /// at, if any.
    pub related_id: Option<String>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        id: NotificationId,
        user_id: UserId,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        related_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Notification {
            id,
            user_id,
            kind,
            title: title.into(),
            body: body.into(),
            related_id,
            is_read: false,
            read_at: None,
            created_at,
        }
    }
}
