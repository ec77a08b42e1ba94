// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

/// A user's activity on a single day, derived from the ledger. Unique per
/// (user, date); rebuilding replaces the existing row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatistics {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub messages_sent: u64,
    pub messages_received: u64,
    pub conversations_started: u64,
    pub conversations_closed: u64,
    /// Mean minutes between a counterpart's message and the user's next
    /// same-day reply. `None` when the user sent no replies that day.
    pub avg_response_time_minutes: Option<u32>,
}
