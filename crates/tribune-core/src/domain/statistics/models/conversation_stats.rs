// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationStats {
    pub total_conversations: u64,
    pub active_conversations: u64,
    pub closed_conversations: u64,
    pub conversations_today: u64,
    pub conversations_this_week: u64,
    pub conversations_this_month: u64,
    pub avg_messages_per_conversation: f64,
    /// Mean days between creation and close across closed conversations.
    pub avg_conversation_duration_days: f64,
}
