// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_conversations: u64,
    pub active_conversations: u64,
    pub total_messages_sent: u64,
    pub total_messages_received: u64,
    pub unread_messages: u64,
    pub conversations_this_month: u64,
    pub messages_this_month: u64,
}
