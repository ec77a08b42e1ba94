// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::conversations::models::ConversationId;
use crate::domain::shared::models::UserId;

use super::{MessageContent, MessageId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender: UserId,
    pub content: MessageContent,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub is_system_message: bool,
    pub reply_to: Option<MessageId>,
}

impl Message {
    pub fn new(
        id: MessageId,
        conversation_id: ConversationId,
        sender: UserId,
        content: MessageContent,
        created_at: DateTime<Utc>,
        reply_to: Option<MessageId>,
    ) -> Self {
        Message {
            id,
            conversation_id,
            sender,
            content,
            created_at,
            is_read: false,
            read_at: None,
            is_system_message: false,
            reply_to,
        }
    }

    /// A message generated by the core itself to record a state transition,
    /// attributed to the participant that triggered it.
    pub fn system(
        id: MessageId,
        conversation_id: ConversationId,
        sender: UserId,
        content: MessageContent,
        created_at: DateTime<Utc>,
    ) -> Self {
        Message {
            is_system_message: true,
            ..Message::new(id, conversation_id, sender, content, created_at, None)
        }
    }

    /// Transitions the message to read. Returns `false` when it already was,
    /// in which case the original `read_at` is preserved.
    pub fn mark_read(&mut self, read_at: DateTime<Utc>) -> bool {
        if self.is_read {
            return false;
        }
        self.is_read = true;
        self.read_at = Some(read_at);
        true
    }
}
