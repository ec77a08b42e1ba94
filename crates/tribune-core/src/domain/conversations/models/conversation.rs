// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::UserId;

use super::{ConversationId, Rating, Subject};

/// A thread between exactly one citizen and one representative. Carries
/// rollup fields derived from its message ledger; the repository keeps them
/// in sync by applying `register_message` inside the same critical section
/// as each insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub citizen: UserId,
    pub representative: UserId,
    pub subject: Subject,
    pub created_at: DateTime<Utc>,

    pub total_messages: u64,
    pub last_message_at: DateTime<Utc>,
    pub last_message_by: Option<UserId>,

    pub is_closed: bool,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<UserId>,

    pub citizen_rating: Option<Rating>,
    pub citizen_feedback: Option<String>,
}

impl Conversation {
    pub fn new(
        id: ConversationId,
        citizen: UserId,
        representative: UserId,
        subject: Subject,
        created_at: DateTime<Utc>,
    ) -> Self {
        Conversation {
            id,
            citizen,
            representative,
            subject,
            created_at,
            total_messages: 0,
            last_message_at: created_at,
            last_message_by: None,
            is_closed: false,
            closed_at: None,
            closed_by: None,
            citizen_rating: None,
            citizen_feedback: None,
        }
    }

    pub fn is_participant(&self, user_id: &UserId) -> bool {
        &self.citizen == user_id || &self.representative == user_id
    }

    pub fn other_participant(&self, user_id: &UserId) -> Option<&UserId> {
        if user_id == &self.citizen {
            Some(&self.representative)
        } else if user_id == &self.representative {
            Some(&self.citizen)
        } else {
            None
        }
    }

    /// Folds a newly inserted message into the rollup fields. Must be called
    /// exactly once per insert, in insertion order. The `>=` comparison makes
    /// timestamp ties resolve to the later insert.
    pub fn register_message(&mut self, message: &Message) {
        self.total_messages += 1;

        if message.created_at >= self.last_message_at {
            self.last_message_at = message.created_at;
            self.last_message_by = Some(message.sender.clone());
        }
    }

    pub fn close(&mut self, closed_by: UserId, closed_at: DateTime<Utc>) {
        self.is_closed = true;
        self.closed_at = Some(closed_at);
        self.closed_by = Some(closed_by);
    }

    /// Last write wins; a repeated rating replaces the previous one.
    pub fn set_rating(&mut self, rating: Rating, feedback: Option<String>) {
        self.citizen_rating = Some(rating);
        self.citizen_feedback = feedback;
    }
}
