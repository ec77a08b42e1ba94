// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::conversations::models::{
    Conversation, ConversationError, ConversationId, Rating,
};
use crate::domain::conversations::repos::ConversationsRepository;
use crate::domain::messaging::models::{Message, MessageId};
use crate::domain::shared::models::UserId;

struct ConversationEntry {
    conversation: Conversation,
    /// Ledger in insertion order.
    messages: Vec<Message>,
}

/// Reference implementation of `ConversationsRepository`. Each entry is
/// guarded by the map-wide lock, making every mutation of a conversation
/// and its ledger one critical section, the equivalent of a row lock plus
/// transaction in a relational store.
pub struct InMemoryConversationsRepository {
    entries: RwLock<HashMap<ConversationId, ConversationEntry>>,
}

impl InMemoryConversationsRepository {
    pub fn new() -> Self {
        InMemoryConversationsRepository {
            entries: Default::default(),
        }
    }
}

impl Default for InMemoryConversationsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationsRepository for InMemoryConversationsRepository {
    async fn create(
        &self,
        conversation: Conversation,
        first_message: Message,
    ) -> Result<Conversation> {
        let mut entries = self.entries.write();

        if entries.contains_key(&conversation.id) {
            bail!("A conversation with id {} exists already", conversation.id);
        }

        let mut entry = ConversationEntry {
            conversation,
            messages: Vec::new(),
        };
        entry.conversation.register_message(&first_message);
        entry.messages.push(first_message);

        let conversation = entry.conversation.clone();
        entries.insert(conversation.id.clone(), entry);
        Ok(conversation)
    }

    async fn get(&self, id: &ConversationId) -> Result<Option<Conversation>> {
        Ok(self
            .entries
            .read()
            .get(id)
            .map(|entry| entry.conversation.clone()))
    }

    async fn get_all_for_user(&self, user_id: &UserId) -> Result<Vec<Conversation>> {
        Ok(self
            .entries
            .read()
            .values()
            .filter(|entry| entry.conversation.is_participant(user_id))
            .map(|entry| entry.conversation.clone())
            .collect())
    }

    async fn append_message(
        &self,
        id: &ConversationId,
        message: Message,
    ) -> Result<Conversation, ConversationError> {
        let mut entries = self.entries.write();

        let Some(entry) = entries.get_mut(id) else {
            return Err(ConversationError::ConversationNotFound(id.clone()));
        };

        if entry.conversation.is_closed && !message.is_system_message {
            return Err(ConversationError::ConversationClosed);
        }

        entry.conversation.register_message(&message);
        entry.messages.push(message);

        Ok(entry.conversation.clone())
    }

    async fn close(
        &self,
        id: &ConversationId,
        closed_by: UserId,
        closed_at: DateTime<Utc>,
        notice: Message,
    ) -> Result<Conversation, ConversationError> {
        let mut entries = self.entries.write();

        let Some(entry) = entries.get_mut(id) else {
            return Err(ConversationError::ConversationNotFound(id.clone()));
        };

        if entry.conversation.is_closed {
            return Err(ConversationError::AlreadyClosed {
                closed_by: entry
                    .conversation
                    .closed_by
                    .clone()
                    .expect("Closed conversation is missing closed_by"),
                closed_at: entry
                    .conversation
                    .closed_at
                    .expect("Closed conversation is missing closed_at"),
            });
        }

        entry.conversation.close(closed_by, closed_at);
        entry.conversation.register_message(&notice);
        entry.messages.push(notice);

        Ok(entry.conversation.clone())
    }

    async fn set_rating(
        &self,
        id: &ConversationId,
        rating: Rating,
        feedback: Option<String>,
    ) -> Result<Conversation, ConversationError> {
        let mut entries = self.entries.write();

        let Some(entry) = entries.get_mut(id) else {
            return Err(ConversationError::ConversationNotFound(id.clone()));
        };

        if !entry.conversation.is_closed {
            return Err(ConversationError::ConversationNotClosed);
        }

        entry.conversation.set_rating(rating, feedback);
        Ok(entry.conversation.clone())
    }

    async fn get_message(
        &self,
        id: &ConversationId,
        message_id: &MessageId,
    ) -> Result<Option<Message>> {
        Ok(self.entries.read().get(id).and_then(|entry| {
            entry
                .messages
                .iter()
                .find(|message| &message.id == message_id)
                .cloned()
        }))
    }

    async fn get_messages(&self, id: &ConversationId) -> Result<Vec<Message>> {
        Ok(self
            .entries
            .read()
            .get(id)
            .map(|entry| entry.messages.clone())
            .unwrap_or_default())
    }

    async fn mark_message_read(
        &self,
        id: &ConversationId,
        message_id: &MessageId,
        read_at: DateTime<Utc>,
    ) -> Result<Option<Message>> {
        let mut entries = self.entries.write();

        let Some(entry) = entries.get_mut(id) else {
            return Ok(None);
        };
        let Some(message) = entry
            .messages
            .iter_mut()
            .find(|message| &message.id == message_id)
        else {
            return Ok(None);
        };

        message.mark_read(read_at);
        Ok(Some(message.clone()))
    }

    async fn mark_all_read(
        &self,
        id: &ConversationId,
        excluding_sender: &UserId,
        read_at: DateTime<Utc>,
    ) -> Result<u64> {
        let mut entries = self.entries.write();

        let Some(entry) = entries.get_mut(id) else {
            return Ok(0);
        };

        let mut transitioned = 0;
        for message in entry
            .messages
            .iter_mut()
            .filter(|message| &message.sender != excluding_sender)
        {
            if message.mark_read(read_at) {
                transitioned += 1;
            }
        }

        Ok(transitioned)
    }

    async fn unread_count(&self, id: &ConversationId, sent_by: &UserId) -> Result<u64> {
        Ok(self
            .entries
            .read()
            .get(id)
            .map(|entry| {
                entry
                    .messages
                    .iter()
                    .filter(|message| &message.sender == sent_by && !message.is_read)
                    .count() as u64
            })
            .unwrap_or_default())
    }
}
