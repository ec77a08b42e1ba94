// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use parking_lot::RwLock;

use crate::domain::notifications::models::{Notification, NotificationId};
use crate::domain::notifications::repos::NotificationsRepository;
use crate::domain::shared::models::UserId;

pub struct InMemoryNotificationsRepository {
    notifications: RwLock<HashMap<NotificationId, Notification>>,
}

impl InMemoryNotificationsRepository {
    pub fn new() -> Self {
        InMemoryNotificationsRepository {
            notifications: Default::default(),
        }
    }
}

impl Default for InMemoryNotificationsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationsRepository for InMemoryNotificationsRepository {
    async fn put(&self, notification: Notification) -> Result<()> {
        self.notifications
            .write()
            .insert(notification.id.clone(), notification);
        Ok(())
    }

    async fn get_all_for_user(&self, user_id: &UserId) -> Result<Vec<Notification>> {
        Ok(self
            .notifications
            .read()
            .values()
            .filter(|notification| &notification.user_id == user_id)
            .cloned()
            .sorted_by(|a, b| b.created_at.cmp(&a.created_at))
            .collect())
    }

    async fn mark_read(
        &self,
        id: &NotificationId,
        read_at: DateTime<Utc>,
    ) -> Result<Option<Notification>> {
        let mut notifications = self.notifications.write();

        Ok(notifications.get_mut(id).map(|notification| {
            if !notification.is_read {
                notification.is_read = true;
                notification.read_at = Some(read_at);
            }
            notification.clone()
        }))
    }

    async fn mark_all_read(&self, user_id: &UserId, read_at: DateTime<Utc>) -> Result<u64> {
        let mut notifications = self.notifications.write();
        let mut transitioned = 0;

        for notification in notifications
            .values_mut()
            .filter(|notification| &notification.user_id == user_id && !notification.is_read)
        {
            notification.is_read = true;
            notification.read_at = Some(read_at);
            transitioned += 1;
        }

        Ok(transitioned)
    }

    async fn unread_count(&self, user_id: &UserId) -> Result<u64> {
        Ok(self
            .notifications
            .read()
            .values()
            .filter(|notification| &notification.user_id == user_id && !notification.is_read)
            .count() as u64)
    }
}
