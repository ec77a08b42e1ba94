// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::notifications::models::{Notification, NotificationId};
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NotificationsRepository: Send + Sync {
    async fn put(&self, notification: Notification) -> Result<()>;

    /// All notifications for `user_id`, newest first.
    async fn get_all_for_user(&self, user_id: &UserId) -> Result<Vec<Notification>>;

    /// Idempotent; an already-read notification is returned unchanged.
    async fn mark_read(
        &self,
        id: &NotificationId,
        read_at: DateTime<Utc>,
    ) -> Result<Option<Notification>>;

    /// Returns the number of notifications transitioned.
    async fn mark_all_read(&self, user_id: &UserId, read_at: DateTime<Utc>) -> Result<u64>;

    async fn unread_count(&self, user_id: &UserId) -> Result<u64>;
}
