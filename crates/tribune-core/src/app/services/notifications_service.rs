// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use tribune_proc_macros::InjectDependencies;

use crate::app::deps::{DynNotificationsRepository, DynTimeProvider};
use crate::domain::notifications::models::{Notification, NotificationId};
use crate::domain::shared::models::UserId;

#[derive(InjectDependencies)]
pub struct NotificationsService {
    #[inject]
    notifications_repo: DynNotificationsRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

impl NotificationsService {
    /// The user's notifications, newest first.
    pub async fn load_notifications(&self, user_id: &UserId) -> Result<Vec<Notification>> {
        self.notifications_repo.get_all_for_user(user_id).await
    }

    pub async fn unread_count(&self, user_id: &UserId) -> Result<u64> {
        self.notifications_repo.unread_count(user_id).await
    }

    pub async fn mark_read(&self, id: &NotificationId) -> Result<Option<Notification>> {
        self.notifications_repo
            .mark_read(id, self.time_provider.now())
            .await
    }

    pub async fn mark_all_read(&self, user_id: &UserId) -> Result<u64> {
        self.notifications_repo
            .mark_all_read(user_id, self.time_provider.now())
            .await
    }
}
