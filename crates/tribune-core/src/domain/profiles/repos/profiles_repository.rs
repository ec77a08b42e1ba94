// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::profiles::models::{NotificationPreferences, Profile};
use crate::domain::shared::models::UserId;

#[derive(Debug, thiserror::Error)]
#[error("A profile exists for this user already.")]
pub struct ProfileAlreadyExistsError;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ProfilesRepository: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Option<Profile>>;

    /// Inserts `profile` once. Profiles are never replaced wholesale since
    /// their role is fixed at creation.
    async fn put(&self, profile: Profile) -> Result<(), ProfileAlreadyExistsError>;

    async fn set_active(&self, user_id: &UserId, is_active: bool) -> Result<Option<Profile>>;

    async fn set_notification_preferences(
        &self,
        user_id: &UserId,
        preferences: NotificationPreferences,
    ) -> Result<Option<Profile>>;
}
