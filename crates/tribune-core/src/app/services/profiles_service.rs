// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use tribune_proc_macros::InjectDependencies;

use crate::app::deps::{DynProfilesRepository, DynTimeProvider};
use crate::domain::directory::models::DirectoryId;
use crate::domain::profiles::models::{
    NotificationPreferences, PhoneNumber, Profile, ProfileError,
};
use crate::domain::shared::models::{Role, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProfileRequest {
    pub user_id: UserId,
    pub role: Role,
    pub full_name: String,
    pub phone: Option<String>,
    pub governorate: Option<String>,
    pub district: Option<String>,
    pub directory_id: Option<DirectoryId>,
}

#[derive(InjectDependencies)]
pub struct ProfilesService {
    #[inject]
    profiles_repo: DynProfilesRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

impl ProfilesService {
    /// Creates the user's profile. The role is fixed from here on; there is
    /// no operation to change it.
    pub async fn create_profile(
        &self,
        request: CreateProfileRequest,
    ) -> Result<Profile, ProfileError> {
        let phone = request
            .phone
            .as_deref()
            .map(PhoneNumber::parse)
            .transpose()?;

        if request.role.is_representative() && request.directory_id.is_none() {
            return Err(ProfileError::MissingDirectoryId);
        }

        let profile = Profile {
            user_id: request.user_id.clone(),
            role: request.role,
            full_name: request.full_name,
            phone,
            governorate: request.governorate,
            district: request.district,
            directory_id: request.directory_id,
            notification_preferences: NotificationPreferences::default(),
            is_active: true,
            created_at: self.time_provider.now(),
        };

        self.profiles_repo
            .put(profile.clone())
            .await
            .map_err(|_| ProfileError::ProfileExists(request.user_id))?;

        Ok(profile)
    }

    /// Explicitly optional; callers must handle the `None` branch instead of
    /// assuming a profile exists.
    pub async fn find_profile(&self, user_id: &UserId) -> Result<Option<Profile>> {
        self.profiles_repo.get(user_id).await
    }

    /// Soft-deactivation. Profiles are never hard-deleted.
    pub async fn deactivate_profile(&self, user_id: &UserId) -> Result<Profile, ProfileError> {
        self.profiles_repo
            .set_active(user_id, false)
            .await?
            .ok_or_else(|| ProfileError::ProfileNotFound(user_id.clone()))
    }

    pub async fn set_notification_preferences(
        &self,
        user_id: &UserId,
        preferences: NotificationPreferences,
    ) -> Result<Profile, ProfileError> {
        self.profiles_repo
            .set_notification_preferences(user_id, preferences)
            .await?
            .ok_or_else(|| ProfileError::ProfileNotFound(user_id.clone()))
    }
}
