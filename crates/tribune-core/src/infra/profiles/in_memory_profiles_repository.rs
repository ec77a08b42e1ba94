// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::profiles::models::{NotificationPreferences, Profile};
use crate::domain::profiles::repos::{ProfileAlreadyExistsError, ProfilesRepository};
use crate::domain::shared::models::UserId;

pub struct InMemoryProfilesRepository {
    profiles: RwLock<HashMap<UserId, Profile>>,
}

impl InMemoryProfilesRepository {
    pub fn new() -> Self {
        InMemoryProfilesRepository {
            profiles: Default::default(),
        }
    }
}

impl Default for InMemoryProfilesRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfilesRepository for InMemoryProfilesRepository {
    async fn get(&self, user_id: &UserId) -> Result<Option<Profile>> {
        Ok(self.profiles.read().get(user_id).cloned())
    }

    async fn put(&self, profile: Profile) -> Result<(), ProfileAlreadyExistsError> {
        let mut profiles = self.profiles.write();

        if profiles.contains_key(&profile.user_id) {
            return Err(ProfileAlreadyExistsError);
        }

        profiles.insert(profile.user_id.clone(), profile);
        Ok(())
    }

    async fn set_active(&self, user_id: &UserId, is_active: bool) -> Result<Option<Profile>> {
        let mut profiles = self.profiles.write();

        Ok(profiles.get_mut(user_id).map(|profile| {
            profile.is_active = is_active;
            profile.clone()
        }))
    }

    async fn set_notification_preferences(
        &self,
        user_id: &UserId,
        preferences: NotificationPreferences,
    ) -> Result<Option<Profile>> {
        let mut profiles = self.profiles.write();

        Ok(profiles.get_mut(user_id).map(|profile| {
            profile.notification_preferences = preferences;
            profile.clone()
        }))
    }
}
