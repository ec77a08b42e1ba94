// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::directory::models::DirectoryId;
use crate::domain::shared::models::{Role, UserId};

use super::PhoneNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        NotificationPreferences {
            email: true,
            sms: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    /// Fixed at creation. There is no operation to change it.
    pub role: Role,
    pub full_name: String,
    pub phone: Option<PhoneNumber>,
    pub governorate: Option<String>,
    pub district: Option<String>,
    /// Identifier of the representative in the external directory.
    /// Always `None` for citizens and admins.
    pub directory_id: Option<DirectoryId>,
    pub notification_preferences: NotificationPreferences,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            self.user_id.as_ref()
        } else {
            &self.full_name
        }
    }
}
