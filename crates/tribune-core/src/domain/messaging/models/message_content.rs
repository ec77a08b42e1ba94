// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::ValidationError;

pub const MAX_MESSAGE_LENGTH: usize = 500;

/// Message body, trimmed of surrounding whitespace, non-empty and at most
/// `MAX_MESSAGE_LENGTH` characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageContent(String);

impl MessageContent {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        let len = trimmed.chars().count();
        if len > MAX_MESSAGE_LENGTH {
            return Err(ValidationError::ContentTooLong {
                len,
                max: MAX_MESSAGE_LENGTH,
            });
        }

        Ok(MessageContent(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for MessageContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for MessageContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
