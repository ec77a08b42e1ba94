// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::ValidationError;

pub const MAX_SUBJECT_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptySubject);
        }

        let len = trimmed.chars().count();
        if len > MAX_SUBJECT_LENGTH {
            return Err(ValidationError::SubjectTooLong {
                len,
                max: MAX_SUBJECT_LENGTH,
            });
        }

        Ok(Subject(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
