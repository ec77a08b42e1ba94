// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{UserId, ValidationError};

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("A profile already exists for user {0}.")]
    ProfileExists(UserId),
    #[error("No profile exists for user {0}.")]
    ProfileNotFound(UserId),
    #[error("Representative profiles require a directory id.")]
    MissingDirectoryId,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
