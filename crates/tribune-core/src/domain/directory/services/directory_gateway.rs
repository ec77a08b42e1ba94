// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::directory::models::{DirectoryError, DirectoryId, RepresentativeCard};

/// Access to the external representative directory. Implementations must
/// bound every call with a timeout and surface connectivity problems as
/// `DirectoryError::Unavailable` instead of hanging or panicking.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DirectoryGateway: Send + Sync {
    async fn exists(&self, id: &DirectoryId) -> Result<bool, DirectoryError>;

    async fn fetch_metadata(
        &self,
        id: &DirectoryId,
    ) -> Result<Option<RepresentativeCard>, DirectoryError>;
}
