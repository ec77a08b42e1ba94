// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::moderation::models::{ModerationError, Report, ReportId};
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ReportsRepository: Send + Sync {
    /// Inserts `report`, enforcing the uniqueness of (message, reporter).
    /// Fails with `DuplicateReport` when that pair exists already.
    async fn put(&self, report: Report) -> Result<(), ModerationError>;

    async fn get(&self, id: &ReportId) -> Result<Option<Report>>;

    /// Reports awaiting review, oldest first.
    async fn get_all_unreviewed(&self) -> Result<Vec<Report>>;

    /// One-way transition to reviewed, atomic on the report row. Fails with
    /// `AlreadyReviewed` carrying the existing review state.
    async fn set_reviewed(
        &self,
        id: &ReportId,
        reviewed_by: UserId,
        reviewed_at: DateTime<Utc>,
        action_taken: Option<String>,
    ) -> Result<Report, ModerationError>;
}
