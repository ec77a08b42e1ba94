// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::shared::models::UserId;
use crate::domain::statistics::models::DailyStatistics;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait StatisticsRepository: Send + Sync {
    /// Inserts or replaces the row for (user, date).
    async fn upsert(&self, statistics: DailyStatistics) -> Result<()>;

    async fn get(&self, user_id: &UserId, date: NaiveDate) -> Result<Option<DailyStatistics>>;
}
