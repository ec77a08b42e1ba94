// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::domain::shared::models::UserId;
use crate::domain::statistics::models::DailyStatistics;
use crate::domain::statistics::repos::StatisticsRepository;

pub struct InMemoryStatisticsRepository {
    rows: RwLock<HashMap<(UserId, NaiveDate), DailyStatistics>>,
}

impl InMemoryStatisticsRepository {
    pub fn new() -> Self {
        InMemoryStatisticsRepository {
            rows: Default::default(),
        }
    }
}

impl Default for InMemoryStatisticsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatisticsRepository for InMemoryStatisticsRepository {
    async fn upsert(&self, statistics: DailyStatistics) -> Result<()> {
        self.rows.write().insert(
            (statistics.user_id.clone(), statistics.date),
            statistics,
        );
        Ok(())
    }

    async fn get(&self, user_id: &UserId, date: NaiveDate) -> Result<Option<DailyStatistics>> {
        Ok(self
            .rows
            .read()
            .get(&(user_id.clone(), date))
            .cloned())
    }
}
