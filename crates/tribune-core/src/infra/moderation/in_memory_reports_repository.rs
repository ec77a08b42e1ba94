// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use parking_lot::RwLock;

use crate::domain::moderation::models::{ModerationError, Report, ReportId};
use crate::domain::moderation::repos::ReportsRepository;
use crate::domain::shared::models::UserId;

pub struct InMemoryReportsRepository {
    reports: RwLock<HashMap<ReportId, Report>>,
}

impl InMemoryReportsRepository {
    pub fn new() -> Self {
        InMemoryReportsRepository {
            reports: Default::default(),
        }
    }
}

impl Default for InMemoryReportsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportsRepository for InMemoryReportsRepository {
    async fn put(&self, report: Report) -> Result<(), ModerationError> {
        let mut reports = self.reports.write();

        let duplicate = reports.values().any(|existing| {
            existing.message_id == report.message_id && existing.reporter == report.reporter
        });
        if duplicate {
            return Err(ModerationError::DuplicateReport);
        }

        reports.insert(report.id.clone(), report);
        Ok(())
    }

    async fn get(&self, id: &ReportId) -> Result<Option<Report>> {
        Ok(self.reports.read().get(id).cloned())
    }

    async fn get_all_unreviewed(&self) -> Result<Vec<Report>> {
        Ok(self
            .reports
            .read()
            .values()
            .filter(|report| !report.is_reviewed)
            .cloned()
            .sorted_by_key(|report| report.created_at)
            .collect())
    }

    async fn set_reviewed(
        &self,
        id: &ReportId,
        reviewed_by: UserId,
        reviewed_at: DateTime<Utc>,
        action_taken: Option<String>,
    ) -> Result<Report, ModerationError> {
        let mut reports = self.reports.write();

        let Some(report) = reports.get_mut(id) else {
            return Err(ModerationError::ReportNotFound(id.clone()));
        };

        if report.is_reviewed {
            return Err(ModerationError::AlreadyReviewed {
                reviewed_by: report
                    .reviewed_by
                    .clone()
                    .expect("Reviewed report is missing reviewed_by"),
                reviewed_at: report
                    .reviewed_at
                    .expect("Reviewed report is missing reviewed_at"),
            });
        }

        report.is_reviewed = true;
        report.reviewed_at = Some(reviewed_at);
        report.reviewed_by = Some(reviewed_by);
        report.action_taken = action_taken;

        Ok(report.clone())
    }
}
