// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use tribune_proc_macros::InjectDependencies;

use crate::app::deps::{DynModerationDomainService, DynReportsRepository};
use crate::domain::moderation::models::{ModerationError, Report, ReportId};
use crate::domain::moderation::services::FileReportRequest;
use crate::domain::shared::models::UserId;

#[derive(InjectDependencies)]
pub struct ModerationService {
    #[inject]
    moderation_domain_service: DynModerationDomainService,
    #[inject]
    reports_repo: DynReportsRepository,
}

impl ModerationService {
    pub async fn file_report(&self, request: FileReportRequest) -> Result<Report, ModerationError> {
        self.moderation_domain_service.file_report(request).await
    }

    pub async fn review_report(
        &self,
        report_id: &ReportId,
        reviewer: &UserId,
        action_taken: Option<String>,
    ) -> Result<Report, ModerationError> {
        self.moderation_domain_service
            .review_report(report_id, reviewer, action_taken)
            .await
    }

    /// Reports awaiting review, oldest first.
    pub async fn load_unreviewed_reports(&self) -> Result<Vec<Report>> {
        self.reports_repo.get_all_unreviewed().await
    }
}
