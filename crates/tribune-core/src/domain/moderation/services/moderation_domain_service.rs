// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::conversations::models::ConversationId;
use crate::domain::messaging::models::MessageId;
use crate::domain::moderation::models::{ModerationError, Report, ReportId, ReportReason};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct FileReportRequest {
    pub conversation_id: ConversationId,
    pub message_id: MessageId,
    pub reporter: UserId,
    pub reason: ReportReason,
    pub description: Option<String>,
}

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ModerationDomainService: Send + Sync {
    /// Files a report against a message on behalf of a participant of its
    /// conversation. Fails with `CannotReportSelf` for the message's own
    /// sender and with `DuplicateReport` when the same user reported the
    /// same message before. Dispatches `ClientEvent::ReportFiled` after
    /// processing.
    async fn file_report(&self, request: FileReportRequest) -> Result<Report, ModerationError>;

    /// Marks a report as reviewed. The transition is one-way; repeated calls
    /// fail with `AlreadyReviewed`.
    async fn review_report(
        &self,
        report_id: &ReportId,
        reviewer: &UserId,
        action_taken: Option<String>,
    ) -> Result<Report, ModerationError>;
}
