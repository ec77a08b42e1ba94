// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use tribune_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynClientEventDispatcher, DynConversationsRepository, DynIDProvider, DynReportsRepository,
    DynTimeProvider,
};
use crate::domain::moderation::models::{ModerationError, Report, ReportId};
use crate::domain::moderation::services::FileReportRequest;
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

use super::super::ModerationDomainService as ModerationDomainServiceTrait;

#[derive(DependenciesStruct)]
pub struct ModerationDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    conversations_repo: DynConversationsRepository,
    id_provider: DynIDProvider,
    reports_repo: DynReportsRepository,
    time_provider: DynTimeProvider,
}

#[async_trait]
impl ModerationDomainServiceTrait for ModerationDomainService {
    #[tracing::instrument(skip(self, request), fields(message = %request.message_id, reporter = %request.reporter))]
    async fn file_report(&self, request: FileReportRequest) -> Result<Report, ModerationError> {
        let conversation = self
            .conversations_repo
            .get(&request.conversation_id)
            .await?
            .ok_or_else(|| {
                ModerationError::ConversationNotFound(request.conversation_id.clone())
            })?;

        if !conversation.is_participant(&request.reporter) {
            return Err(ModerationError::NotParticipant);
        }

        let message = self
            .conversations_repo
            .get_message(&request.conversation_id, &request.message_id)
            .await?
            .ok_or_else(|| ModerationError::MessageNotFound(request.message_id.clone()))?;

        if message.sender == request.reporter {
            return Err(ModerationError::CannotReportSelf);
        }

        let report = Report::new(
            self.id_provider.new_id().into(),
            request.conversation_id,
            request.message_id,
            request.reporter,
            request.reason,
            request.description,
            self.time_provider.now(),
        );

        self.reports_repo.put(report.clone()).await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ReportFiled {
                report_id: report.id.clone(),
                message_id: report.message_id.clone(),
                reporter: report.reporter.clone(),
            })
            .await;

        Ok(report)
    }

    #[tracing::instrument(skip(self, action_taken), fields(report = %report_id, reviewer = %reviewer))]
    async fn review_report(
        &self,
        report_id: &ReportId,
        reviewer: &UserId,
        action_taken: Option<String>,
    ) -> Result<Report, ModerationError> {
        self.reports_repo
            .set_reviewed(
                report_id,
                reviewer.clone(),
                self.time_provider.now(),
                action_taken,
            )
            .await
    }
}
