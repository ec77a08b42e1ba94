// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tribune_utils::test::IncrementingIDProvider;

use crate::app::deps::{AppDependencies, DynIDProvider, DynTimeProvider};
use crate::app::event_handlers::MockClientEventDispatcherTrait;
use crate::domain::conversations::repos::mocks::MockConversationsRepository;
use crate::domain::conversations::services::mocks::MockConversationsDomainService;
use crate::domain::directory::services::mocks::MockDirectoryGateway;
use crate::domain::messaging::services::mocks::MockReadTrackingDomainService;
use crate::domain::moderation::repos::mocks::MockReportsRepository;
use crate::domain::moderation::services::mocks::MockModerationDomainService;
use crate::domain::notifications::repos::mocks::MockNotificationsRepository;
use crate::domain::profiles::repos::mocks::MockProfilesRepository;
use crate::domain::statistics::repos::mocks::MockStatisticsRepository;
use crate::test::{mock_reference_date, ConstantTimeProvider};

pub struct MockAppDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub conversations_domain_service: MockConversationsDomainService,
    pub conversations_repo: MockConversationsRepository,
    pub directory_gateway: MockDirectoryGateway,
    pub id_provider: DynIDProvider,
    pub moderation_domain_service: MockModerationDomainService,
    pub notifications_repo: MockNotificationsRepository,
    pub profiles_repo: MockProfilesRepository,
    pub read_tracking_domain_service: MockReadTrackingDomainService,
    pub reports_repo: MockReportsRepository,
    pub statistics_repo: MockStatisticsRepository,
    pub time_provider: DynTimeProvider,
}

impl Default for MockAppDependencies {
    fn default() -> Self {
        MockAppDependencies {
            client_event_dispatcher: MockClientEventDispatcherTrait::new(),
            conversations_domain_service: MockConversationsDomainService::new(),
            conversations_repo: MockConversationsRepository::new(),
            directory_gateway: MockDirectoryGateway::new(),
            id_provider: Arc::new(IncrementingIDProvider::new("id")),
            moderation_domain_service: MockModerationDomainService::new(),
            notifications_repo: MockNotificationsRepository::new(),
            profiles_repo: MockProfilesRepository::new(),
            read_tracking_domain_service: MockReadTrackingDomainService::new(),
            reports_repo: MockReportsRepository::new(),
            statistics_repo: MockStatisticsRepository::new(),
            time_provider: Arc::new(ConstantTimeProvider::new(mock_reference_date())),
        }
    }
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies {
            client_event_dispatcher: Arc::new(self.client_event_dispatcher),
            conversations_domain_service: Arc::new(self.conversations_domain_service),
            conversations_repo: Arc::new(self.conversations_repo),
            directory_gateway: Arc::new(self.directory_gateway),
            id_provider: self.id_provider,
            moderation_domain_service: Arc::new(self.moderation_domain_service),
            notifications_repo: Arc::new(self.notifications_repo),
            profiles_repo: Arc::new(self.profiles_repo),
            read_tracking_domain_service: Arc::new(self.read_tracking_domain_service),
            reports_repo: Arc::new(self.reports_repo),
            statistics_repo: Arc::new(self.statistics_repo),
            time_provider: self.time_provider,
        }
    }
}
