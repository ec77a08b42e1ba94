// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tribune_utils::{IDProvider, TimeProvider};

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::conversations::repos::ConversationsRepository;
use crate::domain::conversations::services::ConversationsDomainService;
use crate::domain::directory::services::DirectoryGateway;
use crate::domain::messaging::services::ReadTrackingDomainService;
use crate::domain::moderation::repos::ReportsRepository;
use crate::domain::moderation::services::ModerationDomainService;
use crate::domain::notifications::repos::NotificationsRepository;
use crate::domain::profiles::repos::ProfilesRepository;
use crate::domain::statistics::repos::StatisticsRepository;

pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynConversationsDomainService = Arc<dyn ConversationsDomainService>;
pub(crate) type DynConversationsRepository = Arc<dyn ConversationsRepository>;
pub(crate) type DynDirectoryGateway = Arc<dyn DirectoryGateway>;
pub(crate) type DynIDProvider = Arc<dyn IDProvider>;
pub(crate) type DynModerationDomainService = Arc<dyn ModerationDomainService>;
pub(crate) type DynNotificationsRepository = Arc<dyn NotificationsRepository>;
pub(crate) type DynProfilesRepository = Arc<dyn ProfilesRepository>;
pub(crate) type DynReadTrackingDomainService = Arc<dyn ReadTrackingDomainService>;
pub(crate) type DynReportsRepository = Arc<dyn ReportsRepository>;
pub(crate) type DynStatisticsRepository = Arc<dyn StatisticsRepository>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub conversations_domain_service: DynConversationsDomainService,
    pub conversations_repo: DynConversationsRepository,
    pub directory_gateway: DynDirectoryGateway,
    pub id_provider: DynIDProvider,
    pub moderation_domain_service: DynModerationDomainService,
    pub notifications_repo: DynNotificationsRepository,
    pub profiles_repo: DynProfilesRepository,
    pub read_tracking_domain_service: DynReadTrackingDomainService,
    pub reports_repo: DynReportsRepository,
    pub statistics_repo: DynStatisticsRepository,
    pub time_provider: DynTimeProvider,
}
