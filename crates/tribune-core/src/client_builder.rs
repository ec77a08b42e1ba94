// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tribune_utils::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};

use crate::app::deps::{
    AppDependencies, DynConversationsRepository, DynDirectoryGateway, DynIDProvider,
    DynNotificationsRepository, DynProfilesRepository, DynReportsRepository,
    DynStatisticsRepository, DynTimeProvider,
};
use crate::app::event_handlers::NotificationsEventHandler;
use crate::client::ClientInner;
use crate::domain::conversations::services::impls::{
    ConversationsDomainService, ConversationsDomainServiceDependencies,
};
use crate::domain::directory::services::DirectoryGateway;
use crate::domain::messaging::services::impls::{
    ReadTrackingDomainService, ReadTrackingDomainServiceDependencies,
};
use crate::domain::moderation::services::impls::{
    ModerationDomainService, ModerationDomainServiceDependencies,
};
use crate::infra::conversations::InMemoryConversationsRepository;
use crate::infra::directory::{CachingDirectoryGateway, DirectoryConfig};
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::moderation::InMemoryReportsRepository;
use crate::infra::notifications::InMemoryNotificationsRepository;
use crate::infra::profiles::InMemoryProfilesRepository;
use crate::infra::statistics::InMemoryStatisticsRepository;
use crate::services::{
    ConversationsService, MessagesService, ModerationService, NotificationsService,
    ProfilesService, StatisticsService,
};
use crate::{Client, ClientDelegate};

pub struct UndefinedDirectoryGateway;

/// Assembles a `Client`. Repositories default to the in-memory
/// implementations; the directory gateway has no sensible default and must
/// be provided before `build` becomes available.
pub struct ClientBuilder<G> {
    conversations_repo: DynConversationsRepository,
    delegate: Option<Box<dyn ClientDelegate>>,
    directory_config: DirectoryConfig,
    directory_gateway: G,
    id_provider: DynIDProvider,
    notifications_repo: DynNotificationsRepository,
    profiles_repo: DynProfilesRepository,
    reports_repo: DynReportsRepository,
    statistics_repo: DynStatisticsRepository,
    time_provider: DynTimeProvider,
}

impl ClientBuilder<UndefinedDirectoryGateway> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            conversations_repo: Arc::new(InMemoryConversationsRepository::new()),
            delegate: None,
            directory_config: DirectoryConfig::default(),
            directory_gateway: UndefinedDirectoryGateway,
            id_provider: Arc::new(UUIDProvider::default()),
            notifications_repo: Arc::new(InMemoryNotificationsRepository::new()),
            profiles_repo: Arc::new(InMemoryProfilesRepository::new()),
            reports_repo: Arc::new(InMemoryReportsRepository::new()),
            statistics_repo: Arc::new(InMemoryStatisticsRepository::new()),
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    pub fn set_directory_gateway(
        self,
        directory_gateway: Arc<dyn DirectoryGateway>,
    ) -> ClientBuilder<Arc<dyn DirectoryGateway>> {
        ClientBuilder {
            conversations_repo: self.conversations_repo,
            delegate: self.delegate,
            directory_config: self.directory_config,
            directory_gateway,
            id_provider: self.id_provider,
            notifications_repo: self.notifications_repo,
            profiles_repo: self.profiles_repo,
            reports_repo: self.reports_repo,
            statistics_repo: self.statistics_repo,
            time_provider: self.time_provider,
        }
    }
}

impl<G> ClientBuilder<G> {
    pub fn set_conversations_repo(mut self, repo: DynConversationsRepository) -> Self {
        self.conversations_repo = repo;
        self
    }

    pub fn set_profiles_repo(mut self, repo: DynProfilesRepository) -> Self {
        self.profiles_repo = repo;
        self
    }

    pub fn set_reports_repo(mut self, repo: DynReportsRepository) -> Self {
        self.reports_repo = repo;
        self
    }

    pub fn set_notifications_repo(mut self, repo: DynNotificationsRepository) -> Self {
        self.notifications_repo = repo;
        self
    }

    pub fn set_statistics_repo(mut self, repo: DynStatisticsRepository) -> Self {
        self.statistics_repo = repo;
        self
    }

    pub fn set_directory_config(mut self, config: DirectoryConfig) -> Self {
        self.directory_config = config;
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<Arc<dyn DirectoryGateway>> {
    pub fn build(self) -> Client {
        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));

        let directory_gateway: DynDirectoryGateway = Arc::new(CachingDirectoryGateway::new(
            self.directory_gateway,
            self.directory_config.cache_ttl,
            self.time_provider.clone(),
        ));

        let conversations_domain_service =
            Arc::new(ConversationsDomainService::from(
                ConversationsDomainServiceDependencies {
                    client_event_dispatcher: event_dispatcher.clone(),
                    conversations_repo: self.conversations_repo.clone(),
                    directory_gateway: directory_gateway.clone(),
                    id_provider: self.id_provider.clone(),
                    profiles_repo: self.profiles_repo.clone(),
                    time_provider: self.time_provider.clone(),
                },
            ));

        let read_tracking_domain_service = Arc::new(ReadTrackingDomainService::from(
            ReadTrackingDomainServiceDependencies {
                conversations_repo: self.conversations_repo.clone(),
                time_provider: self.time_provider.clone(),
            },
        ));

        let moderation_domain_service = Arc::new(ModerationDomainService::from(
            ModerationDomainServiceDependencies {
                client_event_dispatcher: event_dispatcher.clone(),
                conversations_repo: self.conversations_repo.clone(),
                id_provider: self.id_provider.clone(),
                reports_repo: self.reports_repo.clone(),
                time_provider: self.time_provider.clone(),
            },
        ));

        let dependencies = AppDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            conversations_domain_service,
            conversations_repo: self.conversations_repo,
            directory_gateway,
            id_provider: self.id_provider,
            moderation_domain_service,
            notifications_repo: self.notifications_repo,
            profiles_repo: self.profiles_repo,
            read_tracking_domain_service,
            reports_repo: self.reports_repo,
            statistics_repo: self.statistics_repo,
            time_provider: self.time_provider,
        };

        event_dispatcher.set_handlers(vec![Box::new(NotificationsEventHandler::from(
            &dependencies,
        ))]);

        let client_inner = Arc::new(ClientInner {
            conversations: ConversationsService::from(&dependencies),
            messages: MessagesService::from(&dependencies),
            moderation: ModerationService::from(&dependencies),
            notifications: NotificationsService::from(&dependencies),
            profiles: ProfilesService::from(&dependencies),
            statistics: StatisticsService::from(&dependencies),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
