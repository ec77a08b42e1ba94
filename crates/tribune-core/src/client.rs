// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::client_builder::{ClientBuilder, UndefinedDirectoryGateway};
use crate::services::{
    ConversationsService, MessagesService, ModerationService, NotificationsService,
    ProfilesService, StatisticsService,
};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

/// Receives every domain event after the in-core projections ran. This is
/// where the outer delivery layer (email, SMS, web push) hooks in; the core
/// never waits for it.
pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedDirectoryGateway> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub conversations: ConversationsService,
    pub messages: MessagesService,
    pub moderation: ModerationService,
    pub notifications: NotificationsService,
    pub profiles: ProfilesService,
    pub statistics: StatisticsService,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
