// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use async_trait::async_trait;
use tracing::error;

use crate::app::event_handlers::{ClientEventDispatcherTrait, ClientEventHandler};
use crate::client::ClientInner;
use crate::{Client, ClientDelegate, ClientEvent};

/// Runs the registered projection handlers synchronously, then hands the
/// event to the delegate without waiting for whatever the delegate does
/// with it.
pub struct ImmediateClientEventDispatcher {
    client: OnceLock<Weak<ClientInner>>,
    handlers: OnceLock<Vec<Box<dyn ClientEventHandler>>>,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ImmediateClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self {
            client: Default::default(),
            handlers: Default::default(),
            delegate,
        }
    }

    pub(crate) fn set_client_inner(&self, client: Weak<ClientInner>) {
        self.client.set(client).map_err(|_| ()).expect(
            "Tried to set ClientInner on ImmediateClientEventDispatcher more than once",
        );
    }

    pub(crate) fn set_handlers(&self, handlers: Vec<Box<dyn ClientEventHandler>>) {
        self.handlers.set(handlers).map_err(|_| ()).expect(
            "Tried to set handlers on ImmediateClientEventDispatcher more than once",
        );
    }
}

#[async_trait]
impl ClientEventDispatcherTrait for ImmediateClientEventDispatcher {
    async fn dispatch_event(&self, event: ClientEvent) {
        if let Some(handlers) = self.handlers.get() {
            for handler in handlers {
                if let Err(err) = handler.handle_event(&event).await {
                    error!(
                        handler = handler.name(),
                        "Event handler failed: {err:#}"
                    );
                }
            }
        }

        let Some(ref delegate) = self.delegate else {
            return;
        };

        let Some(client_inner) = self
            .client
            .get()
            .expect("ClientInner was not set on ImmediateClientEventDispatcher")
            .upgrade()
        else {
            return;
        };

        delegate.handle_event(Client::from(client_inner), event)
    }
}
