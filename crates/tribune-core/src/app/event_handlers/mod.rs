// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use notifications_event_handler::NotificationsEventHandler;

use crate::ClientEvent;

mod notifications_event_handler;

/// `ClientEventHandler` is a trait for in-core projections reacting to
/// domain events (notifications, statistics). Handlers run before the
/// delegate is informed; a failing handler is logged and skipped, it never
/// fails the operation that emitted the event.
#[async_trait]
pub trait ClientEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: &ClientEvent) -> Result<()>;
}

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    async fn dispatch_event(&self, event: ClientEvent);
}
