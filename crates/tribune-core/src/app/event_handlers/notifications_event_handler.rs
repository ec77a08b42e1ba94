// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use tribune_proc_macros::InjectDependencies;

use crate::app::deps::{DynIDProvider, DynNotificationsRepository, DynTimeProvider};
use crate::app::event_handlers::ClientEventHandler;
use crate::domain::notifications::models::{Notification, NotificationKind};
use crate::ClientEvent;

/// Projects domain events into per-user notification records. External
/// delivery (email, SMS) happens in the delegate layer, not here.
#[derive(InjectDependencies)]
pub struct NotificationsEventHandler {
    #[inject]
    id_provider: DynIDProvider,
    #[inject]
    notifications_repo: DynNotificationsRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

#[async_trait]
impl ClientEventHandler for NotificationsEventHandler {
    fn name(&self) -> &'static str {
        "notifications"
    }

    async fn handle_event(&self, event: &ClientEvent) -> Result<()> {
        match event {
            ClientEvent::ConversationCreated {
                conversation_id,
                representative,
                ..
            } => {
                self.notifications_repo
                    .put(Notification::new(
                        self.id_provider.new_id().into(),
                        representative.clone(),
                        NotificationKind::NewMessage,
                        "New conversation",
                        "A citizen has started a conversation with you.",
                        Some(conversation_id.to_string()),
                        self.time_provider.now(),
                    ))
                    .await?;
            }

            ClientEvent::MessageAppended {
                conversation_id,
                recipient,
                is_system_message,
                ..
            } => {
                // The close notice already produces a ConversationClosed
                // notification; a second entry would be noise.
                if *is_system_message {
                    return Ok(());
                }

                self.notifications_repo
                    .put(Notification::new(
                        self.id_provider.new_id().into(),
                        recipient.clone(),
                        NotificationKind::NewMessage,
                        "New message",
                        "You have received a new message.",
                        Some(conversation_id.to_string()),
                        self.time_provider.now(),
                    ))
                    .await?;
            }

            ClientEvent::ConversationClosed {
                conversation_id,
                other_participant,
                ..
            } => {
                self.notifications_repo
                    .put(Notification::new(
                        self.id_provider.new_id().into(),
                        other_participant.clone(),
                        NotificationKind::ConversationClosed,
                        "Conversation closed",
                        "One of your conversations has been closed.",
                        Some(conversation_id.to_string()),
                        self.time_provider.now(),
                    ))
                    .await?;
            }

            ClientEvent::ReportFiled { .. } => (),
        }

        Ok(())
    }
}
