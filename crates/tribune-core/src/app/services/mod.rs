// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversations_service::{ConversationsFilter, ConversationsService};
pub use messages_service::MessagesService;
pub use moderation_service::ModerationService;
pub use notifications_service::NotificationsService;
pub use profiles_service::{CreateProfileRequest, ProfilesService};
pub use statistics_service::StatisticsService;

mod conversations_service;
mod messages_service;
mod moderation_service;
mod notifications_service;
mod profiles_service;
mod statistics_service;
