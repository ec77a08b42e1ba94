// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use crate::app::services::{ConversationsFilter, CreateProfileRequest};
pub use crate::domain::{
    conversations::models::{Conversation, ConversationError, ConversationId, Rating, Subject},
    conversations::services::{CreateConversationRequest, SendMessageRequest},
    directory::models::{DirectoryError, DirectoryId, RepresentativeCard},
    messaging::models::{Message, MessageContent, MessageId, ReadTrackingError},
    moderation::models::{ModerationError, Report, ReportId, ReportReason},
    moderation::services::FileReportRequest,
    notifications::models::{Notification, NotificationId, NotificationKind},
    profiles::models::{NotificationPreferences, PhoneNumber, Profile, ProfileError},
    shared::models::{Role, UserId, ValidationError},
    statistics::models::{ConversationStats, DailyStatistics, UserStats},
};
