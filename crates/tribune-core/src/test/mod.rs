// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use fixtures::{
    citizen_profile, conversation, message, mock_reference_date, representative_profile,
};
pub use mock_app_dependencies::MockAppDependencies;
pub use mock_domain_service_dependencies::{
    MockConversationsDomainServiceDependencies, MockModerationDomainServiceDependencies,
    MockReadTrackingDomainServiceDependencies,
};

pub use tribune_utils::test::IncrementingIDProvider;

mod mock_app_dependencies;
