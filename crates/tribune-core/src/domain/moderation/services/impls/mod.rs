// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use moderation_domain_service::{ModerationDomainService, ModerationDomainServiceDependencies};

mod moderation_domain_service;
