// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversations_domain_service::{
    ConversationsDomainService, ConversationsDomainServiceDependencies,
};

mod conversations_domain_service;
