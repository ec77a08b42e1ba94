// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversations_domain_service::{
    ConversationsDomainService, CreateConversationRequest, SendMessageRequest,
};

mod conversations_domain_service;

pub mod impls;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::conversations_domain_service::MockConversationsDomainService;
}
