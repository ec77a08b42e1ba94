// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_notifications_repository::InMemoryNotificationsRepository;

mod in_memory_notifications_repository;
