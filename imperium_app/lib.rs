pub mod app_bus;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod jobs;
pub mod notifications;
pub mod queries_handlers;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
