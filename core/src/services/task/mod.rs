//! Task service module
//!
//! CRUD over the task store with a read-through list cache and
//! fire-and-forget event publication. The store write is authoritative;
//! cache invalidation and event publication run afterwards as independent
//! best-effort hooks.

mod cache;
mod mock;
mod publisher;
mod service;

#[cfg(test)]
mod tests;

pub use cache::TaskCache;
pub use mock::{MockEventPublisher, MockTaskCache};
pub use publisher::EventPublisher;
pub use service::TaskService;
