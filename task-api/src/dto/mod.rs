//! Request and response DTOs

pub mod task;

pub use task::TaskRequest;
