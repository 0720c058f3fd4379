//! Common wire types shared by the service crates

pub mod response;

pub use response::{ErrorResponse, MessageResponse};
