//! TaskDeck auth service
//!
//! HTTP surface over the core `AuthService`:
//! - `POST /api/auth/register`
//! - `POST /api/auth/login`
//! - `POST /api/auth/refresh`
//! - `POST /api/auth/logout`

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
