//! TaskDeck task service
//!
//! Bearer-protected HTTP surface over the core `TaskService`:
//! - `GET /api/task`
//! - `POST /api/task`
//! - `PUT /api/task/{id}`
//! - `DELETE /api/task/{id}`

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
