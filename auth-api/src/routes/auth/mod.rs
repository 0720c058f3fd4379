//! Authentication route handlers
//!
//! One handler per file:
//! - registration
//! - login
//! - token refresh (rotation)
//! - logout (refresh token revocation)

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use register::register;
