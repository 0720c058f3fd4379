//! Application state shared by the route handlers.

use std::sync::Arc;

use td_core::repositories::{TokenRepository, UserRepository};
use td_core::services::auth::{AuthService, PasswordHasher};

/// Shared state injected into every handler
pub struct AppState<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordHasher,
{
    pub auth_service: Arc<AuthService<U, T, P>>,
}

impl<U, T, P> AppState<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordHasher,
{
    pub fn new(auth_service: Arc<AuthService<U, T, P>>) -> Self {
        Self { auth_service }
    }
}
