//! Auth service test suite


use std::sync::Arc;

use td_shared::config::JwtConfig;

use crate::repositories::{MockTokenRepository, MockUserRepository};
use crate::services::token::TokenService;

use super::password::MockPasswordHasher;
use super::AuthService;

pub(crate) type TestAuthService =
    AuthService<MockUserRepository, MockTokenRepository, MockPasswordHasher>;

pub(crate) fn auth_service_with(config: JwtConfig) -> (TestAuthService, Arc<MockUserRepository>) {
    let user_repository = Arc::new(MockUserRepository::new());
    let token_repository = Arc::new(MockTokenRepository::new());
    let token_service = Arc::new(TokenService::new(token_repository, config));

    let service = AuthService::new(
        user_repository.clone(),
        token_service,
        Arc::new(MockPasswordHasher),
    );
    (service, user_repository)
}

pub(crate) fn auth_service() -> (TestAuthService, Arc<MockUserRepository>) {
    auth_service_with(JwtConfig::new("test-secret-key"))
}
