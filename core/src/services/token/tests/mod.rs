//! Token service test suite

mod rotation_tests;

use std::sync::Arc;

use td_shared::config::JwtConfig;

use crate::domain::entities::user::User;
use crate::repositories::MockTokenRepository;

use super::TokenService;

pub(crate) fn test_config() -> JwtConfig {
    JwtConfig::new("test-secret-key")
}

pub(crate) fn service_with(
    config: JwtConfig,
) -> (TokenService<MockTokenRepository>, Arc<MockTokenRepository>) {
    let repository = Arc::new(MockTokenRepository::new());
    (TokenService::new(repository.clone(), config), repository)
}

pub(crate) fn test_service() -> (TokenService<MockTokenRepository>, Arc<MockTokenRepository>) {
    service_with(test_config())
}

pub(crate) fn test_user() -> User {
    User::new("alice", "alice@x.com", "password-hash")
}
