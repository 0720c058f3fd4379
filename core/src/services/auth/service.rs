//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::token::{RotatedTokens, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::password::PasswordHasher;

/// Authentication service orchestrating the credential store, password
/// hashing, and the token service.
pub struct AuthService<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordHasher,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Token service for the token lifecycle
    token_service: Arc<TokenService<T>>,
    /// Password hashing capability
    password_hasher: Arc<P>,
}

impl<U, T, P> AuthService<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordHasher,
{
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        password_hasher: Arc<P>,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            password_hasher,
        }
    }

    /// Registers a new account.
    ///
    /// Fails with `DuplicateUser` when the username or email is already
    /// taken. The password is hashed before anything is persisted and the
    /// account receives the default role.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        if self
            .user_repository
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateUser.into());
        }
        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::DuplicateUser.into());
        }

        let password_hash = self.password_hasher.hash(password)?;
        let user = self
            .user_repository
            .save(User::new(username, email, password_hash))
            .await?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticates by email and password, issuing one access token and
    /// one refresh token.
    ///
    /// A missing account and a wrong password are indistinguishable to the
    /// caller: both are `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(password, &user.password_hash)?
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        let (access_token, jti) = self.token_service.issue_access_token(&user)?;
        let refresh_token = self.token_service.issue_refresh_token(user.id, &jti).await?;

        debug!(user_id = %user.id, "login issued token pair");
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Exchanges a spent access token plus an active refresh token for a
    /// new access token.
    ///
    /// The token service performs the rotation ladder and spends the
    /// refresh token; this method completes the exchange by loading the
    /// owning user (`UserNotFound` when deleted since issuance) and issuing
    /// the replacement. A fresh refresh token is attached only when chain
    /// renewal is configured.
    pub async fn refresh(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> DomainResult<RotatedTokens> {
        let spent = self
            .token_service
            .consume_refresh_token(access_token, refresh_token)
            .await?;

        let user = self
            .user_repository
            .find_by_id(spent.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let (new_access, new_jti) = self.token_service.issue_access_token(&user)?;

        let new_refresh = if self.token_service.rotation_renews_refresh_token() {
            Some(
                self.token_service
                    .issue_refresh_token(user.id, &new_jti)
                    .await?,
            )
        } else {
            None
        };

        debug!(user_id = %user.id, "access token rotated");
        Ok(RotatedTokens {
            access_token: new_access,
            refresh_token: new_refresh,
        })
    }

    /// Revokes a refresh token, ending its chain.
    ///
    /// Returns whether a live token was actually revoked; revoking an
    /// unknown or already-inert token is not an error.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<bool> {
        self.token_service.revoke_refresh_token(refresh_token).await
    }
}
