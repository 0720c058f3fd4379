//! Stateless access token verification.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use td_shared::config::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// Verifies access token claims against the deployment's key, issuer, and
/// audience.
///
/// Verification is side-effect free and safe to call concurrently, so the
/// verifier can be shared by the token service and any bearer-protected API
/// without a repository handle.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    expired_ok: Validation,
}

impl TokenVerifier {
    pub fn new(config: &JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;

        // Rotation must read the subject out of an already-expired access
        // token; signature, issuer, and audience still have to hold.
        let mut expired_ok = validation.clone();
        expired_ok.validate_exp = false;

        Self {
            decoding_key,
            validation,
            expired_ok,
        }
    }

    /// Fully validate an access token: signature, issuer, audience, expiry.
    ///
    /// `TokenExpired` is distinguished from every other failure so callers
    /// can suggest a refresh.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })
    }

    /// Validate everything except expiry and return the claims.
    ///
    /// Any failure is `MalformedAccessToken`: the rotation path does not
    /// care why the old token failed, only that it cannot be trusted.
    pub fn decode_expired(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.expired_ok)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Token(TokenError::MalformedAccessToken))
    }
}
