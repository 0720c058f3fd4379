//! JWT authentication middleware for protecting the task endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! through the shared `TokenVerifier`, and injects an `AuthContext` into
//! the request for handlers to extract.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use td_core::domain::entities::token::Claims;
use td_core::errors::{DomainError, TokenError};
use td_core::services::token::TokenVerifier;
use td_shared::types::ErrorResponse;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID from the subject claim
    pub user_id: Uuid,
    /// Email of the subject
    pub email: String,
    /// Roles granted to the subject
    pub roles: Vec<String>,
    /// JWT ID of the presented token
    pub jti: String,
}

impl AuthContext {
    fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        Ok(Self {
            user_id,
            email: claims.email,
            roles: claims.roles,
            jti: claims.jti,
        })
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().cloned();
        ready(context.ok_or_else(|| {
            unauthorized(TokenError::InvalidToken.into(), "missing auth context")
        }))
    }
}

fn unauthorized(err: DomainError, detail: &str) -> Error {
    tracing::debug!(error = %err, detail, "rejecting unauthenticated request");
    let response =
        HttpResponse::Unauthorized().json(ErrorResponse::new(err.error_code(), err.to_string()));
    InternalError::from_response(detail.to_string(), response).into()
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    verifier: TokenVerifier,
}

impl JwtAuth {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: self.verifier.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: TokenVerifier,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = self.verifier.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(unauthorized(
                        TokenError::InvalidToken.into(),
                        "missing or malformed Authorization header",
                    ));
                }
            };

            let context = verifier
                .verify(&token)
                .and_then(AuthContext::from_claims)
                .map_err(|e| unauthorized(e, "bearer token rejected"))?;

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Pull the token out of `Authorization: Bearer <token>`
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    header
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
