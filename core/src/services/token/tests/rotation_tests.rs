//! Rotation ladder and replay tests

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::token::{Claims, RefreshToken};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockTokenRepository, TokenRepository};
use crate::services::token::TokenService;

use super::{test_config, test_service, test_user};

fn hash(raw: &str) -> String {
    TokenService::<MockTokenRepository>::hash_token(raw)
}

#[tokio::test]
async fn rotation_succeeds_and_spends_the_token() {
    let (service, repository) = test_service();
    let user = test_user();

    let (access, jti) = service.issue_access_token(&user).unwrap();
    let raw = service.issue_refresh_token(user.id, &jti).await.unwrap();

    let spent = service.consume_refresh_token(&access, &raw).await.unwrap();
    assert_eq!(spent.user_id, user.id);
    assert_eq!(spent.jwt_id, jti);

    let record = repository.get(&hash(&raw)).await.unwrap();
    assert!(record.is_used);
    assert!(!record.is_revoked);
}

#[tokio::test]
async fn expired_access_token_still_rotates() {
    let (service, _) = test_service();
    let user = test_user();

    let mut claims = Claims::new_access_token(&user, "taskdeck-auth", "taskdeck-api", 3);
    claims.iat = (Utc::now() - Duration::hours(5)).timestamp();
    claims.exp = (Utc::now() - Duration::hours(2)).timestamp();
    let expired_access = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test_config().secret.as_bytes()),
    )
    .unwrap();

    let raw = service
        .issue_refresh_token(user.id, &claims.jti)
        .await
        .unwrap();

    assert!(service
        .consume_refresh_token(&expired_access, &raw)
        .await
        .is_ok());
}

#[tokio::test]
async fn unknown_refresh_token_is_rejected() {
    let (service, _) = test_service();
    let user = test_user();

    let (access, _) = service.issue_access_token(&user).unwrap();

    match service.consume_refresh_token(&access, "no-such-token").await {
        Err(DomainError::Token(TokenError::UnknownToken)) => {}
        other => panic!("expected UnknownToken, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn second_rotation_fails_with_token_already_used() {
    let (service, _) = test_service();
    let user = test_user();

    let (access, jti) = service.issue_access_token(&user).unwrap();
    let raw = service.issue_refresh_token(user.id, &jti).await.unwrap();

    service.consume_refresh_token(&access, &raw).await.unwrap();

    match service.consume_refresh_token(&access, &raw).await {
        Err(DomainError::Token(TokenError::TokenAlreadyUsed)) => {}
        other => panic!("expected TokenAlreadyUsed, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn concurrent_rotations_spend_the_token_exactly_once() {
    let (service, _) = test_service();
    let user = test_user();

    let (access, jti) = service.issue_access_token(&user).unwrap();
    let raw = service.issue_refresh_token(user.id, &jti).await.unwrap();

    let (a, b) = tokio::join!(
        service.consume_refresh_token(&access, &raw),
        service.consume_refresh_token(&access, &raw),
    );

    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one concurrent rotation may win");

    let loser = if a.is_ok() { b } else { a };
    match loser {
        Err(DomainError::Token(TokenError::TokenAlreadyUsed)) => {}
        other => panic!("expected TokenAlreadyUsed, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn expired_refresh_token_is_rejected_regardless_of_flags() {
    let (service, repository) = test_service();
    let user = test_user();

    let (access, jti) = service.issue_access_token(&user).unwrap();

    let raw = "expired-refresh-value";
    let mut record = RefreshToken::new(user.id, hash(raw), jti, 7);
    record.expires_at = Utc::now() - Duration::days(1);
    repository.save(record).await.unwrap();

    match service.consume_refresh_token(&access, raw).await {
        Err(DomainError::Token(TokenError::TokenExpired)) => {}
        other => panic!("expected TokenExpired, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn used_flag_is_checked_before_expiry() {
    let (service, repository) = test_service();
    let user = test_user();

    let (access, jti) = service.issue_access_token(&user).unwrap();

    let raw = "used-and-expired";
    let mut record = RefreshToken::new(user.id, hash(raw), jti, 7);
    record.mark_used();
    record.expires_at = Utc::now() - Duration::days(1);
    repository.save(record).await.unwrap();

    match service.consume_refresh_token(&access, raw).await {
        Err(DomainError::Token(TokenError::TokenAlreadyUsed)) => {}
        other => panic!("expected TokenAlreadyUsed, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn garbage_access_token_is_malformed() {
    let (service, _) = test_service();
    let user = test_user();

    let raw = service.issue_refresh_token(user.id, "jti").await.unwrap();

    match service.consume_refresh_token("not-a-jwt", &raw).await {
        Err(DomainError::Token(TokenError::MalformedAccessToken)) => {}
        other => panic!("expected MalformedAccessToken, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn foreign_signature_is_malformed() {
    let (service, _) = test_service();
    let user = test_user();

    let claims = Claims::new_access_token(&user, "taskdeck-auth", "taskdeck-api", 3);
    let forged = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"attacker-key"),
    )
    .unwrap();

    let raw = service
        .issue_refresh_token(user.id, &claims.jti)
        .await
        .unwrap();

    match service.consume_refresh_token(&forged, &raw).await {
        Err(DomainError::Token(TokenError::MalformedAccessToken)) => {}
        other => panic!("expected MalformedAccessToken, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn subject_mismatch_is_rejected_without_spending() {
    let (service, repository) = test_service();
    let alice = test_user();
    let mallory = crate::domain::entities::user::User::new("mallory", "m@x.com", "hash");

    let (mallory_access, _) = service.issue_access_token(&mallory).unwrap();
    let raw = service
        .issue_refresh_token(alice.id, "alice-jti")
        .await
        .unwrap();

    match service.consume_refresh_token(&mallory_access, &raw).await {
        Err(DomainError::Token(TokenError::SubjectMismatch)) => {}
        other => panic!("expected SubjectMismatch, got {:?}", other.map(|_| ())),
    }

    // The mismatch must not consume Alice's token
    let record = repository.get(&hash(&raw)).await.unwrap();
    assert!(!record.is_used);
    assert_eq!(record.user_id, alice.id);
}
