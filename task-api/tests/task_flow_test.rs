//! End-to-end task CRUD over the HTTP surface, backed by in-memory mocks.

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::json;

use td_core::domain::entities::user::User;
use td_core::repositories::{MockTaskRepository, MockTokenRepository};
use td_core::services::task::{MockEventPublisher, MockTaskCache, TaskService};
use td_core::services::token::{TokenService, TokenVerifier};
use td_shared::config::JwtConfig;
use td_task_api::{create_app, AppState};

type TestState = AppState<MockTaskRepository, MockTaskCache, MockEventPublisher>;

struct Harness {
    state: web::Data<TestState>,
    repository: Arc<MockTaskRepository>,
    cache: Arc<MockTaskCache>,
    publisher: Arc<MockEventPublisher>,
    token_service: TokenService<MockTokenRepository>,
}

fn harness() -> Harness {
    let config = JwtConfig::new("integration-test-secret");
    let repository = Arc::new(MockTaskRepository::new());
    let cache = Arc::new(MockTaskCache::new());
    let publisher = Arc::new(MockEventPublisher::new());
    let task_service = Arc::new(TaskService::new(
        repository.clone(),
        cache.clone(),
        publisher.clone(),
    ));

    Harness {
        state: web::Data::new(AppState::new(task_service, TokenVerifier::new(&config))),
        repository,
        cache,
        publisher,
        token_service: TokenService::new(Arc::new(MockTokenRepository::new()), config),
    }
}

impl Harness {
    fn bearer_for(&self, username: &str) -> (User, String) {
        let user = User::new(username, format!("{username}@x.com"), "hash");
        let (token, _) = self.token_service.issue_access_token(&user).unwrap();
        (user, format!("Bearer {token}"))
    }
}

#[actix_web::test]
async fn requests_without_a_bearer_token_are_rejected() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/task").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/task")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_TOKEN");
}

#[actix_web::test]
async fn expired_bearer_token_reports_token_expired() {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let user = User::new("alice", "alice@x.com", "hash");
    let mut claims = td_core::domain::entities::token::Claims::new_access_token(
        &user,
        "taskdeck-auth",
        "taskdeck-api",
        3,
    );
    claims.iat = (chrono::Utc::now() - chrono::Duration::hours(4)).timestamp();
    claims.exp = (chrono::Utc::now() - chrono::Duration::hours(1)).timestamp();
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"integration-test-secret"),
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/task")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_EXPIRED");
}

#[actix_web::test]
async fn crud_flow_with_cache_and_events() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;
    let (_user, bearer) = h.bearer_for("alice");

    // create
    let req = test::TestRequest::post()
        .uri("/api/task")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({ "title": "Write report", "description": "Q3", "isCompleted": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let task_id = created["id"].as_i64().unwrap();

    // first list reads the store and populates the cache
    let req = test::TestRequest::get()
        .uri("/api/task")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(h.repository.list_call_count(), 1);
    assert!(h.cache.entry().await.is_some());

    // second list is served from the cache
    let req = test::TestRequest::get()
        .uri("/api/task")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(h.repository.list_call_count(), 1);

    // update invalidates the cache
    let req = test::TestRequest::put()
        .uri(&format!("/api/task/{task_id}"))
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({ "title": "Write report", "description": "Q3", "isCompleted": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);
    assert!(h.cache.entry().await.is_none());

    // delete
    let req = test::TestRequest::delete()
        .uri(&format!("/api/task/{task_id}"))
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let events = h.publisher.published().await;
    let kinds: Vec<String> = events
        .iter()
        .map(|e| serde_json::to_value(e).unwrap()["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["TaskCreated", "TaskUpdated", "TaskDeleted"]);
}

#[actix_web::test]
async fn foreign_tasks_read_as_missing() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;
    let (_alice, alice_bearer) = h.bearer_for("alice");
    let (_mallory, mallory_bearer) = h.bearer_for("mallory");

    let req = test::TestRequest::post()
        .uri("/api/task")
        .insert_header(("Authorization", alice_bearer))
        .set_json(json!({ "title": "Alice's task" }))
        .to_request();
    let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let task_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/task/{task_id}"))
        .insert_header(("Authorization", mallory_bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn blank_title_is_a_validation_error() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;
    let (_user, bearer) = h.bearer_for("alice");

    let req = test::TestRequest::post()
        .uri("/api/task")
        .insert_header(("Authorization", bearer))
        .set_json(json!({ "title": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["errors"].is_object());
}
