//! Blog API integration tests
//!
//! CRUD over /blogs through the full router, including the auth gate.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use jsonwebtoken::get_current_timestamp;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use blog_backend::backend::auth::sessions::{Claims, TokenKeys, DEFAULT_TOKEN_TTL_SECS};

use crate::common::{assert_error, auth_header, create_test_app, TestApp, TEST_SECRET};

async fn create(app: &TestApp, token: &str, title: &str, description: &str) -> Value {
    let (name, value) = auth_header(token);
    let response = app
        .server
        .post("/blogs")
        .add_header(name, value)
        .json(&json!({ "title": title, "description": description }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

async fn list(app: &TestApp) -> Vec<Value> {
    let response = app.server.get("/blogs").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_list_empty() {
    let app = create_test_app().await;
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_create_post() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;

    let post = create(&app, &token, "Hello", "World").await;

    assert_eq!(post["title"], "Hello");
    assert_eq!(post["description"], "World");
    assert!(Uuid::parse_str(post["id"].as_str().unwrap()).is_ok());
    assert!(post["createdAt"].is_string());
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;

    let p1 = create(&app, &token, "P1", "first").await;
    let p2 = create(&app, &token, "P2", "second").await;

    let posts = list(&app).await;
    assert_eq!(posts, vec![p2, p1]);
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/blogs")
        .json(&json!({ "title": "Hello", "description": "World" }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED);
    assert_eq!(app.db.count_posts().await, 0);
}

#[tokio::test]
async fn test_create_accepts_lowercase_scheme() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;

    let response = app
        .server
        .post("/blogs")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("bearer {}", token)).unwrap(),
        )
        .json(&json!({ "title": "Hello", "description": "World" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_rejects_foreign_token() {
    let app = create_test_app().await;
    let forged = TokenKeys::new(b"not-the-server-secret", DEFAULT_TOKEN_TTL_SECS)
        .create_token(Uuid::new_v4())
        .unwrap();
    let (name, value) = auth_header(&forged);

    let response = app
        .server
        .post("/blogs")
        .add_header(name, value)
        .json(&json!({ "title": "Hello", "description": "World" }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_rejects_expired_token() {
    let app = create_test_app().await;
    let now = get_current_timestamp();
    let expired = TokenKeys::new(TEST_SECRET, DEFAULT_TOKEN_TTL_SECS)
        .sign(&Claims {
            sub: Uuid::new_v4().to_string(),
            exp: now - 3600,
            iat: now - 7200,
        })
        .unwrap();
    let (name, value) = auth_header(&expired);

    let response = app
        .server
        .post("/blogs")
        .add_header(name, value)
        .json(&json!({ "title": "Hello", "description": "World" }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_missing_fields_persists_nothing() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;

    for body in [
        json!({ "title": "Only a title" }),
        json!({ "description": "Only a description" }),
        json!({ "title": "", "description": "Empty title" }),
    ] {
        let (name, value) = auth_header(&token);
        let response = app
            .server
            .post("/blogs")
            .add_header(name, value)
            .json(&body)
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST);
    }

    assert_eq!(app.db.count_posts().await, 0);
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_update_merges_provided_fields() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;
    let post = create(&app, &token, "Draft", "Body").await;
    let id = post["id"].as_str().unwrap();

    let (name, value) = auth_header(&token);
    let response = app
        .server
        .put(&format!("/blogs/{}", id))
        .add_header(name, value)
        .json(&json!({ "title": "Final", "tags": ["ignored"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["id"], post["id"]);
    assert_eq!(updated["title"], "Final");
    assert_eq!(updated["description"], "Body");
    assert_eq!(updated["createdAt"], post["createdAt"]);
    assert!(updated.get("tags").is_none());

    assert_eq!(list(&app).await, vec![updated]);
}

#[tokio::test]
async fn test_any_user_may_modify_any_post() {
    let app = create_test_app().await;
    let alice = app.register("alice", "password123").await;
    let bob = app.register("bob", "hunter22").await;

    let post = create(&app, &alice, "Alice's post", "Body").await;
    let id = post["id"].as_str().unwrap();

    let (name, value) = auth_header(&bob);
    let response = app
        .server
        .put(&format!("/blogs/{}", id))
        .add_header(name, value)
        .json(&json!({ "description": "Edited by Bob" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let (name, value) = auth_header(&bob);
    let response = app
        .server
        .delete(&format!("/blogs/{}", id))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_update_unknown_post() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let (name, value) = auth_header(&token);
        let response = app
            .server
            .put(&format!("/blogs/{}", id))
            .add_header(name, value)
            .json(&json!({ "title": "Nothing here" }))
            .await;

        let msg = assert_error(&response, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Not found");
    }
}

#[tokio::test]
async fn test_update_without_body_keeps_post() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;
    let post = create(&app, &token, "Draft", "Body").await;

    let (name, value) = auth_header(&token);
    let response = app
        .server
        .put(&format!("/blogs/{}", post["id"].as_str().unwrap()))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, post);
}

#[tokio::test]
async fn test_update_without_body_unknown_post() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;

    let (name, value) = auth_header(&token);
    let response = app
        .server
        .put(&format!("/blogs/{}", Uuid::new_v4()))
        .add_header(name, value)
        .await;

    let msg = assert_error(&response, StatusCode::NOT_FOUND);
    assert_eq!(msg, "Not found");
}

#[tokio::test]
async fn test_update_requires_token() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;
    let post = create(&app, &token, "Draft", "Body").await;

    let response = app
        .server
        .put(&format!("/blogs/{}", post["id"].as_str().unwrap()))
        .json(&json!({ "title": "Hijacked" }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED);
    assert_eq!(list(&app).await[0]["title"], "Draft");
}

#[tokio::test]
async fn test_delete_post() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;
    let keep = create(&app, &token, "Keep", "Body").await;
    let gone = create(&app, &token, "Gone", "Body").await;

    let (name, value) = auth_header(&token);
    let response = app
        .server
        .delete(&format!("/blogs/{}", gone["id"].as_str().unwrap()))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "msg": "Deleted" }));
    assert_eq!(list(&app).await, vec![keep]);
}

#[tokio::test]
async fn test_delete_unknown_post_succeeds() {
    let app = create_test_app().await;
    let token = app.register("alice", "password123").await;

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let (name, value) = auth_header(&token);
        let response = app
            .server
            .delete(&format!("/blogs/{}", id))
            .add_header(name, value)
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["msg"], "Deleted");
    }
}

#[tokio::test]
async fn test_delete_requires_token() {
    let app = create_test_app().await;

    let response = app
        .server
        .delete(&format!("/blogs/{}", Uuid::new_v4()))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED);
}
