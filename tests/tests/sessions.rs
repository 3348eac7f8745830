//! Tests for the session lifecycle endpoints.
//!
//! All state flows through MockCache behind the SessionCache trait, so
//! these cover every production code path except the Redis transport.

use axum::http::StatusCode;
use axum_test::TestServer;
use integration_tests::{fixtures, setup::TestContext};
use redis_cache::SessionCache;
use serde_json::json;

#[tokio::test]
async fn test_create_session_returns_fresh_record() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body = fixtures::create_session(&server, 42).await;

    assert!(
        !body["id"].as_str().unwrap_or("").is_empty(),
        "id must be a non-empty string"
    );
    assert_eq!(body["user_id"], 42);
    assert_eq!(body["visit_count"], 1);
    assert_eq!(body["is_active"], true);
    assert_eq!(body["session_data"], json!({}));
    assert!(body.get("expires_at").is_some());
    assert!(body.get("created_at").is_some());
    assert!(body.get("updated_at").is_some());
}

#[tokio::test]
async fn test_get_after_create_returns_same_record() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let created = fixtures::create_session(&server, 7).await;
    let id = created["id"].as_str().unwrap();

    let response = server.get(&format!("/sessions/{id}")).await;
    response.assert_status_ok();
    let fetched: serde_json::Value = response.json();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_merges_data_and_increments_visit_count() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let id = fixtures::create_session_id(&server, 1).await;

    let response = server
        .put(&format!("/sessions/{id}"))
        .json(&fixtures::data_update("theme", json!("dark")))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["visit_count"], 2);
    assert_eq!(body["session_data"]["theme"], "dark");

    // A second update overwrites the key but preserves others
    let response = server
        .put(&format!("/sessions/{id}"))
        .json(&json!({ "session_data": { "theme": "light", "lang": "en" } }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["visit_count"], 3);
    assert_eq!(body["session_data"]["theme"], "light");
    assert_eq!(body["session_data"]["lang"], "en");
}

#[tokio::test]
async fn test_update_visit_count_is_monotonic_regardless_of_fields() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let id = fixtures::create_session_id(&server, 1).await;

    for expected in 2..=5u64 {
        let response = server
            .put(&format!("/sessions/{id}"))
            .json(&json!({}))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["visit_count"], expected);
    }
}

#[tokio::test]
async fn test_update_sets_active_flag() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let id = fixtures::create_session_id(&server, 1).await;

    let response = server
        .put(&format!("/sessions/{id}"))
        .json(&fixtures::active_update(false))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["is_active"], false);

    // Deactivation does not expire the session
    let response = server.get(&format!("/sessions/{id}")).await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let id = fixtures::create_session_id(&server, 1).await;

    let response = server.delete(&format!("/sessions/{id}")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Session deleted successfully");

    let response = server.get(&format!("/sessions/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "SESS_001");

    // Second delete also reports not found
    let response = server.delete(&format!("/sessions/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_operations_on_unknown_id_return_404() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/sessions/never-created").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .put("/sessions/never-created")
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.delete("/sessions/never-created").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.post("/sessions/never-created/extend").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expired_session_is_indistinguishable_from_never_created() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let id = fixtures::create_session_id(&server, 1).await;
    ctx.expire_session(&id);

    let response = server.get(&format!("/sessions/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "SESS_001");
}

#[tokio::test]
async fn test_extend_rearms_session_ttl() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let id = fixtures::create_session_id(&server, 1).await;

    let response = server
        .post(&format!("/sessions/{id}/extend?minutes=120"))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Session extended");

    let remaining = ctx
        .mock_cache
        .ttl(&session_core::session_key(&id))
        .await
        .unwrap()
        .expect("session key should still exist");
    assert!(
        remaining > 3600 && remaining <= 7200,
        "TTL should be re-armed to roughly 120 minutes, got {remaining}s"
    );
}

#[tokio::test]
async fn test_extend_with_zero_minutes_is_rejected() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let id = fixtures::create_session_id(&server, 1).await;

    let response = server
        .post(&format!("/sessions/{id}/extend?minutes=0"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALID_001");
}
