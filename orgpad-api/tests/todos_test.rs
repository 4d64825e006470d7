/// Integration tests for the todo endpoints
///
/// The todo surface mirrors notes; these tests focus on what todos add
/// (the `completed` boolean and the optional description) plus the same
/// isolation and role invariants. Requires DATABASE_URL; tests skip
/// themselves otherwise.

mod common;

use axum::http::StatusCode;
use common::{unique, uuid_field, TestContext};
use serde_json::json;

/// New todos start not-completed; optional description round-trips
#[tokio::test]
async fn test_create_todo_defaults() {
    let Some(ctx) = TestContext::try_new().await else {
        return;
    };

    let (user, token) = ctx.signup_and_login("alice", &unique("Acme")).await;

    let (status, todo) = ctx
        .request(
            "POST",
            "/v1/todos",
            Some(&token),
            Some(json!({ "title": "Ship release" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "create failed: {}", todo);
    assert_eq!(todo["title"], "Ship release");
    assert_eq!(todo["completed"], false);
    assert!(todo["description"].is_null());
    assert_eq!(todo["created_by"], user["id"]);
    assert_eq!(todo["organization_id"], user["organization_id"]);
    assert!(todo["updated_at"].is_null());

    let (status, with_description) = ctx
        .request(
            "POST",
            "/v1/todos",
            Some(&token),
            Some(json!({ "title": "Write docs", "description": "API reference first" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(with_description["description"], "API reference first");

    ctx.cleanup().await;
}

/// Flipping `completed` leaves the other fields untouched
#[tokio::test]
async fn test_update_completed_only() {
    let Some(ctx) = TestContext::try_new().await else {
        return;
    };

    let (_, token) = ctx.signup_and_login("bob", &unique("Acme")).await;

    let (_, created) = ctx
        .request(
            "POST",
            "/v1/todos",
            Some(&token),
            Some(json!({ "title": "Review PR", "description": "the big one" })),
        )
        .await;
    let path = format!("/v1/todos/{}", uuid_field(&created, "id"));

    let (status, updated) = ctx
        .request("PUT", &path, Some(&token), Some(json!({ "completed": true })))
        .await;

    assert_eq!(status, StatusCode::OK, "update failed: {}", updated);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], created["title"]);
    assert_eq!(updated["description"], created["description"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert!(updated["updated_at"].is_string());

    // And back again
    let (_, reverted) = ctx
        .request("PUT", &path, Some(&token), Some(json!({ "completed": false })))
        .await;
    assert_eq!(reverted["completed"], false);

    ctx.cleanup().await;
}

/// The Acme/Globex scenario: each organization lists only its own todos
#[tokio::test]
async fn test_list_isolation_between_organizations() {
    let Some(ctx) = TestContext::try_new().await else {
        return;
    };

    let (_, acme_token) = ctx.signup_and_login("alice", &unique("Acme")).await;

    let (status, _) = ctx
        .request(
            "POST",
            "/v1/todos",
            Some(&acme_token),
            Some(json!({ "title": "acme-todo" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // A second organization appears and creates its own todos
    let (_, globex_token) = ctx.signup_and_login("gus", &unique("Globex")).await;
    let (status, _) = ctx
        .request(
            "POST",
            "/v1/todos",
            Some(&globex_token),
            Some(json!({ "title": "globex-todo" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Alice's list still contains only Acme's todos
    let (status, body) = ctx.request("GET", "/v1/todos", Some(&acme_token), None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["acme-todo"]);

    ctx.cleanup().await;
}

/// Cross-organization todo access is 403; same-org member delete is 403;
/// admin delete succeeds
#[tokio::test]
async fn test_todo_authorization_gates() {
    let Some(ctx) = TestContext::try_new().await else {
        return;
    };

    let (acme_user, acme_token) = ctx.signup_and_login("carol", &unique("Acme")).await;
    let (_, globex_token) = ctx.signup_and_login("hank", &unique("Globex")).await;

    let (_, todo) = ctx
        .request(
            "POST",
            "/v1/todos",
            Some(&acme_token),
            Some(json!({ "title": "guarded" })),
        )
        .await;
    let path = format!("/v1/todos/{}", uuid_field(&todo, "id"));

    // Other organization: denied on read and mutation
    let (status, _) = ctx.request("GET", &path, Some(&globex_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = ctx
        .request(
            "PUT",
            &path,
            Some(&globex_token),
            Some(json!({ "completed": true })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Same organization, member role: delete denied
    let (status, _) = ctx.request("DELETE", &path, Some(&acme_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Admin role: delete allowed
    ctx.promote_to_admin(uuid_field(&acme_user, "id")).await;
    let (status, _) = ctx.request("DELETE", &path, Some(&acme_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = ctx.request("GET", &path, Some(&acme_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    ctx.cleanup().await;
}
