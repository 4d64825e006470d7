/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup (pool + migrations)
/// - Router construction with a fixed test configuration
/// - Request helpers driving the app through tower
/// - Signup/login helpers and cascade cleanup of test organizations
///
/// Tests call `TestContext::try_new()`, which returns `None` when
/// `DATABASE_URL` is not set so the suite degrades to a no-op instead of
/// failing on machines without a database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use orgpad_api::app::{build_router, AppState};
use orgpad_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use serde_json::{json, Value};
use sqlx::PgPool;
use std::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

/// Fixed signing secret for tests (at least 32 bytes)
pub const TEST_JWT_SECRET: &str = "orgpad-test-secret-key-0123456789abcdef";

/// Password satisfying the signup validator
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Test context containing the app, the pool, and cleanup bookkeeping
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    created_orgs: Mutex<Vec<Uuid>>,
}

impl TestContext {
    /// Creates a test context, or None when DATABASE_URL is not set
    pub async fn try_new() -> Option<Self> {
        dotenvy::dotenv().ok();
        let url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("skipping: DATABASE_URL not set");
                return None;
            }
        };

        let db = PgPool::connect(&url)
            .await
            .expect("connect to test database");

        // Path relative to the orgpad-api crate root
        sqlx::migrate!("../migrations")
            .run(&db)
            .await
            .expect("run migrations");

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: TEST_JWT_SECRET.to_string(),
                token_ttl_hours: 1,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Some(Self {
            db,
            app,
            created_orgs: Mutex::new(Vec::new()),
        })
    }

    /// Sends a request through the router and returns (status, JSON body)
    ///
    /// An empty response body comes back as `Value::Null`.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    /// Signs up a user, tracking the created organization for cleanup
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        organization_name: &str,
    ) -> (StatusCode, Value) {
        let (status, body) = self
            .request(
                "POST",
                "/v1/auth/signup",
                None,
                Some(json!({
                    "username": username,
                    "email": email,
                    "password": TEST_PASSWORD,
                    "organization_name": organization_name,
                })),
            )
            .await;

        if status == StatusCode::OK {
            if let Some(org_id) = body["organization_id"]
                .as_str()
                .and_then(|s| Uuid::parse_str(s).ok())
            {
                self.created_orgs.lock().unwrap().push(org_id);
            }
        }

        (status, body)
    }

    /// Logs in and returns the bearer token
    pub async fn login(&self, username: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/v1/auth/login",
                None,
                Some(json!({
                    "username": username,
                    "password": TEST_PASSWORD,
                })),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["access_token"].as_str().unwrap().to_string()
    }

    /// Convenience: signup + login, returning (user body, token)
    pub async fn signup_and_login(&self, prefix: &str, organization_name: &str) -> (Value, String) {
        let username = unique(prefix);
        let email = format!("{}@example.com", username);

        let (status, user) = self.signup(&username, &email, organization_name).await;
        assert_eq!(status, StatusCode::OK, "signup failed: {}", user);

        let token = self.login(&username).await;
        (user, token)
    }

    /// Promotes a user to admin directly in the store
    ///
    /// There is no role-change operation in the public API, so tests reach
    /// into the database the way an operator would.
    pub async fn promote_to_admin(&self, user_id: Uuid) {
        sqlx::query("UPDATE users SET role = 'admin' WHERE id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await
            .expect("promote user to admin");
    }

    /// Deletes every organization this context created (cascades to
    /// users, notes, and todos)
    pub async fn cleanup(&self) {
        let orgs: Vec<Uuid> = self.created_orgs.lock().unwrap().drain(..).collect();
        for org in orgs {
            sqlx::query("DELETE FROM organizations WHERE id = $1")
                .bind(org)
                .execute(&self.db)
                .await
                .ok();
        }
    }
}

/// Produces a collision-free name for usernames/org names
pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Extracts a Uuid field from a JSON body
pub fn uuid_field(value: &Value, field: &str) -> Uuid {
    value[field]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(|| panic!("missing uuid field '{}' in {}", field, value))
}
