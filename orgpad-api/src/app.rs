/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use orgpad_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = orgpad_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use orgpad_shared::services;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via axum's `State` extractor; the pool
/// is the only shared resource and is itself cheaply cloneable. There is no
/// process-wide mutable singleton; everything a handler needs arrives
/// through this value.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }

    /// Session token lifetime
    pub fn token_ttl(&self) -> chrono::Duration {
        self.config.token_ttl()
    }
}

/// Builds the complete axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                   # Health check (public)
/// └── /v1/                      # API v1 (versioned)
///     ├── /auth/                # Authentication endpoints (public)
///     │   ├── POST /signup
///     │   └── POST /login
///     ├── /notes/               # Notes CRUD (bearer auth)
///     │   ├── GET    /          # List (skip/limit)
///     │   ├── POST   /
///     │   ├── GET    /:id
///     │   ├── PUT    /:id
///     │   └── DELETE /:id       # Admin only
///     └── /todos/               # Todos CRUD (bearer auth, same shape)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Authentication (per-route-group)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/signup", post(routes::auth::signup))
        .route("/login", post(routes::auth::login));

    // Note routes (require bearer authentication)
    let note_routes = Router::new()
        .route("/", get(routes::notes::list_notes))
        .route("/", post(routes::notes::create_note))
        .route("/:id", get(routes::notes::get_note))
        .route("/:id", put(routes::notes::update_note))
        .route("/:id", delete(routes::notes::delete_note))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth_layer,
        ));

    // Todo routes (require bearer authentication)
    let todo_routes = Router::new()
        .route("/", get(routes::todos::list_todos))
        .route("/", post(routes::todos::create_todo))
        .route("/:id", get(routes::todos::get_todo))
        .route("/:id", put(routes::todos::update_todo))
        .route("/:id", delete(routes::todos::delete_todo))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth_layer,
        ));

    // Build complete v1 API
    let v1_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/notes", note_routes)
        .nest("/todos", todo_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Bearer authentication middleware layer
///
/// Extracts the bearer token from the Authorization header and runs the
/// full `authenticate` step (token validation plus one store read), so
/// handlers receive a `CurrentUser` whose role and organization are
/// current as of this request. Any failure is the same generic 401.
async fn bearer_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, crate::error::ApiError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            crate::error::ApiError::Unauthorized("could not validate credentials".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        crate::error::ApiError::Unauthorized("could not validate credentials".to_string())
    })?;

    let caller = services::auth::authenticate(&state.db, state.jwt_secret(), token).await?;

    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}
