/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /v1/auth/signup` - Create an organization and its first user
/// - `POST /v1/auth/login` - Exchange credentials for a bearer token

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Json};
use orgpad_shared::{
    models::user::User,
    services::auth::{self, IssuedToken, Signup},
};
use serde::Deserialize;
use validator::Validate;

/// Signup request
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired login name
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Name for the new organization
    #[validate(length(
        min = 1,
        max = 100,
        message = "Organization name must be 1-100 characters"
    ))]
    pub organization_name: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login name
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Signup endpoint
///
/// Creates a new organization named after the request and a `member`-role
/// user inside it, atomically: if the user cannot be created (say, the
/// username is taken) the organization is not persisted either.
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/signup
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "correct horse battery staple",
///   "organization_name": "Acme"
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed
/// - `409 Conflict`: Username or email already exists
/// - `500 Internal Server Error`: Server error
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<User>> {
    req.validate().map_err(ApiError::from_validation)?;

    let user = auth::signup(
        &state.db,
        Signup {
            username: req.username,
            email: req.email,
            password: req.password,
            organization_name: req.organization_name,
        },
    )
    .await?;

    Ok(Json(user))
}

/// Login endpoint
///
/// Authenticates a user and returns a bearer token valid for the
/// configured TTL. Failures are deliberately indistinguishable: an unknown
/// username and a wrong password produce the same 401 body.
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/login
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "correct horse battery staple"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "access_token": "eyJ...",
///   "token_type": "bearer"
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed
/// - `401 Unauthorized`: Invalid credentials
/// - `500 Internal Server Error`: Server error
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<IssuedToken>> {
    req.validate().map_err(ApiError::from_validation)?;

    let token = auth::login(
        &state.db,
        state.jwt_secret(),
        state.token_ttl(),
        &req.username,
        &req.password,
    )
    .await?;

    Ok(Json(token))
}
