/// Authentication service: signup, login, and per-request authentication
///
/// Signup creates an organization and its first user as one logical
/// transaction; login exchanges credentials for a signed bearer token;
/// `authenticate` turns a token back into a fresh [`CurrentUser`] on every
/// protected request.
///
/// Every credential failure (unknown username, wrong password, expired or
/// forged token, token for a deleted user) collapses into the single
/// generic [`Error::Auth`], so callers cannot probe which part was wrong.

use chrono::Duration;
use serde::Serialize;
use sqlx::PgPool;
use tracing::debug;

use crate::auth::authorization::CurrentUser;
use crate::auth::jwt::{self, Claims};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{Error, Result};
use crate::models::organization::{CreateOrganization, Organization};
use crate::models::user::{CreateUser, User, UserRole};

/// Signup payload
#[derive(Debug, Clone)]
pub struct Signup {
    /// Desired login name (unique)
    pub username: String,

    /// Email address (unique)
    pub email: String,

    /// Plaintext password; hashed before it touches the store
    pub password: String,

    /// Name for the organization created alongside the account
    pub organization_name: String,
}

/// A freshly issued session token
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// Signed JWT
    pub access_token: String,

    /// Token-type marker, always "bearer"
    pub token_type: &'static str,
}

/// Creates a new organization and its first user in one transaction
///
/// The user gets the default `Member` role. If the user insert fails,
/// most commonly a username/email uniqueness violation, the transaction
/// rolls back and the organization does not persist either.
///
/// # Errors
///
/// - `Error::Conflict` if the username or email is already registered
/// - `Error::Internal` if password hashing fails
/// - `Error::Database` on other store failures
pub async fn signup(pool: &PgPool, data: Signup) -> Result<User> {
    let password_hash = hash_password(&data.password)?;

    let mut tx = pool.begin().await?;

    let org = Organization::create(
        &mut *tx,
        CreateOrganization {
            name: data.organization_name,
            description: None,
        },
    )
    .await?;

    let user = User::create(
        &mut *tx,
        CreateUser {
            username: data.username,
            email: data.email,
            password_hash,
            role: UserRole::Member,
            organization_id: org.id,
        },
    )
    .await?;

    tx.commit().await?;

    debug!(user_id = %user.id, organization_id = %org.id, "signup completed");
    Ok(user)
}

/// Verifies credentials and issues a bearer token
///
/// The token encodes the user id and organization with an expiry of `ttl`;
/// nothing about the session is stored server-side.
///
/// # Errors
///
/// Returns `Error::Auth` for an unknown username or wrong password, with no
/// indication of which
pub async fn login(
    pool: &PgPool,
    secret: &str,
    ttl: Duration,
    username: &str,
    password: &str,
) -> Result<IssuedToken> {
    let user = User::find_by_username(pool, username)
        .await?
        .ok_or(Error::Auth)?;

    let valid = verify_password(password, &user.password_hash)?;
    if !valid {
        return Err(Error::Auth);
    }

    let claims = Claims::new(user.id, user.organization_id, ttl);
    let access_token = jwt::create_token(&claims, secret)
        .map_err(|e| Error::Internal(format!("token issue failed: {}", e)))?;

    debug!(user_id = %user.id, "login succeeded");
    Ok(IssuedToken {
        access_token,
        token_type: "bearer",
    })
}

/// Resolves a bearer token to the caller's identity context
///
/// Signature, expiry, not-before, and issuer are checked without touching
/// the store; resolving the subject to a live user takes one store read,
/// which is what makes role and organization fresh on every request.
///
/// # Errors
///
/// Returns `Error::Auth` if the token is malformed, expired, forged, or
/// resolves to a user that no longer exists
pub async fn authenticate(pool: &PgPool, secret: &str, token: &str) -> Result<CurrentUser> {
    let claims = jwt::validate_token(token, secret).map_err(|e| {
        debug!("token rejected: {}", e);
        Error::Auth
    })?;

    let user = User::find_by_id(pool, claims.sub)
        .await?
        .ok_or(Error::Auth)?;

    Ok(CurrentUser::from(&user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_marker() {
        let token = IssuedToken {
            access_token: "abc".to_string(),
            token_type: "bearer",
        };

        assert_eq!(token.token_type, "bearer");

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["access_token"], "abc");
    }

    // signup/login/authenticate need a live store; they are exercised in
    // orgpad-api/tests/auth_test.rs
}
