/// Common error taxonomy for the service layer
///
/// Every service operation fails with exactly one of these variants, and
/// each variant maps to a single HTTP status category at the API edge:
///
/// - `Validation` → 422 (malformed input, caller's fault)
/// - `Conflict` → 409 (uniqueness violation on signup)
/// - `Auth` → 401 (bad credentials or bad token; message is always generic)
/// - `NotFound` → 404 (resource id unresolvable)
/// - `Forbidden` → 403 (authenticated but not authorized)
/// - `Database` / `Internal` → 500
///
/// Errors are terminal for the request: there is no retry logic and no
/// partial success.

/// Result type used throughout the service layer
pub type Result<T> = std::result::Result<T, Error>;

/// Unified service error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed input, detectable before touching the store
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation (username or email already taken)
    #[error("{0}")]
    Conflict(String),

    /// Bad credentials or invalid/expired token
    ///
    /// The message is deliberately generic: callers must not learn whether
    /// the username, the password, or the token was at fault.
    #[error("could not validate credentials")]
    Auth,

    /// Resource id did not resolve
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Authenticated but not authorized (organization mismatch or role)
    #[error("{0}")]
    Forbidden(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Hashing or token-encoding failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for Error {
    /// Folds store-level unique-constraint violations into `Conflict`.
    ///
    /// Uniqueness of `users.username` and `users.email` is enforced by the
    /// database, not in-process, so concurrent signups surface here rather
    /// than through a pre-check.
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("resource"),
            sqlx::Error::Database(db_err) => {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("username") {
                        return Error::Conflict("username already registered".to_string());
                    }
                    if constraint.contains("email") {
                        return Error::Conflict("email already registered".to_string());
                    }
                }
                Error::Database(sqlx::Error::Database(db_err))
            }
            other => Error::Database(other),
        }
    }
}

impl From<crate::auth::password::PasswordError> for Error {
    fn from(err: crate::auth::password::PasswordError) -> Self {
        Error::Internal(format!("password operation failed: {}", err))
    }
}

impl From<crate::auth::authorization::AuthzError> for Error {
    fn from(err: crate::auth::authorization::AuthzError) -> Self {
        Error::Forbidden(err.to_string())
    }
}
