/// JWT token generation and validation
///
/// Session tokens are signed with HS256 (HMAC-SHA256). Validation checks
/// the signature, expiry, not-before time, and issuer. Failure modes are
/// distinguished internally (`Expired` / `InvalidSignature` / `Malformed`)
/// so the service layer can log precisely while still returning one generic
/// authentication error to callers.
///
/// There is no refresh or revocation mechanism: a token is valid until its
/// expiry and logout is client-side discard.
///
/// # Example
///
/// ```
/// use orgpad_shared::auth::jwt::{create_token, validate_token, Claims};
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let user_id = Uuid::new_v4();
/// let org_id = Uuid::new_v4();
///
/// let claims = Claims::new(user_id, org_id, Duration::hours(24));
/// let token = create_token(&claims, "your-secret-key-at-least-32-bytes")?;
///
/// let validated = validate_token(&token, "your-secret-key-at-least-32-bytes")?;
/// assert_eq!(validated.sub, user_id);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issuer stamped into and required of every token
const ISSUER: &str = "orgpad";

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to encode a token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Signature or issuer check failed
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token is not structurally a JWT
    #[error("Malformed token: {0}")]
    Malformed(String),
}

/// JWT claims
///
/// Standard claims (`sub`, `iss`, `iat`, `exp`, `nbf`) plus the caller's
/// organization. The claims identify the user; role and organization
/// authority always come from a fresh store read during authentication,
/// so a role change takes effect on the next request, not the next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user ID
    pub sub: Uuid,

    /// Issuer - always "orgpad"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Organization ID at issue time (custom claim)
    pub org_id: Uuid,
}

impl Claims {
    /// Creates claims expiring `ttl` from now
    pub fn new(user_id: Uuid, org_id: Uuid, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            nbf: now.timestamp(),
            org_id,
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a compact JWT string
///
/// The secret should be at least 32 bytes of random data, stored outside
/// the repository and rotated periodically.
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a token and extracts its claims
///
/// Verifies signature, expiry, not-before, and issuer.
///
/// # Errors
///
/// - `JwtError::Expired` when past `exp`
/// - `JwtError::InvalidSignature` on a bad signature or wrong issuer
/// - `JwtError::Malformed` when the string is not a JWT at all
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.validate_nbf = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::Expired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidIssuer => JwtError::InvalidSignature,
            _ => JwtError::Malformed(e.to_string()),
        }
    })?;

    Ok(token_data.claims)
}
