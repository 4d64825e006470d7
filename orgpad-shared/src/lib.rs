//! # OrgPad Shared Library
//!
//! This crate contains the data models, authentication primitives, and
//! business logic shared by the OrgPad API server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `auth`: Password hashing, JWT tokens, and the authorization policy
//! - `services`: The auth/notes/todos service layer (identity + policy + CRUD)
//! - `db`: Connection pool and migration runner
//! - `error`: Common error taxonomy

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};

/// Current version of the OrgPad shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
