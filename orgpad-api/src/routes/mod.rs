/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (signup, login)
/// - `notes`: Note CRUD endpoints
/// - `todos`: Todo CRUD endpoints

pub mod auth;
pub mod health;
pub mod notes;
pub mod todos;
