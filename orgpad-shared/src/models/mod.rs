/// Database models for OrgPad
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `organization`: Organizations, the isolation boundary for all data
/// - `user`: User accounts with a role and a home organization
/// - `note`: Organization-scoped notes
/// - `todo`: Organization-scoped todo items
///
/// # Example
///
/// ```no_run
/// use orgpad_shared::models::user::User;
/// use orgpad_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example(user_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// if let Some(user) = User::find_by_id(&pool, user_id).await? {
///     println!("{} belongs to {}", user.username, user.organization_id);
/// }
/// # Ok(())
/// # }
/// ```

pub mod note;
pub mod organization;
pub mod todo;
pub mod user;
