/// Organization model and database operations
///
/// Organizations are the tenant boundary: every user, note, and todo
/// belongs to exactly one organization, and no reference ever crosses
/// that boundary.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE organizations (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(100) NOT NULL,
///     description TEXT,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use orgpad_shared::models::organization::{Organization, CreateOrganization};
/// use orgpad_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let org = Organization::create(&pool, CreateOrganization {
///     name: "Acme Corp".to_string(),
///     description: None,
/// }).await?;
/// println!("Created organization: {}", org.id);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

/// Organization model
///
/// Organizations are never deleted by the service layer; removing one is a
/// database-level operation that cascades to its users, notes, and todos.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Organization {
    /// Unique organization ID (UUID v4)
    pub id: Uuid,

    /// Organization name (not unique; two orgs may share a name)
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// When the organization was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new organization
#[derive(Debug, Clone)]
pub struct CreateOrganization {
    /// Organization name
    pub name: String,

    /// Optional description
    pub description: Option<String>,
}

impl Organization {
    /// Creates a new organization
    ///
    /// Accepts any executor so signup can run this inside the same
    /// transaction as the user insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(
        db: impl PgExecutor<'_>,
        data: CreateOrganization,
    ) -> Result<Self, sqlx::Error> {
        let org = sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .fetch_one(db)
        .await?;

        Ok(org)
    }

    /// Finds an organization by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let org = sqlx::query_as::<_, Organization>(
            r#"
            SELECT id, name, description, created_at
            FROM organizations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(org)
    }

    /// Finds an organization by name (first match, case-sensitive)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Self>, sqlx::Error> {
        let org = sqlx::query_as::<_, Organization>(
            r#"
            SELECT id, name, description, created_at
            FROM organizations
            WHERE name = $1
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(org)
    }
}
