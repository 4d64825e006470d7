/// Todo model and database operations
///
/// Todos share the note layout plus a completion flag. `completed` is a
/// native boolean end to end; there is no integer translation anywhere.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(200) NOT NULL,
///     description TEXT,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     created_by UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Todo model
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique todo ID (UUID v4)
    pub id: Uuid,

    /// Todo title
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Whether the todo is done (defaults to false)
    pub completed: bool,

    /// User who created the todo
    pub created_by: Uuid,

    /// Organization the todo belongs to; always the creator's organization
    pub organization_id: Uuid,

    /// When the todo was created
    pub created_at: DateTime<Utc>,

    /// When the todo was last mutated (None until the first update)
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a new todo
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    /// Todo title
    pub title: String,

    /// Optional description
    pub description: Option<String>,
}

/// Input for a partial update
///
/// Only non-None fields are written; everything else keeps its prior value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New completion state
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

impl Todo {
    /// Creates a new todo in the not-completed state
    ///
    /// `created_by` and `organization_id` come from the authenticated
    /// caller, never from client input.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(
        pool: &PgPool,
        data: CreateTodo,
        created_by: Uuid,
        organization_id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, description, created_by, organization_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, completed, created_by, organization_id,
                      created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(created_by)
        .bind(organization_id)
        .fetch_one(pool)
        .await?;

        Ok(todo)
    }

    /// Finds a todo by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, completed, created_by, organization_id,
                   created_at, updated_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }

    /// Lists todos within an organization, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_by_organization(
        pool: &PgPool,
        organization_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, completed, created_by, organization_id,
                   created_at, updated_at
            FROM todos
            WHERE organization_id = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(organization_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(todos)
    }

    /// Applies a partial update and stamps `updated_at`
    ///
    /// Only the fields present in `data` are written. Returns None if the
    /// todo no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateTodo,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE todos SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.completed.is_some() {
            bind_count += 1;
            query.push_str(&format!(", completed = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, title, description, completed, created_by, organization_id, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Todo>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(completed) = data.completed {
            q = q.bind(completed);
        }

        let todo = q.fetch_optional(pool).await?;

        Ok(todo)
    }

    /// Deletes a todo by ID (hard delete)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_todo_default_is_empty() {
        let update = UpdateTodo::default();
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_todo_completed_only() {
        let update = UpdateTodo {
            completed: Some(true),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert!(update.title.is_none());
        assert!(update.description.is_none());
    }

    // Integration tests for database operations are in orgpad-api/tests/
}
