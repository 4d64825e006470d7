/// Note model and database operations
///
/// Notes are organization-scoped: `organization_id` is denormalized from
/// the creator at insert time and never changes, so every access check can
/// compare it directly against the caller's organization.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE notes (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(200) NOT NULL,
///     content TEXT NOT NULL,
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

/// Note model
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Note {
    /// Unique note ID (UUID v4)
    pub id: Uuid,

    /// Note title
    pub title: String,

    /// Note body
    pub content: String,

    /// User who created the note
    pub created_by: Uuid,

    /// Organization the note belongs to; always the creator's organization
    pub organization_id: Uuid,

    /// When the note was created
    pub created_at: DateTime<Utc>,

    /// When the note was last mutated (None until the first update)
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a new note
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNote {
    /// Note title
    pub title: String,

    /// Note body
    pub content: String,
}

/// Input for a partial update
///
/// Only non-None fields are written; everything else keeps its prior value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNote {
    /// New title
    pub title: Option<String>,

    /// New content
    pub content: Option<String>,
}

impl UpdateNote {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

impl Note {
    /// Creates a new note
    ///
    /// `created_by` and `organization_id` come from the authenticated
    /// caller, never from client input.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(
        pool: &PgPool,
        data: CreateNote,
        created_by: Uuid,
        organization_id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (title, content, created_by, organization_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, created_by, organization_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(created_by)
        .bind(organization_id)
        .fetch_one(pool)
        .await?;

        Ok(note)
    }

    /// Finds a note by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, created_by, organization_id, created_at, updated_at
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(note)
    }

    /// Lists notes within an organization, in insertion order
    ///
    /// UUID keys carry no insertion order, so creation time is the ordering
    /// key, with the id as a stable tiebreak.
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
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, created_by, organization_id, created_at, updated_at
            FROM notes
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

        Ok(notes)
    }

    /// Applies a partial update and stamps `updated_at`
    ///
    /// Only the fields present in `data` are written. Returns None if the
    /// note no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateNote,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE notes SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.content.is_some() {
            bind_count += 1;
            query.push_str(&format!(", content = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, title, content, created_by, organization_id, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Note>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(content) = data.content {
            q = q.bind(content);
        }

        let note = q.fetch_optional(pool).await?;

        Ok(note)
    }

    /// Deletes a note by ID (hard delete)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
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
    fn test_update_note_default_is_empty() {
        let update = UpdateNote::default();
        assert!(update.is_empty());
        assert!(update.title.is_none());
        assert!(update.content.is_none());
    }

    #[test]
    fn test_update_note_partial() {
        let update = UpdateNote {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert!(update.content.is_none());
    }

    // Integration tests for database operations are in orgpad-api/tests/
}
