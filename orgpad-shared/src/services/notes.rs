/// Note service: organization-scoped CRUD behind the authorization policy
///
/// Every operation takes the authenticated caller and runs the checks in a
/// fixed order: existence, then organization isolation, then the admin
/// role for delete. The order is part of the
/// contract: it decides whether a caller sees 404 or 403.

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::auth::authorization::{ensure_admin, ensure_same_organization, CurrentUser};
use crate::error::{Error, Result};
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::services::Page;

/// Creates a note owned by the caller's organization
///
/// `created_by` and `organization_id` are taken from the caller; a
/// client-supplied organization id is not part of the payload at all.
///
/// # Errors
///
/// Returns `Error::Database` on store failure
pub async fn create(pool: &PgPool, caller: &CurrentUser, data: CreateNote) -> Result<Note> {
    let note = Note::create(pool, data, caller.id, caller.organization_id)
        .await?;

    debug!(note_id = %note.id, user_id = %caller.id, "note created");
    Ok(note)
}

/// Fetches a note the caller is allowed to see
///
/// # Errors
///
/// - `Error::NotFound` if no note has this id
/// - `Error::Forbidden` if the note belongs to another organization
pub async fn get(pool: &PgPool, caller: &CurrentUser, id: Uuid) -> Result<Note> {
    let note = Note::find_by_id(pool, id)
        .await?
        .ok_or(Error::NotFound("note"))?;

    ensure_same_organization(caller, note.organization_id)?;

    Ok(note)
}

/// Lists the caller's organization's notes in insertion order
///
/// Only rows of the caller's organization are visible; pagination is
/// clamped by [`Page`].
///
/// # Errors
///
/// Returns `Error::Database` on store failure
pub async fn list(pool: &PgPool, caller: &CurrentUser, page: Page) -> Result<Vec<Note>> {
    let notes = Note::list_by_organization(pool, caller.organization_id, page.limit, page.skip)
        .await?;

    Ok(notes)
}

/// Applies a partial update to a note
///
/// Fetch-then-authorize, then only the supplied fields change; everything
/// else keeps its prior value and `updated_at` is stamped.
///
/// # Errors
///
/// - `Error::NotFound` if no note has this id (including one deleted
///   between fetch and update)
/// - `Error::Forbidden` if the note belongs to another organization
pub async fn update(
    pool: &PgPool,
    caller: &CurrentUser,
    id: Uuid,
    data: UpdateNote,
) -> Result<Note> {
    let note = Note::find_by_id(pool, id)
        .await?
        .ok_or(Error::NotFound("note"))?;

    ensure_same_organization(caller, note.organization_id)?;

    let updated = Note::update(pool, id, data)
        .await?
        .ok_or(Error::NotFound("note"))?;

    debug!(note_id = %id, user_id = %caller.id, "note updated");
    Ok(updated)
}

/// Deletes a note (admin only)
///
/// Check order: existence, organization, role, then the hard delete. A
/// member inside the right organization still gets `Forbidden` here.
///
/// # Errors
///
/// - `Error::NotFound` if no note has this id at any stage
/// - `Error::Forbidden` on organization mismatch or a non-admin caller
pub async fn delete(pool: &PgPool, caller: &CurrentUser, id: Uuid) -> Result<()> {
    let note = Note::find_by_id(pool, id)
        .await?
        .ok_or(Error::NotFound("note"))?;

    ensure_same_organization(caller, note.organization_id)?;
    ensure_admin(caller)?;

    let deleted = Note::delete(pool, id).await?;
    if !deleted {
        return Err(Error::NotFound("note"));
    }

    debug!(note_id = %id, user_id = %caller.id, "note deleted");
    Ok(())
}
