/// Todo service: organization-scoped CRUD behind the authorization policy
///
/// Mirror of the note service; todos add a completion flag but the check
/// sequence (existence, organization isolation, admin role for delete)
/// is identical.

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::auth::authorization::{ensure_admin, ensure_same_organization, CurrentUser};
use crate::error::{Error, Result};
use crate::models::todo::{CreateTodo, Todo, UpdateTodo};
use crate::services::Page;

/// Creates a todo owned by the caller's organization
///
/// New todos start not-completed; `created_by` and `organization_id` come
/// from the caller, never from client input.
///
/// # Errors
///
/// Returns `Error::Database` on store failure
pub async fn create(pool: &PgPool, caller: &CurrentUser, data: CreateTodo) -> Result<Todo> {
    let todo = Todo::create(pool, data, caller.id, caller.organization_id)
        .await?;

    debug!(todo_id = %todo.id, user_id = %caller.id, "todo created");
    Ok(todo)
}

/// Fetches a todo the caller is allowed to see
///
/// # Errors
///
/// - `Error::NotFound` if no todo has this id
/// - `Error::Forbidden` if the todo belongs to another organization
pub async fn get(pool: &PgPool, caller: &CurrentUser, id: Uuid) -> Result<Todo> {
    let todo = Todo::find_by_id(pool, id)
        .await?
        .ok_or(Error::NotFound("todo"))?;

    ensure_same_organization(caller, todo.organization_id)?;

    Ok(todo)
}

/// Lists the caller's organization's todos in insertion order
///
/// # Errors
///
/// Returns `Error::Database` on store failure
pub async fn list(pool: &PgPool, caller: &CurrentUser, page: Page) -> Result<Vec<Todo>> {
    let todos = Todo::list_by_organization(pool, caller.organization_id, page.limit, page.skip)
        .await?;

    Ok(todos)
}

/// Applies a partial update to a todo
///
/// Only supplied fields change; `completed` is a boolean in the public
/// contract and in storage.
///
/// # Errors
///
/// - `Error::NotFound` if no todo has this id (including one deleted
///   between fetch and update)
/// - `Error::Forbidden` if the todo belongs to another organization
pub async fn update(
    pool: &PgPool,
    caller: &CurrentUser,
    id: Uuid,
    data: UpdateTodo,
) -> Result<Todo> {
    let todo = Todo::find_by_id(pool, id)
        .await?
        .ok_or(Error::NotFound("todo"))?;

    ensure_same_organization(caller, todo.organization_id)?;

    let updated = Todo::update(pool, id, data)
        .await?
        .ok_or(Error::NotFound("todo"))?;

    debug!(todo_id = %id, user_id = %caller.id, "todo updated");
    Ok(updated)
}

/// Deletes a todo (admin only)
///
/// Check order: existence, organization, role, then the hard delete.
///
/// # Errors
///
/// - `Error::NotFound` if no todo has this id at any stage
/// - `Error::Forbidden` on organization mismatch or a non-admin caller
pub async fn delete(pool: &PgPool, caller: &CurrentUser, id: Uuid) -> Result<()> {
    let todo = Todo::find_by_id(pool, id)
        .await?
        .ok_or(Error::NotFound("todo"))?;

    ensure_same_organization(caller, todo.organization_id)?;
    ensure_admin(caller)?;

    let deleted = Todo::delete(pool, id).await?;
    if !deleted {
        return Err(Error::NotFound("todo"));
    }

    debug!(todo_id = %id, user_id = %caller.id, "todo deleted");
    Ok(())
}
