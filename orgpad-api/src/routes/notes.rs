/// Note endpoints
///
/// All routes here sit behind the bearer-auth layer, so every handler
/// receives the authenticated `CurrentUser` from request extensions and
/// delegates to the note service, which owns the authorization checks.
///
/// # Endpoints
///
/// - `GET    /v1/notes` - List notes in the caller's organization
/// - `POST   /v1/notes` - Create a note
/// - `GET    /v1/notes/:id` - Fetch a note
/// - `PUT    /v1/notes/:id` - Partially update a note
/// - `DELETE /v1/notes/:id` - Delete a note (admin only)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use orgpad_shared::{
    auth::authorization::CurrentUser,
    models::note::{CreateNote, Note, UpdateNote},
    services::{notes, Page},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create note request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNoteRequest {
    /// Note title
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// Note body
    pub content: String,
}

/// Update note request (partial)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateNoteRequest {
    /// New title
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    /// New content
    pub content: Option<String>,
}

/// List query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Rows to skip
    pub skip: Option<i64>,

    /// Maximum rows to return (clamped server-side)
    pub limit: Option<i64>,
}

/// List handler
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Note>>> {
    let page = Page::new(params.skip, params.limit);
    let notes = notes::list(&state.db, &caller, page).await?;

    Ok(Json(notes))
}

/// Create handler
pub async fn create_note(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Json(req): Json<CreateNoteRequest>,
) -> ApiResult<Json<Note>> {
    req.validate().map_err(ApiError::from_validation)?;

    let note = notes::create(
        &state.db,
        &caller,
        CreateNote {
            title: req.title,
            content: req.content,
        },
    )
    .await?;

    Ok(Json(note))
}

/// Get handler
pub async fn get_note(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Note>> {
    let note = notes::get(&state.db, &caller, id).await?;

    Ok(Json(note))
}

/// Update handler (partial update; absent fields keep their value)
pub async fn update_note(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    req.validate().map_err(ApiError::from_validation)?;

    let note = notes::update(
        &state.db,
        &caller,
        id,
        UpdateNote {
            title: req.title,
            content: req.content,
        },
    )
    .await?;

    Ok(Json(note))
}

/// Delete handler (admin only)
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    notes::delete(&state.db, &caller, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
