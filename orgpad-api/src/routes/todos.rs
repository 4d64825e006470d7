/// Todo endpoints
///
/// Same shape as the note endpoints; todos additionally expose the
/// `completed` boolean, which is only ever set through partial updates
/// (a todo always starts not-completed).
///
/// # Endpoints
///
/// - `GET    /v1/todos` - List todos in the caller's organization
/// - `POST   /v1/todos` - Create a todo
/// - `GET    /v1/todos/:id` - Fetch a todo
/// - `PUT    /v1/todos/:id` - Partially update a todo
/// - `DELETE /v1/todos/:id` - Delete a todo (admin only)

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
    models::todo::{CreateTodo, Todo, UpdateTodo},
    services::{todos, Page},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::notes::ListParams;

/// Create todo request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    /// Todo title
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// Optional description
    pub description: Option<String>,
}

/// Update todo request (partial)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    /// New title
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New completion state
    pub completed: Option<bool>,
}

/// List handler
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Todo>>> {
    let page = Page::new(params.skip, params.limit);
    let todos = todos::list(&state.db, &caller, page).await?;

    Ok(Json(todos))
}

/// Create handler
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Json(req): Json<CreateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    req.validate().map_err(ApiError::from_validation)?;

    let todo = todos::create(
        &state.db,
        &caller,
        CreateTodo {
            title: req.title,
            description: req.description,
        },
    )
    .await?;

    Ok(Json(todo))
}

/// Get handler
pub async fn get_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Todo>> {
    let todo = todos::get(&state.db, &caller, id).await?;

    Ok(Json(todo))
}

/// Update handler (partial update; absent fields keep their value)
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    req.validate().map_err(ApiError::from_validation)?;

    let todo = todos::update(
        &state.db,
        &caller,
        id,
        UpdateTodo {
            title: req.title,
            description: req.description,
            completed: req.completed,
        },
    )
    .await?;

    Ok(Json(todo))
}

/// Delete handler (admin only)
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    todos::delete(&state.db, &caller, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
