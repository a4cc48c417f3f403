use crate::todo::{Todo, TodoService, TodoServiceError, TodoState};
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// JSON representation of a Todo for API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Unique identifier assigned by the store
    id: i32,
    /// Title of the todo item
    title: String,
    /// Optional free-form description
    description: Option<String>,
    /// Creation timestamp assigned by the store (UTC)
    created_date: chrono::DateTime<chrono::FixedOffset>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_string(),
            description: todo.description().map(str::to_string),
            created_date: todo.created_date(),
        }
    }
}

/// Request body for POST /Todo.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    /// Title of the new todo item. A missing title deserializes to an
    /// empty string and is rejected by validation.
    #[serde(default)]
    title: String,
    /// Optional description of the new todo item
    #[serde(default)]
    description: Option<String>,
}

/// Request body for PUT /Todo.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    /// ID of the todo item to update
    id: i32,
    /// New title for the todo item
    #[serde(default)]
    title: String,
    /// New description for the todo item
    #[serde(default)]
    description: Option<String>,
}

/// Body of a 400 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct BadRequestResponse {
    /// Human-readable reason the request was rejected
    message: String,
}

impl BadRequestResponse {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

/// Boundary error translating service outcomes into protocol responses.
///
/// The 400 body is a JSON object while the 404 body is the bare message
/// string. The asymmetry is kept for wire compatibility with the API this
/// one replaces.
#[derive(Debug)]
pub struct ApiError(TodoServiceError);

impl From<TodoServiceError> for ApiError {
    fn from(err: TodoServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            err @ TodoServiceError::MissingTitle => (
                StatusCode::BAD_REQUEST,
                Json(BadRequestResponse::new(err.to_string())),
            )
                .into_response(),
            err @ TodoServiceError::TodoNotFound(_) => {
                (StatusCode::NOT_FOUND, err.to_string()).into_response()
            }
            err => {
                tracing::error!("An unhandled error occurred while processing the request: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Handler for GET /Todo - returns all todo items.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/Todo",
    responses(
        (status = 200, description = "Successfully retrieved todo items", body = Vec<TodoResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todo"
)]
pub async fn get_todos_handler(
    State(state): State<Arc<TodoState>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let service = TodoService::new(&state.db);
    let todos = service.get_all_todos().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Handler for POST /Todo - creates a new todo item.
///
/// Responds 200 rather than 201 on success, matching the API this one
/// replaces.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    post,
    path = "/Todo",
    request_body = CreateTodoRequest,
    responses(
        (status = 200, description = "Successfully created the todo item", body = TodoResponse),
        (status = 400, description = "The todo item has no title", body = BadRequestResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todo"
)]
pub async fn create_todo_handler(
    State(state): State<Arc<TodoState>>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let service = TodoService::new(&state.db);
    let todo = service
        .create_todo(request.title, request.description)
        .await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// Handler for PUT /Todo - updates an existing todo item.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    put,
    path = "/Todo",
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Successfully updated the todo item", body = TodoResponse),
        (status = 400, description = "The todo item has no title", body = BadRequestResponse),
        (status = 404, description = "No todo item with the given ID", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todo"
)]
pub async fn update_todo_handler(
    State(state): State<Arc<TodoState>>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let service = TodoService::new(&state.db);
    let todo = service
        .update_todo(request.id, request.title, request.description)
        .await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// Handler for DELETE /Todo/{todo_item_id} - deletes a todo item.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    delete,
    path = "/Todo/{todo_item_id}",
    params(
        ("todo_item_id" = i32, Path, description = "ID of the todo item to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the todo item"),
        (status = 404, description = "No todo item with the given ID", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todo"
)]
pub async fn delete_todo_handler(
    State(state): State<Arc<TodoState>>,
    Path(todo_item_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let service = TodoService::new(&state.db);
    service.delete_todo(todo_item_id).await?;
    Ok(StatusCode::OK)
}

/// Creates and returns the todo API router.
pub fn create_api_router(state: Arc<TodoState>) -> Router {
    Router::new()
        .route(
            "/Todo",
            get(get_todos_handler)
                .post(create_todo_handler)
                .put(update_todo_handler),
        )
        .route("/Todo/{todo_item_id}", delete(delete_todo_handler))
        .with_state(state)
}
