//! HTTP client for the todo backend API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base URL of the backend server, fixed at build time.
fn backend_base_url() -> &'static str {
    option_env!("TODO_BACKEND_URL").unwrap_or("http://localhost:8080")
}

/// A todo item as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_date: DateTime<Utc>,
}

impl TodoItem {
    /// Whether the item has a non-empty description worth expanding.
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BadRequestResponse {
    message: String,
}

/// A failed API call, reduced to the message shown in the error banner.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn transport(err: reqwest::Error) -> Self {
        tracing::error!("Request to the backend failed: {err}");
        ApiError {
            message: "Did not receive a response from the server.".to_string(),
        }
    }
}

pub async fn get_all_todo_items() -> Result<Vec<TodoItem>, ApiError> {
    let response = reqwest::get(format!("{}/Todo", backend_base_url()))
        .await
        .map_err(ApiError::transport)?;
    parse_response(response).await
}

pub async fn add_todo_item(request: &CreateTodoRequest) -> Result<TodoItem, ApiError> {
    let response = reqwest::Client::new()
        .post(format!("{}/Todo", backend_base_url()))
        .json(request)
        .send()
        .await
        .map_err(ApiError::transport)?;
    parse_response(response).await
}

pub async fn update_todo_item(request: &UpdateTodoRequest) -> Result<TodoItem, ApiError> {
    let response = reqwest::Client::new()
        .put(format!("{}/Todo", backend_base_url()))
        .json(request)
        .send()
        .await
        .map_err(ApiError::transport)?;
    parse_response(response).await
}

pub async fn delete_todo_item(todo_item_id: i32) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .delete(format!("{}/Todo/{}", backend_base_url(), todo_item_id))
        .send()
        .await
        .map_err(ApiError::transport)?;
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// Sorts todo items ascending by creation date, oldest first.
pub fn sort_by_created_date(items: &mut [TodoItem]) {
    items.sort_by_key(|item| item.created_date);
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    response.json::<T>().await.map_err(|err| {
        tracing::error!("Failed to decode the backend response: {err}");
        ApiError {
            message: "The server returned an unexpected response.".to_string(),
        }
    })
}

async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ApiError {
        message: extract_error_message(status, &body),
    }
}

/// Maps a failed response to a user-facing message. The backend sends 400
/// bodies as a `{message}` object and 404 bodies as a bare string; anything
/// else falls back to a generic message by status class.
fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(bad_request) = serde_json::from_str::<BadRequestResponse>(body) {
        return bad_request.message;
    }

    if (400..500).contains(&status) {
        if !body.is_empty() {
            return body.to_string();
        }
        if status == 404 {
            return "The specified service was not found.".to_string();
        }
        return "There was an error with the request.".to_string();
    }

    "The server ran into an error.".to_string()
}
