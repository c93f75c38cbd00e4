use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::todos;
use crate::web::api::middleware::{CurrentUser, JsonBody};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tickoff_common::models::todo::Todo;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub completed: bool,
}

fn parse_todo_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid todo id: {}", raw)))
}

/// GET /api/todos
#[tracing::instrument(skip(state, user))]
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Todo>>> {
    Ok(Json(todos::list(&state.pool, &user).await?))
}

/// POST /api/todos
#[tracing::instrument(skip(state, user, req))]
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let todo = todos::create(&state.pool, &user, &req.title).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/todos/{id}
#[tracing::instrument(skip(state, user))]
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Todo>> {
    let todo_id = parse_todo_id(&id)?;
    Ok(Json(todos::get(&state.pool, &user, todo_id).await?))
}

/// PATCH /api/todos/{id}
#[tracing::instrument(skip(state, user, req))]
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateTodoRequest>,
) -> AppResult<Json<Todo>> {
    let todo_id = parse_todo_id(&id)?;
    let todo = todos::update_completion(&state.pool, &user, todo_id, req.completed).await?;
    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
#[tracing::instrument(skip(state, user))]
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let todo_id = parse_todo_id(&id)?;
    todos::delete(&state.pool, &user, todo_id).await?;
    Ok(Json(json!({"message": "Todo deleted"})))
}
