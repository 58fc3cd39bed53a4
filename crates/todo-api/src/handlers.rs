use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use domain::{CreateTodoRequest, Todo, TodoId, UpdateTodoRequest};
use serde::Serialize;

use crate::error::ApiError;
use crate::extract::{AppJson, AppPath};
use crate::AppState;

#[derive(Debug, Serialize)]
struct HealthBody {
    /// サービスの簡易ステータス
    status: &'static str,
}

/// ヘルスチェック（DB には触れない）
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let new_todo = req.validate()?;
    let todo = state.repo.insert(new_todo).await?;

    tracing::info!(todo_id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos/:id
pub async fn get_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.repo.get(id).await?;
    Ok(Json(todo))
}

/// PUT /todos/:id
/// 完全置換。ボディ検証は存在確認より先に行う。
pub async fn update_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<TodoId>,
    AppJson(req): AppJson<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let replacement = req.validate()?;
    let todo = state.repo.replace(id, replacement).await?;

    tracing::info!(todo_id = %todo.id, completed = todo.completed, "todo updated");
    Ok(Json(todo))
}

/// DELETE /todos/:id
pub async fn delete_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<TodoId>,
) -> Result<StatusCode, ApiError> {
    state.repo.delete(id).await?;

    tracing::info!(todo_id = %id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
