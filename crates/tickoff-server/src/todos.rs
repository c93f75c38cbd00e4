//! Todo operations. Every query filters by the caller's id, so a todo owned
//! by someone else looks exactly like one that does not exist.

use crate::error::{AppError, AppResult};
use sqlx::PgPool;
use tickoff_common::models::todo::Todo;
use tickoff_common::validation;
use tickoff_db::{TodoRepo, UserRow};

pub async fn list(pool: &PgPool, user: &UserRow) -> AppResult<Vec<Todo>> {
    let rows = TodoRepo::list_by_user(pool, user.id).await?;
    Ok(rows.into_iter().map(Todo::from).collect())
}

pub async fn create(pool: &PgPool, user: &UserRow, title: &str) -> AppResult<Todo> {
    let title = validation::validate_title(title).map_err(AppError::validation)?;
    let row = TodoRepo::create(pool, user.id, &title).await?;
    tracing::debug!("User {} created todo {}", user.id, row.id);
    Ok(Todo::from(row))
}

pub async fn get(pool: &PgPool, user: &UserRow, todo_id: i64) -> AppResult<Todo> {
    TodoRepo::get_for_user(pool, todo_id, user.id)
        .await?
        .map(Todo::from)
        .ok_or_else(AppError::todo_not_found)
}

pub async fn update_completion(
    pool: &PgPool,
    user: &UserRow,
    todo_id: i64,
    completed: bool,
) -> AppResult<Todo> {
    TodoRepo::set_completed(pool, todo_id, user.id, completed)
        .await?
        .map(Todo::from)
        .ok_or_else(AppError::todo_not_found)
}

pub async fn delete(pool: &PgPool, user: &UserRow, todo_id: i64) -> AppResult<()> {
    if TodoRepo::delete_for_user(pool, todo_id, user.id).await? {
        tracing::debug!("User {} deleted todo {}", user.id, todo_id);
        Ok(())
    } else {
        Err(AppError::todo_not_found())
    }
}
