use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tickoff_common::models::todo::Todo;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}

/// Every lookup and mutation takes the owner id; rows of other users are
/// indistinguishable from missing rows.
pub struct TodoRepo;

impl TodoRepo {
    pub async fn create(pool: &PgPool, user_id: i64, title: &str) -> Result<TodoRow> {
        let row = sqlx::query_as::<_, TodoRow>(
            "INSERT INTO todos (title, user_id) VALUES ($1, $2) RETURNING id, title, completed, user_id, created_at",
        )
        .bind(title)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .context("Failed to create todo")?;
        Ok(row)
    }

    pub async fn list_by_user(pool: &PgPool, user_id: i64) -> Result<Vec<TodoRow>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, completed, user_id, created_at FROM todos WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .context("Failed to list todos")?;
        Ok(rows)
    }

    pub async fn get_for_user(pool: &PgPool, id: i64, user_id: i64) -> Result<Option<TodoRow>> {
        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, completed, user_id, created_at FROM todos WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .context("Failed to get todo")?;
        Ok(row)
    }

    pub async fn set_completed(
        pool: &PgPool,
        id: i64,
        user_id: i64,
        completed: bool,
    ) -> Result<Option<TodoRow>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"UPDATE todos SET completed = $3 WHERE id = $1 AND user_id = $2
               RETURNING id, title, completed, user_id, created_at"#,
        )
        .bind(id)
        .bind(user_id)
        .bind(completed)
        .fetch_optional(pool)
        .await
        .context("Failed to update todo")?;
        Ok(row)
    }

    pub async fn delete_for_user(pool: &PgPool, id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .context("Failed to delete todo")?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count_by_user(pool: &PgPool, user_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
            .context("Failed to count todos")?;
        Ok(count)
    }
}
