//! Task repository
//!
//! Relationship traversal (user -> tasks) is an explicit query here,
//! never a lazy fetch hanging off a user record.

use sqlx::PgPool;

use super::{is_foreign_key_violation, DbError, UserRepo};
use crate::models::{NewTask, Task, TaskUpdate};

/// Task repository
pub struct TaskRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TaskRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a task. An unknown `user_id` returns `DbError::MissingReference`.
    pub async fn create(&self, task: &NewTask) -> Result<Task, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO tasks (title, completed, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, completed, user_id
            "#,
        )
        .bind(task.title())
        .bind(task.completed())
        .bind(task.user_id())
        .fetch_one(self.pool)
        .await
        .map_err(|err| match task.user_id() {
            Some(id) if is_foreign_key_violation(&err) => DbError::MissingReference {
                field: "user_id",
                id,
            },
            _ => DbError::Sqlx(err),
        })
    }

    /// List all tasks in insertion order.
    pub async fn list(&self) -> Result<Vec<Task>, DbError> {
        let tasks = sqlx::query_as("SELECT id, title, completed, user_id FROM tasks ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(tasks)
    }

    /// Get a single task by id.
    pub async fn get(&self, id: i64) -> Result<Task, DbError> {
        sqlx::query_as("SELECT id, title, completed, user_id FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("task", id))
    }

    /// Apply a partial update, returning the task as stored afterwards.
    ///
    /// Only `completed` is writable; an empty update is a plain fetch.
    pub async fn update(&self, id: i64, update: TaskUpdate) -> Result<Task, DbError> {
        let Some(completed) = update.completed else {
            return self.get(id).await;
        };

        sqlx::query_as(
            r#"
            UPDATE tasks SET completed = $2
            WHERE id = $1
            RETURNING id, title, completed, user_id
            "#,
        )
        .bind(id)
        .bind(completed)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("task", id))
    }

    /// List the tasks owned by a user. Unknown users are `NotFound`.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Task>, DbError> {
        UserRepo::new(self.pool).get(user_id).await?;

        let tasks = sqlx::query_as(
            r#"
            SELECT id, title, completed, user_id
            FROM tasks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;
        Ok(tasks)
    }
}
