//! Task records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{text, ValidationError};

/// Maximum length for task titles
const MAX_TITLE_LEN: usize = 200;

/// Persisted task, optionally owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub user_id: Option<i64>,
}

/// Validated input for a task insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    completed: bool,
    user_id: Option<i64>,
}

impl NewTask {
    /// `completed` defaults to false and `user_id` to no owner.
    pub fn new(
        title: &str,
        completed: Option<bool>,
        user_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: text("title", title, MAX_TITLE_LEN)?,
            completed: completed.unwrap_or(false),
            user_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    /// Replace the owner.
    pub fn with_owner(self, user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..self
        }
    }

    /// Attach the id assigned by the store.
    pub fn into_task(self, id: i64) -> Task {
        Task {
            id,
            title: self.title,
            completed: self.completed,
            user_id: self.user_id,
        }
    }
}

/// Partial task update. Absent fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TaskUpdate {
    /// Apply the update in place.
    pub fn apply(&self, task: &mut Task) {
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}
