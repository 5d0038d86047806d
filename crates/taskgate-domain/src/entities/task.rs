//! Task entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task referencing a status, an author, an optional executor and labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: i64,
    /// Task name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Current status
    pub task_status_id: i64,
    /// User who created the task; owner for authorization purposes
    pub author_id: i64,
    /// User assigned to the task
    pub executor_id: Option<i64>,
    /// Attached labels
    pub label_ids: Vec<i64>,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

/// Task data before the repository assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Current status
    pub task_status_id: i64,
    /// Author
    pub author_id: i64,
    /// Executor
    pub executor_id: Option<i64>,
    /// Attached labels
    pub label_ids: Vec<i64>,
}

impl NewTask {
    /// Create a task with no executor and no labels
    pub fn new(name: impl Into<String>, task_status_id: i64, author_id: i64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            task_status_id,
            author_id,
            executor_id: None,
            label_ids: Vec::new(),
        }
    }

    /// Assign an executor
    pub fn with_executor(mut self, executor_id: i64) -> Self {
        self.executor_id = Some(executor_id);
        self
    }

    /// Attach labels
    pub fn with_labels(mut self, label_ids: Vec<i64>) -> Self {
        self.label_ids = label_ids;
        self
    }
}
