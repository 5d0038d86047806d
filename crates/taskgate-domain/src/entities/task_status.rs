//! Task status entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow state a task can be in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    /// Unique status ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// When the status was created
    pub created_at: DateTime<Utc>,
}
