//! Label entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag attachable to tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Unique label ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// When the label was created
    pub created_at: DateTime<Utc>,
}
