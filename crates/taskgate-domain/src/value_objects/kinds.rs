//! Entity kinds referenced by access rules and the deletion guard

use crate::constants::ASSOCIATED_TASKS_SUFFIX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entities protected by the dependent-count invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletableKind {
    /// Referenced by tasks as author or executor
    User,
    /// Referenced by tasks as their status
    TaskStatus,
    /// Referenced by tasks through their label set
    Label,
}

impl DeletableKind {
    /// Entity name used in user-facing messages
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::TaskStatus => "TaskStatus",
            Self::Label => "Label",
        }
    }

    /// Reason reported when tasks still reference the entity
    pub fn blocked_reason(self) -> String {
        format!("{} {}", self.name(), ASSOCIATED_TASKS_SUFFIX)
    }
}

impl fmt::Display for DeletableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resources with an owning user, checked by `ResourceOwnership` rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Owned by its author
    Task,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task => f.write_str("Task"),
        }
    }
}
