//! Deletion guard
//!
//! Pre-check run by every delete of a user, task status or label. Counting
//! and deleting are separate operations; a task created between the two is
//! not detected.

use std::sync::Arc;

use taskgate_domain::error::{Error, Result};
use taskgate_domain::ports::TaskRepository;
use taskgate_domain::value_objects::DeletableKind;
use tracing::info;

/// Refuses deletion of entities still referenced by tasks
#[derive(Clone)]
pub struct DeletionGuard {
    tasks: Arc<dyn TaskRepository>,
}

impl DeletionGuard {
    /// Create a guard backed by the task repository
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    /// `Err(DeletionBlocked)` while any task references the entity
    pub async fn guard(&self, kind: DeletableKind, id: i64) -> Result<()> {
        let dependents = self.tasks.count_tasks_referencing(kind, id).await?;
        if dependents > 0 {
            info!(%kind, id, dependents, "Deletion blocked by dependent tasks");
            return Err(Error::deletion_blocked(kind.blocked_reason()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for DeletionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeletionGuard").finish_non_exhaustive()
    }
}
