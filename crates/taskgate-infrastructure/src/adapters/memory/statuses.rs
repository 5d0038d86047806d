//! In-memory task status repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use taskgate_domain::TaskStatus;
use taskgate_domain::error::Result;
use taskgate_domain::ports::TaskStatusRepository;

use super::IdSequence;

/// Task status repository keeping records in a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryTaskStatusRepository {
    ids: IdSequence,
    statuses: DashMap<i64, TaskStatus>,
}

impl InMemoryTaskStatusRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStatusRepository for InMemoryTaskStatusRepository {
    async fn find_task_status_by_id(&self, id: i64) -> Result<Option<TaskStatus>> {
        Ok(self.statuses.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create_task_status(&self, name: &str) -> Result<TaskStatus> {
        let id = self.ids.next();
        let status = TaskStatus {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.statuses.insert(id, status.clone());
        Ok(status)
    }

    async fn delete_task_status(&self, id: i64) -> Result<bool> {
        Ok(self.statuses.remove(&id).is_some())
    }
}
