//! In-memory task repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use taskgate_domain::error::{Error, Result};
use taskgate_domain::ports::TaskRepository;
use taskgate_domain::{DeletableKind, NewTask, Task};

use super::IdSequence;

/// Task repository keeping records in a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    ids: IdSequence,
    tasks: DashMap<i64, Task>,
}

impl InMemoryTaskRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn references(task: &Task, kind: DeletableKind, id: i64) -> bool {
    match kind {
        DeletableKind::User => task.author_id == id || task.executor_id == Some(id),
        DeletableKind::TaskStatus => task.task_status_id == id,
        DeletableKind::Label => task.label_ids.contains(&id),
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>> {
        Ok(self.tasks.get(&id).map(|entry| entry.value().clone()))
    }

    async fn count_tasks_referencing(&self, kind: DeletableKind, id: i64) -> Result<u64> {
        let count = self
            .tasks
            .iter()
            .filter(|entry| references(entry.value(), kind, id))
            .count();
        u64::try_from(count).map_err(|e| Error::internal(format!("Task count overflow: {e}")))
    }

    async fn create_task(&self, task: NewTask) -> Result<Task> {
        let id = self.ids.next();
        let created = Task {
            id,
            name: task.name,
            description: task.description,
            task_status_id: task.task_status_id,
            author_id: task.author_id,
            executor_id: task.executor_id,
            label_ids: task.label_ids,
            created_at: Utc::now(),
        };
        self.tasks.insert(id, created.clone());
        Ok(created)
    }

    async fn update_task(&self, task: Task) -> Result<Task> {
        let Some(mut slot) = self.tasks.get_mut(&task.id) else {
            return Err(Error::not_found(format!("Task {}", task.id)));
        };
        *slot = task.clone();
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> Result<bool> {
        Ok(self.tasks.remove(&id).is_some())
    }
}
