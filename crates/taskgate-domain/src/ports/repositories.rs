//! Persistence Ports
//!
//! Lookups return `Ok(None)` for missing records; `Err` is reserved for
//! storage failures.

use crate::entities::{Label, NewTask, NewUser, Task, TaskStatus, User};
use crate::error::Result;
use crate::value_objects::DeletableKind;
use async_trait::async_trait;

/// User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by id
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// All users ordered by id
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Insert a user, assigning its id
    ///
    /// Fails with `InvalidArgument` when the email is already registered.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Replace an existing user
    ///
    /// Fails with `NotFound` when no user has `user.id` and with
    /// `InvalidArgument` when the new email belongs to another user.
    async fn update_user(&self, user: User) -> Result<User>;

    /// Delete a user; `false` if it did not exist
    async fn delete_user(&self, id: i64) -> Result<bool>;
}

/// Task persistence
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find a task by id
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>>;

    /// Number of tasks referencing the entity
    ///
    /// Users count as author or executor, statuses through `task_status_id`,
    /// labels through `label_ids`.
    async fn count_tasks_referencing(&self, kind: DeletableKind, id: i64) -> Result<u64>;

    /// Insert a task, assigning its id
    async fn create_task(&self, task: NewTask) -> Result<Task>;

    /// Replace an existing task
    ///
    /// Fails with `NotFound` when no task has `task.id`.
    async fn update_task(&self, task: Task) -> Result<Task>;

    /// Delete a task; `false` if it did not exist
    async fn delete_task(&self, id: i64) -> Result<bool>;
}

/// Task status persistence
#[async_trait]
pub trait TaskStatusRepository: Send + Sync {
    /// Find a status by id
    async fn find_task_status_by_id(&self, id: i64) -> Result<Option<TaskStatus>>;

    /// Insert a status, assigning its id
    async fn create_task_status(&self, name: &str) -> Result<TaskStatus>;

    /// Delete a status; `false` if it did not exist
    async fn delete_task_status(&self, id: i64) -> Result<bool>;
}

/// Label persistence
#[async_trait]
pub trait LabelRepository: Send + Sync {
    /// Find a label by id
    async fn find_label_by_id(&self, id: i64) -> Result<Option<Label>>;

    /// Insert a label, assigning its id
    async fn create_label(&self, name: &str) -> Result<Label>;

    /// Delete a label; `false` if it did not exist
    async fn delete_label(&self, id: i64) -> Result<bool>;
}
