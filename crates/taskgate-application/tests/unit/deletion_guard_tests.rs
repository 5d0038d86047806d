//! Deletion guard tests

use std::sync::Arc;

use taskgate_application::DeletionGuard;
use taskgate_domain::ports::{AuthServiceInterface, TaskRepository};
use taskgate_domain::{DeletableKind, Error, NewTask};

use crate::support::{FakeTasks, harness};

#[tokio::test]
async fn test_status_with_task_is_blocked_until_reassigned() {
    let tasks = Arc::new(FakeTasks::default());
    let guard = DeletionGuard::new(tasks.clone());
    let mut task = tasks
        .create_task(NewTask::new("Triage", 1, 10))
        .await
        .expect("create task");

    let err = guard
        .guard(DeletableKind::TaskStatus, 1)
        .await
        .expect_err("blocked");
    assert!(matches!(err, Error::DeletionBlocked { .. }));
    assert_eq!(err.to_string(), "TaskStatus has associated tasks");

    task.task_status_id = 2;
    tasks.update_task(task).await.expect("reassign");

    guard
        .guard(DeletableKind::TaskStatus, 1)
        .await
        .expect("no dependents");
}

#[tokio::test]
async fn test_user_referenced_as_executor_is_blocked() {
    let tasks = Arc::new(FakeTasks::default());
    let guard = DeletionGuard::new(tasks.clone());
    tasks
        .create_task(NewTask::new("Review", 1, 10).with_executor(11))
        .await
        .expect("create task");

    for user_id in [10, 11] {
        let err = guard
            .guard(DeletableKind::User, user_id)
            .await
            .expect_err("blocked");
        assert_eq!(err.to_string(), "User has associated tasks");
    }
    guard.guard(DeletableKind::User, 12).await.expect("free");
}

#[tokio::test]
async fn test_label_in_label_set_is_blocked() {
    let tasks = Arc::new(FakeTasks::default());
    let guard = DeletionGuard::new(tasks.clone());
    tasks
        .create_task(NewTask::new("Tag me", 1, 10).with_labels(vec![4, 5]))
        .await
        .expect("create task");

    let err = guard
        .guard(DeletableKind::Label, 5)
        .await
        .expect_err("blocked");
    assert_eq!(err.to_string(), "Label has associated tasks");
    guard.guard(DeletableKind::Label, 6).await.expect("free");
}

#[tokio::test]
async fn test_guard_delete_through_service() {
    let h = harness();
    h.tasks
        .create_task(NewTask::new("Via facade", 3, 1))
        .await
        .expect("create task");

    assert!(
        h.service
            .guard_delete(DeletableKind::TaskStatus, 3)
            .await
            .is_err()
    );
    assert!(
        h.service
            .guard_delete(DeletableKind::TaskStatus, 4)
            .await
            .is_ok()
    );
}
