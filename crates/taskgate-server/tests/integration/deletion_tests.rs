//! Deletion guard over HTTP

use rocket::http::Status;
use taskgate_domain::NewTask;

use crate::support::{app, bearer, read};

#[rocket::async_test]
async fn test_status_in_use_cannot_be_deleted_until_reassigned() {
    let app = app().await;
    let ada = app.user("ada@example.com").await;
    let token = app.login("ada@example.com").await;

    let used = app.ctx.statuses.create_task_status("in progress").await.expect("status");
    let spare = app.ctx.statuses.create_task_status("done").await.expect("status");
    let task = app
        .ctx
        .tasks
        .create_task(NewTask::new("ship it", used.id, ada.id))
        .await
        .expect("task");

    let response = app
        .client
        .delete(format!("/api/statuses/{}", used.id))
        .header(bearer(&token))
        .dispatch()
        .await;
    let (status, body) = read(response).await;
    assert_eq!(status, Status::UnprocessableEntity);
    assert_eq!(body["error"], "deletion_blocked");
    assert_eq!(body["message"], "TaskStatus has associated tasks");

    let mut reassigned = task;
    reassigned.task_status_id = spare.id;
    app.ctx.tasks.update_task(reassigned).await.expect("update");

    let response = app
        .client
        .delete(format!("/api/statuses/{}", used.id))
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn test_label_in_use_cannot_be_deleted() {
    let app = app().await;
    let ada = app.user("ada@example.com").await;
    let token = app.login("ada@example.com").await;

    let status = app.ctx.statuses.create_task_status("new").await.expect("status");
    let label = app.ctx.labels.create_label("bug").await.expect("label");
    app.ctx
        .tasks
        .create_task(NewTask::new("fix", status.id, ada.id).with_labels(vec![label.id]))
        .await
        .expect("task");

    let response = app
        .client
        .delete(format!("/api/labels/{}", label.id))
        .header(bearer(&token))
        .dispatch()
        .await;
    let (status, body) = read(response).await;
    assert_eq!(status, Status::UnprocessableEntity);
    assert_eq!(body["message"], "Label has associated tasks");
}

#[rocket::async_test]
async fn test_task_author_cannot_delete_account() {
    let app = app().await;
    let ada = app.user("ada@example.com").await;
    app.task(ada.id).await;
    let token = app.login("ada@example.com").await;

    let response = app
        .client
        .delete(format!("/api/users/{}", ada.id))
        .header(bearer(&token))
        .dispatch()
        .await;
    let (status, body) = read(response).await;
    assert_eq!(status, Status::UnprocessableEntity);
    assert_eq!(body["message"], "User has associated tasks");
}

#[rocket::async_test]
async fn test_unused_label_is_deleted() {
    let app = app().await;
    app.user("ada@example.com").await;
    let token = app.login("ada@example.com").await;
    let label = app.ctx.labels.create_label("stale").await.expect("label");

    let response = app
        .client
        .delete(format!("/api/labels/{}", label.id))
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    assert!(app.ctx.labels.find_label_by_id(label.id).await.expect("lookup").is_none());
}
