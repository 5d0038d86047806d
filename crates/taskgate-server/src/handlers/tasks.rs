//! Task routes

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post};
use serde::Deserialize;
use taskgate_domain::{Error, NewTask, Task};
use taskgate_infrastructure::AppContext;
use tracing::info;

use super::parse_id;
use crate::auth::Authorized;
use crate::error::{ApiResult, ErrorResponse, api_error};

/// Show one task
#[get("/tasks/<id>")]
pub async fn get_task(
    _auth: Authorized,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Json<Task>> {
    let id = parse_id(id, "Task")?;
    ctx.tasks
        .find_task_by_id(id)
        .await
        .map_err(api_error)?
        .map(Json)
        .ok_or_else(|| ErrorResponse::not_found(format!("Task {id}")))
}

/// Task creation payload; the author is always the caller
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub task_status_id: i64,
    pub executor_id: Option<i64>,
    #[serde(default)]
    pub label_ids: Vec<i64>,
}

impl CreateTaskRequest {
    async fn check(&self, ctx: &AppContext) -> ApiResult<()> {
        if self.name.trim().is_empty() {
            return Err(ErrorResponse::bad_request("Task name must not be blank"));
        }
        if ctx
            .statuses
            .find_task_status_by_id(self.task_status_id)
            .await
            .map_err(api_error)?
            .is_none()
        {
            return Err(ErrorResponse::bad_request(format!(
                "TaskStatus {} does not exist",
                self.task_status_id
            )));
        }
        if let Some(executor_id) = self.executor_id {
            if ctx.users.find_user_by_id(executor_id).await.map_err(api_error)?.is_none() {
                return Err(ErrorResponse::bad_request(format!(
                    "User {executor_id} does not exist"
                )));
            }
        }
        for &label_id in &self.label_ids {
            if ctx.labels.find_label_by_id(label_id).await.map_err(api_error)?.is_none() {
                return Err(ErrorResponse::bad_request(format!(
                    "Label {label_id} does not exist"
                )));
            }
        }
        Ok(())
    }
}

/// Create a task authored by the caller
#[post("/tasks", data = "<payload>")]
pub async fn create_task(
    auth: Authorized,
    ctx: &State<AppContext>,
    payload: Json<CreateTaskRequest>,
) -> ApiResult<(Status, Json<Task>)> {
    let Some(author_id) = auth.principal().user_id() else {
        return Err(api_error(Error::AuthorizationDenied));
    };
    payload.check(ctx).await?;

    let payload = payload.into_inner();
    let mut label_ids = payload.label_ids;
    label_ids.sort_unstable();
    label_ids.dedup();

    let mut task =
        NewTask::new(payload.name, payload.task_status_id, author_id).with_labels(label_ids);
    task.description = payload.description;
    if let Some(executor_id) = payload.executor_id {
        task = task.with_executor(executor_id);
    }

    let task = ctx.tasks.create_task(task).await.map_err(api_error)?;
    info!(task_id = task.id, author_id, "Task created");
    Ok((Status::Created, Json(task)))
}

/// Delete a task; only its author gets past the guard
#[delete("/tasks/<id>")]
pub async fn delete_task(
    auth: Authorized,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Status> {
    let id = parse_id(id, "Task")?;
    if !ctx.tasks.delete_task(id).await.map_err(api_error)? {
        return Err(ErrorResponse::not_found(format!("Task {id}")));
    }
    info!(task_id = id, user_id = ?auth.principal().user_id(), "Task deleted");
    Ok(Status::Ok)
}
