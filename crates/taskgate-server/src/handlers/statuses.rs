//! Task status routes

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get};
use taskgate_domain::ports::AuthServiceInterface;
use taskgate_domain::{DeletableKind, TaskStatus};
use taskgate_infrastructure::AppContext;
use tracing::info;

use super::parse_id;
use crate::auth::Authorized;
use crate::error::{ApiResult, ErrorResponse, api_error};

#[get("/statuses/<id>")]
pub async fn get_status(
    _auth: Authorized,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Json<TaskStatus>> {
    let id = parse_id(id, "TaskStatus")?;
    ctx.statuses
        .find_task_status_by_id(id)
        .await
        .map_err(api_error)?
        .map(Json)
        .ok_or_else(|| ErrorResponse::not_found(format!("TaskStatus {id}")))
}

/// Delete a status no task uses
#[delete("/statuses/<id>")]
pub async fn delete_status(
    _auth: Authorized,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Status> {
    let id = parse_id(id, "TaskStatus")?;
    if ctx
        .statuses
        .find_task_status_by_id(id)
        .await
        .map_err(api_error)?
        .is_none()
    {
        return Err(ErrorResponse::not_found(format!("TaskStatus {id}")));
    }
    ctx.auth
        .guard_delete(DeletableKind::TaskStatus, id)
        .await
        .map_err(api_error)?;
    ctx.statuses.delete_task_status(id).await.map_err(api_error)?;
    info!(status_id = id, "Task status deleted");
    Ok(Status::Ok)
}
