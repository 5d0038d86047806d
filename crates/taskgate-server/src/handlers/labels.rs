//! Label routes

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get};
use taskgate_domain::ports::AuthServiceInterface;
use taskgate_domain::{DeletableKind, Label};
use taskgate_infrastructure::AppContext;
use tracing::info;

use super::parse_id;
use crate::auth::Authorized;
use crate::error::{ApiResult, ErrorResponse, api_error};

#[get("/labels/<id>")]
pub async fn get_label(
    _auth: Authorized,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Json<Label>> {
    let id = parse_id(id, "Label")?;
    ctx.labels
        .find_label_by_id(id)
        .await
        .map_err(api_error)?
        .map(Json)
        .ok_or_else(|| ErrorResponse::not_found(format!("Label {id}")))
}

/// Delete a label no task carries
#[delete("/labels/<id>")]
pub async fn delete_label(
    _auth: Authorized,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Status> {
    let id = parse_id(id, "Label")?;
    if ctx.labels.find_label_by_id(id).await.map_err(api_error)?.is_none() {
        return Err(ErrorResponse::not_found(format!("Label {id}")));
    }
    ctx.auth
        .guard_delete(DeletableKind::Label, id)
        .await
        .map_err(api_error)?;
    ctx.labels.delete_label(id).await.map_err(api_error)?;
    info!(label_id = id, "Label deleted");
    Ok(Status::Ok)
}
