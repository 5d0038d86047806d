//! JSON error catchers
//!
//! Guard failures and unmatched routes end up here; the body shape matches
//! handler errors.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Request, catch};

use crate::error::{ErrorResponse, status_code_name};

fn body(status: Status, message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: status_code_name(status),
        message: message.to_string(),
    })
}

#[catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    body(Status::BadRequest, "Malformed request")
}

#[catch(401)]
pub fn unauthorized() -> Json<ErrorResponse> {
    body(Status::Unauthorized, "Authentication required")
}

#[catch(403)]
pub fn forbidden() -> Json<ErrorResponse> {
    body(Status::Forbidden, "Access denied")
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<ErrorResponse> {
    body(Status::NotFound, &format!("No resource at {}", req.uri().path()))
}

#[catch(422)]
pub fn unprocessable_entity() -> Json<ErrorResponse> {
    body(Status::UnprocessableEntity, "Request body could not be processed")
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    body(Status::InternalServerError, "Internal server error")
}

#[catch(default)]
pub fn default_catcher(status: Status, _req: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    (status, body(status, status.reason_lossy()))
}
