//! JSON error responses
//!
//! Every error body is `{ "error": <code>, "message": <text> }`.

use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Serialize;
use taskgate_domain::Error;
use tracing::error;

/// Error body returned by handlers and catchers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: &'static str,
    /// Human-readable message
    pub message: String,
}

/// Handler error: status plus JSON body
pub type ApiError = (Status, Json<ErrorResponse>);

/// Handler result
pub type ApiResult<T> = Result<T, ApiError>;

impl ErrorResponse {
    /// Build a status and body pair
    pub fn with_status(status: Status, error: &'static str, message: impl Into<String>) -> ApiError {
        (
            status,
            Json(Self {
                error,
                message: message.into(),
            }),
        )
    }

    /// 404 for a resource addressed by path id
    pub fn not_found(resource: impl Into<String>) -> ApiError {
        let resource = resource.into();
        Self::with_status(Status::NotFound, "not_found", format!("{resource} not found"))
    }

    /// 400 for malformed input
    pub fn bad_request(message: impl Into<String>) -> ApiError {
        Self::with_status(Status::BadRequest, "bad_request", message)
    }
}

/// Error code for a status without a more specific cause
pub fn status_code_name(status: Status) -> &'static str {
    match status.code {
        400 => "bad_request",
        401 => "unauthorized",
        403 => "forbidden",
        404 => "not_found",
        422 => "unprocessable_entity",
        500 => "internal_error",
        _ => "http_error",
    }
}

/// Map a domain error to its HTTP status and body
///
/// Unexpected errors are logged and reported without detail.
pub fn api_error(err: Error) -> ApiError {
    match err {
        err if err.is_authentication_failure() => ErrorResponse::with_status(
            Status::Unauthorized,
            "invalid_credentials",
            "Invalid email or password",
        ),
        err if err.is_token_error() => {
            ErrorResponse::with_status(Status::Unauthorized, "invalid_token", err.to_string())
        }
        Error::AuthorizationDenied => {
            ErrorResponse::with_status(Status::Forbidden, "forbidden", "Access denied")
        }
        Error::NotFound { resource } => ErrorResponse::not_found(resource),
        Error::DeletionBlocked { reason } => {
            ErrorResponse::with_status(Status::UnprocessableEntity, "deletion_blocked", reason)
        }
        Error::InvalidArgument { message } => ErrorResponse::bad_request(message),
        other => {
            error!(error = %other, "Request failed");
            ErrorResponse::with_status(
                Status::InternalServerError,
                "internal_error",
                "Internal server error",
            )
        }
    }
}
