//! Health and banner routes

use rocket::get;
use rocket::serde::json::{Json, Value, json};

use crate::auth::Authorized;
use crate::constants::SERVICE_NAME;

/// Service name and version
#[get("/")]
pub fn index(_auth: Authorized) -> Json<Value> {
    Json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness check
#[get("/health")]
pub fn health(_auth: Authorized) -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
