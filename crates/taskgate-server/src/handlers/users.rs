//! User routes

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put};
use serde::Deserialize;
use taskgate_domain::ports::AuthServiceInterface;
use taskgate_domain::{DeletableKind, NewUser, User};
use taskgate_infrastructure::AppContext;
use tracing::info;

use super::parse_id;
use crate::auth::Authorized;
use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{ApiResult, ErrorResponse, api_error};

/// Registration and update payload
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl UserRequest {
    fn check(&self) -> ApiResult<()> {
        if !self.email.contains('@') {
            return Err(ErrorResponse::bad_request("Email must contain '@'"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ErrorResponse::bad_request(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        Ok(())
    }
}

/// List all users
#[get("/users")]
pub async fn list_users(_auth: Authorized, ctx: &State<AppContext>) -> ApiResult<Json<Vec<User>>> {
    let users = ctx.users.list_users().await.map_err(api_error)?;
    Ok(Json(users))
}

/// Show one user
#[get("/users/<id>")]
pub async fn get_user(
    _auth: Authorized,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Json<User>> {
    let id = parse_id(id, "User")?;
    ctx.users
        .find_user_by_id(id)
        .await
        .map_err(api_error)?
        .map(Json)
        .ok_or_else(|| ErrorResponse::not_found(format!("User {id}")))
}

/// Register a user with the regular role
#[post("/users", data = "<payload>")]
pub async fn create_user(
    _auth: Authorized,
    ctx: &State<AppContext>,
    payload: Json<UserRequest>,
) -> ApiResult<(Status, Json<User>)> {
    payload.check()?;
    let payload = payload.into_inner();
    let password_hash = ctx.auth.hash_password(&payload.password).map_err(api_error)?;
    let user = ctx
        .users
        .create_user(NewUser::new(
            payload.first_name,
            payload.last_name,
            payload.email,
            password_hash,
        ))
        .await
        .map_err(api_error)?;
    info!(user_id = user.id, "User registered");
    Ok((Status::Created, Json(user)))
}

/// Replace the caller's own profile and password
#[put("/users/<id>", data = "<payload>")]
pub async fn update_user(
    _auth: Authorized,
    ctx: &State<AppContext>,
    id: &str,
    payload: Json<UserRequest>,
) -> ApiResult<Json<User>> {
    let id = parse_id(id, "User")?;
    let Some(existing) = ctx.users.find_user_by_id(id).await.map_err(api_error)? else {
        return Err(ErrorResponse::not_found(format!("User {id}")));
    };
    payload.check()?;
    let payload = payload.into_inner();
    let password_hash = ctx.auth.hash_password(&payload.password).map_err(api_error)?;
    let user = ctx
        .users
        .update_user(User {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password_hash,
            ..existing
        })
        .await
        .map_err(api_error)?;
    info!(user_id = user.id, "User updated");
    Ok(Json(user))
}

/// Delete the caller's own account
///
/// Refused with 422 while the user authors or executes any task.
#[delete("/users/<id>")]
pub async fn delete_user(
    _auth: Authorized,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Status> {
    let id = parse_id(id, "User")?;
    if ctx.users.find_user_by_id(id).await.map_err(api_error)?.is_none() {
        return Err(ErrorResponse::not_found(format!("User {id}")));
    }
    ctx.auth
        .guard_delete(DeletableKind::User, id)
        .await
        .map_err(api_error)?;
    ctx.users.delete_user(id).await.map_err(api_error)?;
    info!(user_id = id, "User deleted");
    Ok(Status::Ok)
}
