//! Login route

use rocket::serde::json::Json;
use rocket::{State, post};
use serde::{Deserialize, Serialize};
use taskgate_domain::ports::AuthServiceInterface;
use taskgate_infrastructure::AppContext;

use crate::auth::Authorized;
use crate::error::{ApiResult, api_error};

/// Login credentials
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Exchange email and password for a signed token
///
/// Unknown email and wrong password both answer 401 with the same body.
#[post("/login", data = "<credentials>")]
pub async fn login(
    _auth: Authorized,
    ctx: &State<AppContext>,
    credentials: Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = ctx
        .auth
        .issue_token(&credentials.email, &credentials.password)
        .await
        .map_err(api_error)?;
    Ok(Json(TokenResponse { token }))
}
