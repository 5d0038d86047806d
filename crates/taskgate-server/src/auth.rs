//! Authorization request guard
//!
//! Every route takes [`Authorized`] as its first guard, so identity
//! resolution and the access decision run before any handler logic or path
//! id parsing.
//!
//! ```rust,ignore
//! #[delete("/users/<id>")]
//! async fn delete_user(auth: Authorized, ctx: &State<AppContext>, id: &str) -> ... {
//!     // only reached when the caller is user `id`
//! }
//! ```

use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use taskgate_domain::ports::AuthServiceInterface;
use taskgate_domain::{Error, HttpMethod, Principal};
use taskgate_infrastructure::AppContext;
use tracing::{error, warn};

use crate::constants::AUTHORIZATION_HEADER;

/// Caller that passed the access policy for this request
#[derive(Debug, Clone)]
pub struct Authorized(pub Principal);

impl Authorized {
    /// Resolved caller identity
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

/// Request path as the router sees it
///
/// Segments are percent-decoded, so `/api/user%73/5` is checked as
/// `/api/users/5`. A segment that decodes to `/` or `?` has no faithful
/// rendering and yields `None`.
pub(crate) fn routed_path(request: &Request<'_>) -> Option<String> {
    join_segments(request.uri().path().segments())
}

fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut path = String::new();
    for segment in segments {
        if segment.contains(['/', '?']) {
            return None;
        }
        path.push('/');
        path.push_str(segment);
    }
    if path.is_empty() {
        path.push('/');
    }
    Some(path)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Authorized {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(ctx) = request.rocket().state::<AppContext>() else {
            error!("Application context is not managed");
            return Outcome::Error((
                Status::InternalServerError,
                Error::internal("application context missing"),
            ));
        };

        let header = request.headers().get_one(AUTHORIZATION_HEADER);
        let principal = ctx.auth.resolve_identity(header).await;

        let raw_path = request.uri().path();
        let Some(path) = routed_path(request) else {
            warn!(path = %raw_path, "Encoded separator in path segment");
            return Outcome::Error((Status::Forbidden, Error::AuthorizationDenied));
        };
        let Ok(method) = request.method().as_str().parse::<HttpMethod>() else {
            warn!(method = %request.method(), %path, "Unsupported method");
            return Outcome::Error((Status::Forbidden, Error::AuthorizationDenied));
        };

        match ctx.auth.decide(&principal, method, &path).await {
            Ok(decision) if decision.is_allowed() => Outcome::Success(Self(principal)),
            Ok(_) => {
                warn!(%method, %path, user_id = ?principal.user_id(), "Access denied");
                Outcome::Error((Status::Forbidden, Error::AuthorizationDenied))
            }
            Err(e) => {
                error!(%method, %path, error = %e, "Access decision failed");
                Outcome::Error((Status::InternalServerError, e))
            }
        }
    }
}
