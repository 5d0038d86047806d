//! Route handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/` | GET | Service banner |
//! | `/health` | GET | Liveness check |
//! | `{base}/login` | POST | Exchange email and password for a token |
//! | `{base}/users` | GET, POST | List users, register |
//! | `{base}/users/<id>` | GET, PUT, DELETE | Show user, update or delete own account |
//! | `{base}/tasks` | POST | Create a task authored by the caller |
//! | `{base}/tasks/<id>` | GET, DELETE | Show task, delete own task |
//! | `{base}/statuses/<id>` | GET, DELETE | Show status, delete unused status |
//! | `{base}/labels/<id>` | GET, DELETE | Show label, delete unused label |

pub mod health;
pub mod labels;
pub mod login;
pub mod statuses;
pub mod tasks;
pub mod users;

use crate::error::{ApiResult, ErrorResponse};

/// Parse a path id; anything but a plain integer addresses no resource
pub(crate) fn parse_id(raw: &str, resource: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0 && raw.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| ErrorResponse::not_found(format!("{resource} {raw}")))
}
