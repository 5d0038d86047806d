//! Persisted entities
//!
//! Records owned by the persistence layer. Ids are assigned by the
//! repository on insert and are always positive.

mod label;
mod task;
mod task_status;
mod user;

pub use label::Label;
pub use task::{NewTask, Task};
pub use task_status::TaskStatus;
pub use user::{NewUser, User};
