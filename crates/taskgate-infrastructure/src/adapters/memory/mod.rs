//! In-memory repositories
//!
//! Concurrent-map implementations of the persistence ports. Ids start at 1 and
//! are never reused. Data lives for the lifetime of the process.

mod labels;
mod statuses;
mod tasks;
mod users;

use std::sync::atomic::{AtomicI64, Ordering};

pub use labels::InMemoryLabelRepository;
pub use statuses::InMemoryTaskStatusRepository;
pub use tasks::InMemoryTaskRepository;
pub use users::InMemoryUserRepository;

/// Monotonic id generator
#[derive(Debug, Default)]
struct IdSequence(AtomicI64);

impl IdSequence {
    fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}
