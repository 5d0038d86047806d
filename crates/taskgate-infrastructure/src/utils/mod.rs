//! Utility helpers

pub mod time;

pub use time::{SystemClock, TimeUtils};
