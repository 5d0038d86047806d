//! Persistence adapters

pub mod memory;

pub use memory::{
    InMemoryLabelRepository, InMemoryTaskRepository, InMemoryTaskStatusRepository,
    InMemoryUserRepository,
};
