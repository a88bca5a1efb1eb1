//! tiny-todo-core library.
//!
//! An ordered, in-memory todo list with JSON file persistence.
//!
//! # Conventions
//!
//! - **Errors**: store operations return [`TodoError`]; the config layer uses
//!   `anyhow::Result` with path context.
//! - **Logging**: `tracing` macros only. Installing a subscriber is up to the
//!   embedding application.

pub mod config;
pub mod error;
pub mod model;
mod persist;
pub mod store;

pub use error::{ErrorCode, TodoError};
pub use model::item::TodoItem;
pub use store::{Summary, TodoStore};
