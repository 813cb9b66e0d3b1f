//! Domain models for the task list
//!
//! Contains the core state logic without any I/O concerns.

mod id;
mod task;
mod store;

pub use id::{IdError, TaskId};
pub use task::{display_text, Filter, ParseFilterError, Task, DEFAULT_DISPLAY_LIMIT, ELLIPSIS};
pub use store::{TaskCounts, TaskStore};
