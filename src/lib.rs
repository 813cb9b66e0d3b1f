//! tasklist - an in-memory task list
//!
//! The core is [`TaskStore`]: an ordered list of tasks, the active filter, and
//! the text of the task being typed. The CLI and terminal UI are thin front
//! ends over it.

pub mod domain;
pub mod config;
pub mod cli;

pub use domain::{Filter, Task, TaskId, TaskStore};
