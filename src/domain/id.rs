//! Task identifiers
//!
//! ID Format: a positive integer, shown as `#{n}` in text output (e.g., `#4`).
//! Parsing accepts both `4` and `#4`.
//!
//! Ids are issued by [`TaskStore`](super::TaskStore) from a monotonic counter,
//! so an id is never handed out twice for the lifetime of a store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID: expected a positive integer like '3' or '#3', got '{0}'")]
    InvalidTaskId(String),
}

/// Task ID, unique within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one
    pub fn next(&self) -> TaskId {
        TaskId(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        match digits.parse::<u64>() {
            Ok(0) | Err(_) => Err(IdError::InvalidTaskId(s.to_string())),
            Ok(n) => Ok(TaskId(n)),
        }
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        TaskId(value)
    }
}
