//! Task domain model
//!
//! A task is a single list entry: an id, its text, and a completion flag.
//! Filters select which subset of the list is shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::id::TaskId;

/// Number of characters shown before text is cut off with an ellipsis
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// A single entry in the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Task content, never empty after trimming
    pub text: String,

    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Creates a new, not-yet-done task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Flips the completion flag
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Returns the text cut to `limit` characters for display
    ///
    /// See [`display_text`].
    pub fn display_text(&self, limit: usize) -> String {
        display_text(self, limit)
    }

    /// Returns the text cut to [`DEFAULT_DISPLAY_LIMIT`] characters
    pub fn short_text(&self) -> String {
        display_text(self, DEFAULT_DISPLAY_LIMIT)
    }
}

/// Formats a task's text for display.
///
/// Text longer than `limit` characters becomes its first `limit` characters
/// followed by [`ELLIPSIS`]; shorter text is returned unchanged. Characters are
/// counted as `char`s, so multi-byte text is never split mid-codepoint. The
/// stored text is not touched.
pub fn display_text(task: &Task, limit: usize) -> String {
    let text = &task.text;
    if text.chars().count() <= limit {
        text.clone()
    } else {
        let truncated: String = text.chars().take(limit).collect();
        format!("{}{}", truncated, ELLIPSIS)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Invalid filter '{0}': expected one of all, completed, pending")]
pub struct ParseFilterError(String);

/// Which subset of the task list is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Every filter, in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    /// Returns true if the task belongs to this filter's subset
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.done,
            Filter::Pending => !task.done,
        }
    }

    /// Returns a display label for the filter
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Pending => "pending",
        }
    }

    /// Cycles to the next filter (wraps around)
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Completed,
            Filter::Completed => Filter::Pending,
            Filter::Pending => Filter::All,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "a" => Ok(Filter::All),
            "completed" | "done" | "c" => Ok(Filter::Completed),
            "pending" | "todo" | "p" => Ok(Filter::Pending),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u64, text: &str) -> Task {
        Task::new(TaskId::new(id), text)
    }

    #[test]
    fn new_task_is_not_done() {
        let task = make_task(1, "Victor");
        assert!(!task.done);
    }

    #[test]
    fn toggle_flips_done() {
        let mut task = make_task(1, "Victor");

        task.toggle();
        assert!(task.done);

        task.toggle();
        assert!(!task.done);
    }

    #[test]
    fn display_text_keeps_short_text() {
        assert_eq!(make_task(1, "Victor").short_text(), "Victor");
    }

    #[test]
    fn display_text_exact_length() {
        assert_eq!(make_task(1, "VictorGarc").short_text(), "VictorGarc");
    }

    #[test]
    fn display_text_truncates_long_text() {
        let task = make_task(4, "VictorGarciaBaez");
        assert_eq!(task.short_text(), "VictorGarc...");

        // Stored text is untouched
        assert_eq!(task.text, "VictorGarciaBaez");
    }

    #[test]
    fn display_text_custom_limit() {
        let task = make_task(1, "Garcia");
        assert_eq!(task.display_text(3), "Gar...");
        assert_eq!(task.display_text(0), "...");
        assert_eq!(task.display_text(6), "Garcia");
    }

    #[test]
    fn display_text_counts_chars_not_bytes() {
        let task = make_task(1, "ñandúñandúñandú");
        assert_eq!(task.display_text(5), "ñandú...");
    }

    #[test]
    fn filter_matches() {
        let mut task = make_task(1, "Baez");

        assert!(Filter::All.matches(&task));
        assert!(Filter::Pending.matches(&task));
        assert!(!Filter::Completed.matches(&task));

        task.toggle();
        assert!(Filter::All.matches(&task));
        assert!(!Filter::Pending.matches(&task));
        assert!(Filter::Completed.matches(&task));
    }

    #[test]
    fn filter_parses_names_and_aliases() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("Completed".parse::<Filter>().unwrap(), Filter::Completed);
        assert_eq!("done".parse::<Filter>().unwrap(), Filter::Completed);
        assert_eq!(" pending ".parse::<Filter>().unwrap(), Filter::Pending);
        assert_eq!("p".parse::<Filter>().unwrap(), Filter::Pending);
        assert!("nope".parse::<Filter>().is_err());
    }

    #[test]
    fn filter_next_cycles_through_all() {
        let mut filter = Filter::All;
        for expected in [Filter::Completed, Filter::Pending, Filter::All] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
    }

    #[test]
    fn filter_label_round_trips_through_from_str() {
        for filter in Filter::ALL {
            assert_eq!(filter.label().parse::<Filter>().unwrap(), filter);
        }
    }

    #[test]
    fn task_serializes_with_plain_fields() {
        let task = make_task(2, "Garcia");
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 2, "text": "Garcia", "done": false})
        );
    }
}
