//! Printing the visible task list

use serde::Serialize;

use super::output::Output;
use super::session::Session;
use crate::domain::{Filter, Task, TaskCounts, TaskId, TaskStore};

/// One visible task as printed by `list`
#[derive(Debug, Serialize)]
pub struct TaskRow<'a> {
    pub id: TaskId,
    pub text: &'a str,
    pub done: bool,
    pub display: String,
}

impl<'a> TaskRow<'a> {
    pub fn new(task: &'a Task, limit: usize) -> Self {
        Self {
            id: task.id,
            text: &task.text,
            done: task.done,
            display: task.display_text(limit),
        }
    }
}

/// Snapshot of the filtered view
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub filter: Filter,
    pub all_done: bool,
    pub counts: TaskCounts,
    pub tasks: Vec<TaskRow<'a>>,
}

impl<'a> Listing<'a> {
    pub fn new(store: &'a TaskStore, limit: usize) -> Self {
        Self {
            filter: store.filter(),
            all_done: store.all_done(),
            counts: store.counts(),
            tasks: store
                .visible_tasks()
                .map(|t| TaskRow::new(t, limit))
                .collect(),
        }
    }
}

/// Formats a single row: `[x] #2  Garcia`
pub fn format_row(row: &TaskRow) -> String {
    let mark = if row.done { "[x]" } else { "[ ]" };
    format!("{} {:<4} {}", mark, row.id.to_string(), row.display)
}

/// Formats the line shown under the rows
pub fn format_summary(listing: &Listing) -> String {
    if listing.tasks.is_empty() {
        return format!("No tasks to show (filter: {})", listing.filter);
    }

    format!(
        "Showing {} of {} task(s) (filter: {}), {} done, {} pending",
        listing.tasks.len(),
        listing.counts.total,
        listing.filter,
        listing.counts.completed,
        listing.counts.pending
    )
}

/// Prints the visible tasks of a session
pub fn print(output: &Output, session: &Session) {
    let listing = Listing::new(&session.store, session.display_limit);
    output.verbose_ctx(
        "list",
        &format!(
            "{} visible of {} task(s)",
            listing.tasks.len(),
            listing.counts.total
        ),
    );

    if output.is_json() {
        output.data(&listing);
        return;
    }

    for row in &listing.tasks {
        output.line(&format_row(row));
    }
    output.line(&format_summary(&listing));
}
