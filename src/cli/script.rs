//! Line-oriented scripts that drive a task list
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.
//!
//! | Command | Effect |
//! |---------|--------|
//! | `toggle <id>` | Flip completion of one task |
//! | `mark-all` / `unmark-all` | Set completion on every task |
//! | `filter <all\|completed\|pending>` | Change the visible subset |
//! | `add <text>` | Add a task (blank text is ignored) |
//! | `type <text>` | Replace the pending input text |
//! | `commit` | Add a task from the pending input text |
//! | `list` | Print the visible tasks |
//! | `status` | Print counts, filter and pending input |
//!
//! The whole script is parsed before anything runs, so a typo on a late line
//! produces no partial output.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;

use super::list;
use super::output::Output;
use super::session::Session;
use crate::domain::{Filter, IdError, ParseFilterError, TaskCounts, TaskId};

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' needs {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: '{command}' takes no arguments")]
    UnexpectedArgument { line: usize, command: &'static str },

    #[error("line {line}: {source}")]
    InvalidId { line: usize, source: IdError },

    #[error("line {line}: {source}")]
    InvalidFilter { line: usize, source: ParseFilterError },
}

/// A single parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(TaskId),
    SetAllDone(bool),
    Filter(Filter),
    Add(String),
    Type(String),
    Commit,
    List,
    Status,
}

/// A parsed script: commands paired with their 1-based line numbers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    commands: Vec<(usize, Command)>,
}

impl Script {
    /// Parses every line of a script
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut commands = Vec::new();
        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            if let Some(command) = parse_line(line, raw)? {
                commands.push((line, command));
            }
        }
        Ok(Self { commands })
    }

    /// Reads and parses a script from a file, or stdin when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let source = match path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script: {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read script from stdin")?;
                buf
            }
        };

        Ok(Self::parse(&source)?)
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Applies every command to the session in order
    pub fn run(&self, session: &mut Session, output: &Output) {
        for (line, command) in &self.commands {
            output.verbose_ctx("script", &format!("line {}: {:?}", line, command));
            execute(command, session, output);
        }
    }
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Command>, ScriptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };

    let no_args = |command: &'static str, value: Command| {
        if rest.is_empty() {
            Ok(Some(value))
        } else {
            Err(ScriptError::UnexpectedArgument { line, command })
        }
    };

    match name {
        "toggle" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    command: "toggle",
                    expected: "a task id",
                });
            }
            let id = rest
                .parse::<TaskId>()
                .map_err(|source| ScriptError::InvalidId { line, source })?;
            Ok(Some(Command::Toggle(id)))
        }
        "filter" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    command: "filter",
                    expected: "one of all, completed, pending",
                });
            }
            let filter = rest
                .parse::<Filter>()
                .map_err(|source| ScriptError::InvalidFilter { line, source })?;
            Ok(Some(Command::Filter(filter)))
        }
        "add" => Ok(Some(Command::Add(rest.to_string()))),
        "type" => Ok(Some(Command::Type(rest.to_string()))),
        "mark-all" => no_args("mark-all", Command::SetAllDone(true)),
        "unmark-all" => no_args("unmark-all", Command::SetAllDone(false)),
        "commit" => no_args("commit", Command::Commit),
        "list" => no_args("list", Command::List),
        "status" => no_args("status", Command::Status),
        other => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_string(),
        }),
    }
}

#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    filter: Filter,
    all_done: bool,
    counts: TaskCounts,
    pending_input: &'a str,
}

/// Applies one command to the session
pub fn execute(command: &Command, session: &mut Session, output: &Output) {
    let store = &mut session.store;

    match command {
        Command::Toggle(id) => {
            if store.get(*id).is_none() {
                output.verbose_ctx("toggle", &format!("No task {}, nothing changed", id));
            }
            store.toggle(*id);
            if let Some(task) = store.get(*id) {
                output.verbose_ctx("toggle", &format!("{} done={}", id, task.done));
            }
        }
        Command::SetAllDone(value) => {
            let tasks = store.set_all_done(*value);
            output.verbose_ctx("mark-all", &format!("{} task(s) set done={}", tasks.len(), value));
        }
        Command::Filter(filter) => {
            store.set_filter(*filter);
            output.verbose_ctx("filter", &format!("Filter set to {}", filter));
        }
        Command::Add(text) => {
            let (_, added) = store.add(text);
            report_add(session, output, added);
        }
        Command::Type(text) => {
            store.set_pending(text.as_str());
            output.verbose_ctx("type", &format!("Pending input: {:?}", text));
        }
        Command::Commit => {
            let added = store.commit_pending();
            report_add(session, output, added);
        }
        Command::List => list::print(output, session),
        Command::Status => print_status(session, output),
    }
}

fn report_add(session: &Session, output: &Output, added: bool) {
    let store = &session.store;
    let task = store.tasks().last().filter(|_| added);

    match task {
        Some(task) => {
            output.verbose_ctx("add", &format!("Added task {}", task.id));
            if output.is_json() {
                output.data(&serde_json::json!({
                    "added": true,
                    "task": task,
                }));
            } else {
                output.success(&format!(
                    "Added task {}: {}",
                    task.id,
                    task.display_text(session.display_limit)
                ));
            }
        }
        None => {
            output.verbose_ctx("add", "Ignored blank task text");
            if output.is_json() {
                output.data(&serde_json::json!({ "added": false }));
            }
        }
    }
}

fn print_status(session: &Session, output: &Output) {
    let store = &session.store;
    let report = StatusReport {
        filter: store.filter(),
        all_done: store.all_done(),
        counts: store.counts(),
        pending_input: store.pending(),
    };

    if output.is_json() {
        output.data(&report);
        return;
    }

    output.line(&format!(
        "{} task(s): {} done, {} pending",
        report.counts.total, report.counts.completed, report.counts.pending
    ));
    output.line(&format!("Filter: {}", report.filter));
    output.line(&format!(
        "All done: {}",
        if report.all_done { "yes" } else { "no" }
    ));
    if !report.pending_input.is_empty() {
        output.line(&format!("Pending input: {}", report.pending_input));
    }
}
