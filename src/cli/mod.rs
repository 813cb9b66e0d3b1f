//! # Command-Line Interface
//!
//! User-facing commands that drive an in-memory task list.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `list` | Print the visible tasks once |
//! | `run` | Apply a script of commands (file or stdin) |
//! | `tui` | Interactive terminal UI |
//! | `config` | Show the effective configuration |
//!
//! `list`, `run` and `tui` accept `--seed`, `--empty`, `--filter` and
//! `--limit` to override the configured starting list.
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! tasklist --verbose list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod session;
mod list;
mod script;
mod tui;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use script::{Command as ScriptCommand, Script, ScriptError};
pub use session::{Session, StoreArgs};
