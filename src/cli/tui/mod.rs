//! Interactive TUI for the task list
//!
//! Provides a terminal-based interface for toggling, bulk-marking, adding and
//! filtering tasks using ratatui.

mod app;
mod event;
mod ui;
mod view;

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use super::session::Session;
use super::Output;
use app::App;
use event::EventHandler;

/// Launch the TUI
pub fn run(output: &Output, session: Session) -> Result<()> {
    output.verbose_ctx("tui", "Initializing TUI application");

    let mut app = App::new(session);

    // Initialize terminal
    let mut terminal = ui::init_terminal()?;

    // Create event handler
    let event_handler = EventHandler::new(250);

    // Run the main loop with panic safety
    // This ensures terminal is restored even if the app panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        app.run(&mut terminal, event_handler)
    }));

    // Always restore terminal, even on panic
    let restore_result = ui::restore_terminal();

    match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result?;
            let counts = app.store().counts();
            output.verbose_ctx(
                "tui",
                &format!(
                    "Closed with {} task(s), {} done",
                    counts.total, counts.completed
                ),
            );
            Ok(())
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else {
                Err(anyhow!("TUI panicked with unknown error"))
            }
        }
    }
}
