//! tasklist - In-memory task list with filters and bulk completion

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tasklist::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
