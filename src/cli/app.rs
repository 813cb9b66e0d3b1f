//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::script::Script;
use super::session::{Session, StoreArgs};
use super::{list, tui};
use crate::config::{Config, ConfigSource};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(author, version, about = "In-memory task list with filters and bulk completion")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, short = 'c', global = true, env = "TASKLIST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the visible tasks
    List {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Run a script of task list commands
    ///
    /// Examples:
    ///   tasklist run todo.txt
    ///   printf 'toggle 2\nfilter completed\nlist\n' | tasklist run
    Run {
        /// Script file (reads stdin when omitted)
        file: Option<PathBuf>,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Open the interactive terminal UI
    Tui {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Show the effective configuration
    Config,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("tasklist starting");

    let (config, source) = Config::load(cli.config.as_deref())?;
    output.verbose_ctx("config", &format!("Loaded configuration from {}", source));

    match cli.command {
        Commands::List { store } => {
            let session = Session::build(&config, &store, &output)?;
            list::print(&output, &session);
        }

        Commands::Run { file, store } => {
            let script = Script::load(file.as_deref())?;
            output.verbose_ctx("run", &format!("Parsed {} command(s)", script.len()));

            let mut session = Session::build(&config, &store, &output)?;
            script.run(&mut session, &output);
        }

        Commands::Tui { store } => {
            let session = Session::build(&config, &store, &output)?;
            tui::run(&output, session)?
        }

        Commands::Config => show_config(&output, &config, &source)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Prints the effective configuration and where it came from
fn show_config(output: &Output, config: &Config, source: &ConfigSource) -> Result<()> {
    if output.is_json() {
        output.data(&serde_json::json!({
            "source": source.to_string(),
            "config": config,
        }));
        return Ok(());
    }

    println!("# Source: {}", source);
    print!("{}", config.to_toml()?);
    Ok(())
}
