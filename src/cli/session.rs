//! Building a task store from configuration and command-line overrides

use anyhow::Result;
use clap::Args;

use super::output::Output;
use crate::config::Config;
use crate::domain::{Filter, TaskStore};

/// Options shared by every command that works on a task list
#[derive(Debug, Clone, Default, Args)]
pub struct StoreArgs {
    /// Start with this task instead of the configured seed (repeatable)
    #[arg(long = "seed", value_name = "TEXT")]
    pub seed: Vec<String>,

    /// Start with an empty list
    #[arg(long, conflicts_with = "seed")]
    pub empty: bool,

    /// Initial filter (all, completed, pending)
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Characters shown before task text is cut off
    #[arg(long, value_parser = parse_limit)]
    pub limit: Option<usize>,
}

fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// A task store together with its display settings
#[derive(Debug, Clone)]
pub struct Session {
    pub store: TaskStore,
    pub display_limit: usize,
}

impl Session {
    /// Creates a session from config, letting command-line options win
    pub fn build(config: &Config, args: &StoreArgs, output: &Output) -> Result<Self> {
        let seed: Vec<String> = if args.empty {
            Vec::new()
        } else if !args.seed.is_empty() {
            if let Some(pos) = args.seed.iter().position(|s| s.trim().is_empty()) {
                anyhow::bail!("--seed value {} is blank", pos + 1);
            }
            args.seed.clone()
        } else {
            config.seed.clone()
        };

        let mut store = TaskStore::initialize(seed);
        store.set_filter(args.filter.unwrap_or(config.filter));

        let display_limit = args.limit.unwrap_or(config.display_limit);

        output.verbose_ctx(
            "session",
            &format!(
                "Seeded {} task(s), filter={}, display_limit={}",
                store.len(),
                store.filter(),
                display_limit
            ),
        );

        Ok(Self {
            store,
            display_limit,
        })
    }
}
