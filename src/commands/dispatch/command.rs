//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;
use waypath_core::bail_usage;
use waypath_core::config::Config;
use waypath_core::error::Result;
use waypath_core::planner::Planner;

use crate::cli::Cli;

/// Resolve the edge-list file: `--graph` first, then the config entry
pub fn resolve_graph_path(cli: &Cli, config: &Config) -> Result<PathBuf> {
    match cli.graph.as_ref().or(config.graph.as_ref()) {
        Some(path) => Ok(path.clone()),
        None => bail_usage!(
            "no graph file given; pass --graph <FILE> or set `graph` in the config file"
        ),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Build a planner from config and load the resolved graph file into it
    pub fn load_planner(&self) -> Result<Planner> {
        let path = resolve_graph_path(self.cli, self.config)?;
        let mut planner = Planner::from_config(self.config);
        let stats = planner.load_graph_data(&path)?;

        debug!(
            elapsed = ?self.start.elapsed(),
            path = %path.display(),
            edges = stats.edges,
            skipped = stats.skipped,
            "load_graph"
        );
        Ok(planner)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Quickest routes between locations of a weighted graph.");
        println!();
        println!("Run `waypath --help` for usage information.");
        Ok(())
    }
}
