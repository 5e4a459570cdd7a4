//! Command dispatch logic for waypath

use std::time::Instant;

use tracing::debug;
use waypath_core::config::Config;
use waypath_core::error::Result;

use crate::cli::{Cli, Commands};

mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load()?;

    debug!(elapsed = ?start.elapsed(), source = %Config::source_display(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Locations => {
                let planner = ctx.load_planner()?;
                crate::commands::locations::execute(ctx.cli, &planner)
            }
            Commands::Path { start, end } => {
                let planner = ctx.load_planner()?;
                crate::commands::path::execute(ctx.cli, &planner, start, end)
            }
            Commands::Nearest { start, limit } => {
                let planner = ctx.load_planner()?;
                crate::commands::nearest::execute(ctx.cli, planner, start, *limit)
            }
        }
    }
}
