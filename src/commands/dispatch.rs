//! Command dispatch logic for graphwalk

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::context::{Command, CommandContext, NoCommand};
use crate::commands::traverse::TraversalKind;
use crate::commands::{convert, path, show, traverse};
use graphwalk_core::config::Config;
use graphwalk_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show(args) => show::execute(ctx, args),
            Commands::Dfs(args) => traverse::execute(ctx, args, TraversalKind::DepthFirst),
            Commands::Bfs(args) => traverse::execute(ctx, args, TraversalKind::BreadthFirst),
            Commands::Path(args) => path::execute(ctx, args),
            Commands::Convert(args) => convert::execute(ctx, args),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), format = %config.output.format, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
