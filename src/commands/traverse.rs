//! `graphwalk dfs` and `graphwalk bfs` commands

use crate::cli::TraverseArgs;
use crate::commands::context::{label, CommandContext};
use graphwalk_core::error::Result;
use graphwalk_core::format::escape_quotes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    DepthFirst,
    BreadthFirst,
}

impl TraversalKind {
    fn name(self) -> &'static str {
        match self {
            TraversalKind::DepthFirst => "dfs",
            TraversalKind::BreadthFirst => "bfs",
        }
    }
}

pub fn execute(ctx: &CommandContext, args: &TraverseArgs, kind: TraversalKind) -> Result<()> {
    let graph = ctx.load_graph(&args.file)?;
    let start = ctx.resolve_vertex(&graph, args.start.as_deref())?;

    let order = match kind {
        TraversalKind::DepthFirst => graph.dfs_order(start)?,
        TraversalKind::BreadthFirst => graph.bfs_order(start)?,
    };
    let names: Vec<&str> = order.iter().map(|id| label(&graph, *id)).collect();

    tracing::debug!(traversal = kind.name(), visited = names.len(), "traverse");

    crate::output_by_format!(ctx.format(),
        json => {
            let output = serde_json::json!({
                "traversal": kind.name(),
                "start": names.first(),
                "order": names,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            for name in &names {
                println!("{}", name);
            }
        },
        records => {
            println!(
                "T {} start=\"{}\" visited={}",
                kind.name(),
                escape_quotes(names.first().copied().unwrap_or_default()),
                names.len()
            );
            for name in &names {
                println!("V \"{}\"", escape_quotes(name));
            }
        }
    );

    Ok(())
}
