//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use graphwalk_core::config::Config;
use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::graph::{read_document, Graph, VertexId};
use graphwalk_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` wins over the configured default
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
    }

    /// Read a document and build the graph, using configured mode defaults
    pub fn load_graph(&self, path: &Path) -> Result<Graph<String>> {
        let graph = read_document::<String>(path)?.into_graph(path, self.config.graph)?;
        tracing::debug!(
            path = %path.display(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            mode = graph.options().describe(),
            "load_graph"
        );
        trace_time!(self.start, "load_graph");
        Ok(graph)
    }

    /// Look up a vertex by payload; `None` selects the default start
    pub fn resolve_vertex(
        &self,
        graph: &Graph<String>,
        payload: Option<&str>,
    ) -> Result<Option<VertexId>> {
        payload
            .map(|payload| {
                graph
                    .find_vertex(payload)
                    .ok_or_else(|| GraphError::not_found("vertex", payload))
            })
            .transpose()
    }
}

/// Payload of a vertex for display
pub fn label(graph: &Graph<String>, id: VertexId) -> &str {
    graph.data(id).map(String::as_str).unwrap_or("?")
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Traverse and search graph documents.");
        println!();
        println!("Run `graphwalk --help` for usage information.");
        Ok(())
    }
}
