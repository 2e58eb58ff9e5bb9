//! `graphwalk show` command

use crate::cli::GraphArgs;
use crate::commands::context::{label, CommandContext};
use graphwalk_core::error::Result;
use graphwalk_core::format::escape_quotes;

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.file)?;

    crate::output_by_format!(ctx.format(),
        json => {
            let adjacency: Vec<serde_json::Value> = graph
                .vertices()
                .map(|vertex| {
                    let edges: Vec<serde_json::Value> = vertex
                        .edges()
                        .iter()
                        .map(|edge| {
                            serde_json::json!({
                                "to": label(&graph, edge.end()),
                                "weight": edge.weight().value(),
                            })
                        })
                        .collect();
                    serde_json::json!({
                        "vertex": vertex.data(),
                        "edges": edges,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "weighted": graph.is_weighted(),
                "directed": graph.is_directed(),
                "vertex_count": graph.vertex_count(),
                "edge_count": graph.edge_count(),
                "adjacency": adjacency,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            print!("{}", graph);
            if !ctx.cli.quiet {
                println!();
                println!(
                    "{} vertices, {} edges ({})",
                    graph.vertex_count(),
                    graph.edge_count(),
                    graph.options().describe()
                );
            }
        },
        records => {
            println!(
                "H graphwalk={} vertices={} edges={} weighted={} directed={}",
                env!("CARGO_PKG_VERSION"),
                graph.vertex_count(),
                graph.edge_count(),
                graph.is_weighted(),
                graph.is_directed()
            );
            for vertex in graph.vertices() {
                println!("V \"{}\"", escape_quotes(vertex.data()));
            }
            for vertex in graph.vertices() {
                for edge in vertex.edges() {
                    println!(
                        "E \"{}\" \"{}\" {}",
                        escape_quotes(vertex.data()),
                        escape_quotes(label(&graph, edge.end())),
                        edge.weight()
                    );
                }
            }
        }
    );

    Ok(())
}
