//! `graphwalk path` command: Dijkstra shortest paths

use crate::cli::PathArgs;
use crate::commands::context::{label, CommandContext};
use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::format::{escape_quotes, format_distance};
use graphwalk_core::graph::{Graph, ShortestPaths};

pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.file)?;
    let from = ctx.resolve_vertex(&graph, args.from.as_deref())?;
    let paths = graph.dijkstra(from)?;

    match args.to.as_deref() {
        Some(target) => single_path(ctx, &graph, &paths, target),
        None => all_distances(ctx, &graph, &paths),
    }
}

fn single_path(
    ctx: &CommandContext,
    graph: &Graph<String>,
    paths: &ShortestPaths,
    target: &str,
) -> Result<()> {
    let source = label(graph, paths.start());
    let target_id = graph
        .find_vertex(target)
        .ok_or_else(|| GraphError::not_found("vertex", target))?;
    let route = paths
        .path_to(target_id)
        .ok_or_else(|| GraphError::not_found("path", format!("{} -> {}", source, target)))?;
    let distance = paths.distance(target_id).unwrap_or(f64::INFINITY);
    let names: Vec<&str> = route.iter().map(|id| label(graph, *id)).collect();

    crate::output_by_format!(ctx.format(),
        json => {
            let output = serde_json::json!({
                "from": source,
                "to": target,
                "distance": distance,
                "path": names,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            println!("{} (distance {})", names.join(" -> "), format_distance(distance));
        },
        records => {
            println!(
                "P from=\"{}\" to=\"{}\" distance={} hops={}",
                escape_quotes(source),
                escape_quotes(target),
                format_distance(distance),
                names.len().saturating_sub(1)
            );
            for name in &names {
                println!("V \"{}\"", escape_quotes(name));
            }
        }
    );

    Ok(())
}

fn all_distances(ctx: &CommandContext, graph: &Graph<String>, paths: &ShortestPaths) -> Result<()> {
    let rows: Vec<(&str, f64, Option<&str>)> = graph
        .vertices()
        .map(|vertex| {
            let distance = paths.distance(vertex.id()).unwrap_or(f64::INFINITY);
            let via = paths.predecessor(vertex.id()).map(|id| label(graph, id));
            (vertex.data().as_str(), distance, via)
        })
        .collect();

    crate::output_by_format!(ctx.format(),
        json => {
            let distances: Vec<serde_json::Value> = rows
                .iter()
                .map(|(name, distance, via)| {
                    serde_json::json!({
                        "vertex": name,
                        "distance": distance.is_finite().then_some(*distance),
                        "predecessor": via,
                        "reachable": distance.is_finite(),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "start": label(graph, paths.start()),
                "distances": distances,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            for (name, distance, via) in &rows {
                match (distance.is_finite(), via) {
                    (false, _) => println!("{}: unreachable", name),
                    (true, Some(via)) => println!("{}: {} (via {})", name, format_distance(*distance), via),
                    (true, None) => println!("{}: {}", name, format_distance(*distance)),
                }
            }
        },
        records => {
            for (name, distance, via) in &rows {
                let via = via
                    .map(|via| format!("\"{}\"", escape_quotes(via)))
                    .unwrap_or_else(|| "-".to_string());
                println!("D \"{}\" {} {}", escape_quotes(name), format_distance(*distance), via);
            }
        }
    );

    Ok(())
}
