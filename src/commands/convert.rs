//! `graphwalk convert` command

use crate::cli::ConvertArgs;
use crate::commands::context::CommandContext;
use graphwalk_core::error::Result;
use graphwalk_core::format::escape_quotes;
use graphwalk_core::graph::{read_document, write_document, GraphDocument, GraphOptions};

pub fn execute(ctx: &CommandContext, args: &ConvertArgs) -> Result<()> {
    let mut document: GraphDocument<String> = read_document(&args.file)?;

    let resolved = document.options(ctx.config.graph);
    let options = GraphOptions::new(
        args.weighted.unwrap_or(resolved.weighted),
        args.directed.unwrap_or(resolved.directed),
    );
    document.weighted = Some(options.weighted);
    document.directed = Some(options.directed);

    let graph = document.into_graph(&args.file, ctx.config.graph)?;
    write_document(&args.output, &graph.to_document())?;

    tracing::debug!(
        from = %args.file.display(),
        to = %args.output.display(),
        mode = options.describe(),
        "convert"
    );

    crate::output_by_format!(ctx.format(),
        json => {
            let output = serde_json::json!({
                "output": args.output.display().to_string(),
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "weighted": options.weighted,
                "directed": options.directed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            if !ctx.cli.quiet {
                println!(
                    "wrote {} ({} vertices, {} edges, {})",
                    args.output.display(),
                    graph.vertex_count(),
                    graph.edge_count(),
                    options.describe()
                );
            }
        },
        records => {
            println!(
                "W \"{}\" vertices={} edges={}",
                escape_quotes(&args.output.display().to_string()),
                graph.vertex_count(),
                graph.edge_count()
            );
        }
    );

    Ok(())
}
