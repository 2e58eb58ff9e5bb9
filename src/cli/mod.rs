//! CLI argument parsing for graphwalk
//!
//! Uses clap for argument parsing.
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{ConvertArgs, GraphArgs, PathArgs, TraverseArgs};
pub use graphwalk_core::format::OutputFormat;
use parse::parse_output_format;

/// Graphwalk - traverse and search graph documents
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records (default from config, else human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ~/.config/graphwalk/config.toml)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency list of a graph document
    Show(GraphArgs),

    /// List vertices in depth-first order
    Dfs(TraverseArgs),

    /// List vertices in breadth-first order
    Bfs(TraverseArgs),

    /// Compute shortest paths with Dijkstra's algorithm
    Path(PathArgs),

    /// Re-encode a graph document (format chosen by extension)
    Convert(ConvertArgs),
}
