use super::parse::parse_document_path;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (.json, .toml, .yaml)
    #[arg(value_name = "FILE", value_parser = parse_document_path)]
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Graph document (.json, .toml, .yaml)
    #[arg(value_name = "FILE", value_parser = parse_document_path)]
    pub file: PathBuf,

    /// Payload of the start vertex (default: first vertex)
    #[arg(long, short)]
    pub start: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Graph document (.json, .toml, .yaml)
    #[arg(value_name = "FILE", value_parser = parse_document_path)]
    pub file: PathBuf,

    /// Payload of the source vertex (default: first vertex)
    #[arg(long, short)]
    pub from: Option<String>,

    /// Only report the path to this vertex
    #[arg(long, short)]
    pub to: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Source graph document
    #[arg(value_name = "FILE", value_parser = parse_document_path)]
    pub file: PathBuf,

    /// Destination document; format follows its extension
    #[arg(long, short, value_parser = parse_document_path)]
    pub output: PathBuf,

    /// Override the weighted flag
    #[arg(long)]
    pub weighted: Option<bool>,

    /// Override the directed flag
    #[arg(long)]
    pub directed: Option<bool>,
}
