//! Output format handling for graphwalk
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented, one prefixed record per line

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Output format for graphwalk commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape double quotes for embedding in a quoted records field
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Render a distance for text output; unreachable vertices show `inf`
pub fn format_distance(distance: f64) -> String {
    if distance.is_finite() {
        distance.to_string()
    } else {
        "inf".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "records".parse::<OutputFormat>().unwrap(),
            OutputFormat::Records
        );
    }

    #[test]
    fn test_unknown_format() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown format: yaml (expected: human, json, or records)"
        );
    }

    #[test]
    fn test_display_round_trips() {
        for format in [OutputFormat::Human, OutputFormat::Json, OutputFormat::Records] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_quotes("plain"), "plain");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(7.0), "7");
        assert_eq!(format_distance(2.5), "2.5");
        assert_eq!(format_distance(f64::INFINITY), "inf");
    }
}
