use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::DocumentFormat;
use std::path::PathBuf;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Accept only paths whose extension names a supported document format
pub fn parse_document_path(s: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(s);
    DocumentFormat::from_path(&path).map_err(|e| e.to_string())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_path_accepts_known_extensions() {
        for name in ["g.json", "g.toml", "g.yaml", "g.YML"] {
            assert!(parse_document_path(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_parse_document_path_rejects_unknown_extension() {
        let err = parse_document_path("graph.txt").unwrap_err();
        assert!(err.contains("unsupported document extension"));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
        assert!(parse_output_format("xml").is_err());
    }
}
