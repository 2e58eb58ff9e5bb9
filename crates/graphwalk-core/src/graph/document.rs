//! Serializable snapshot of a graph
//!
//! A document lists vertex payloads and index-based edges. Undirected
//! connections appear once; rebuilding goes through the mutation API so the
//! weighting and mirroring rules apply again.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::{GraphError, Result};
use crate::graph::adjacency::Graph;
use crate::graph::types::{GraphOptions, VertexId, Weight};

fn default_weight() -> f64 {
    Weight::DEFAULT.value()
}

/// Edge between two positions of `GraphDocument::vertices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphDocument<T> {
    /// Falls back to the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
    #[serde(default)]
    pub vertices: Vec<T>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl<T> GraphDocument<T> {
    /// Mode flags, filling unset ones from `defaults`
    pub fn options(&self, defaults: GraphOptions) -> GraphOptions {
        GraphOptions {
            weighted: self.weighted.unwrap_or(defaults.weighted),
            directed: self.directed.unwrap_or(defaults.directed),
        }
    }
}

impl<T> GraphDocument<T> {
    /// Build the graph for a document loaded from `path`.
    ///
    /// Bad edges are reported as `InvalidDocument` against the file.
    pub fn into_graph(self, path: &Path, defaults: GraphOptions) -> Result<Graph<T>> {
        Graph::from_document_with_defaults(self, defaults).map_err(|e| {
            GraphError::InvalidDocument {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })
    }
}

impl<T: Clone> Graph<T> {
    pub fn to_document(&self) -> GraphDocument<T> {
        let positions: HashMap<VertexId, usize> = self
            .vertex_ids()
            .enumerate()
            .map(|(position, id)| (id, position))
            .collect();
        let directed = self.is_directed();

        let mut edges = Vec::new();
        for (from, vertex) in self.vertices().enumerate() {
            let mut self_loops = 0usize;
            for edge in vertex.edges() {
                let Some(&to) = positions.get(&edge.end()) else {
                    continue;
                };
                let keep = if directed || from < to {
                    true
                } else if from == to {
                    // Undirected self-loops are stored twice on the same list
                    self_loops += 1;
                    self_loops % 2 == 1
                } else {
                    false
                };
                if keep {
                    edges.push(EdgeRecord {
                        from,
                        to,
                        weight: edge.weight().value(),
                    });
                }
            }
        }

        GraphDocument {
            weighted: Some(self.is_weighted()),
            directed: Some(directed),
            vertices: self.vertices().map(|vertex| vertex.data().clone()).collect(),
            edges,
        }
    }
}

impl<T> Graph<T> {
    pub fn from_document(document: GraphDocument<T>) -> Result<Self> {
        Self::from_document_with_defaults(document, GraphOptions::default())
    }

    /// Rebuild a graph, taking unset mode flags from `defaults`
    pub fn from_document_with_defaults(
        document: GraphDocument<T>,
        defaults: GraphOptions,
    ) -> Result<Self> {
        let mut graph = Graph::new(document.options(defaults));
        let ids: Vec<VertexId> = document
            .vertices
            .into_iter()
            .map(|data| graph.add_vertex(data))
            .collect();

        for record in &document.edges {
            let endpoint = |index: usize| {
                ids.get(index)
                    .copied()
                    .ok_or_else(|| GraphError::invalid_value("edge endpoint", index))
            };
            graph.add_edge(endpoint(record.from)?, endpoint(record.to)?, record.weight)?;
        }

        Ok(graph)
    }
}

/// On-disk encoding of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Pick the encoding from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => bail_unsupported!("document extension", other, "json, toml, yaml, yml"),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<GraphDocument<T>> {
        Ok(match self {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }

    pub fn render<T: Serialize>(self, document: &GraphDocument<T>) -> Result<String> {
        Ok(match self {
            DocumentFormat::Json => {
                let mut rendered = serde_json::to_string_pretty(document)?;
                rendered.push('\n');
                rendered
            }
            DocumentFormat::Toml => toml::to_string_pretty(document)?,
            DocumentFormat::Yaml => serde_yaml::to_string(document)?,
        })
    }
}

/// Load a document, choosing the decoder by extension
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<GraphDocument<T>> {
    let format = DocumentFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| GraphError::io_operation("read", path.display(), e))?;
    format
        .parse(&content)
        .map_err(|e| GraphError::InvalidDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Write a document, choosing the encoder by extension
pub fn write_document<T: Serialize>(path: &Path, document: &GraphDocument<T>) -> Result<()> {
    let format = DocumentFormat::from_path(path)?;
    let content = format.render(document)?;
    fs::write(path, content).map_err(|e| GraphError::io_operation("write", path.display(), e))
}
