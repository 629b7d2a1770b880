//! Declarative graph descriptions.
//!
//! A [`GraphSpec`] names a vertex count and a list of endpoint pairs, which is
//! all an [`AdjacencyMatrixGraph`] needs. It deserializes from JSON:
//!
//! ```json
//! { "vertices": 3, "edges": [[0, 1], [1, 2]] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::matrix::{AdjacencyMatrixGraph, GraphBuilder};

/// Vertex count plus undirected edge endpoint pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSpec {
    /// Number of vertices; their elements are `0..vertices`.
    pub vertices: usize,
    /// Edge endpoints by element, in edge-collection order.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
}

impl GraphSpec {
    /// Creates a description from a vertex count and endpoint pairs.
    pub fn new(vertices: usize, edges: impl Into<Vec<(usize, usize)>>) -> Self {
        Self {
            vertices,
            edges: edges.into(),
        }
    }

    /// The 13-vertex, 16-edge connected sample graph.
    pub fn sample() -> Self {
        Self::new(
            13,
            [
                (0, 1),
                (0, 2),
                (0, 5),
                (0, 6),
                (3, 4),
                (3, 5),
                (4, 5),
                (4, 6),
                (4, 11),
                (6, 7),
                (7, 8),
                (7, 9),
                (9, 10),
                (9, 11),
                (9, 12),
                (11, 12),
            ],
        )
    }

    /// Parses a JSON description.
    ///
    /// # Errors
    /// Returns [`GraphError::Json`](crate::GraphError::Json) on malformed input.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON description from `path`.
    ///
    /// # Errors
    /// Returns [`GraphError::Io`](crate::GraphError::Io) if the file cannot be
    /// read and [`GraphError::Json`](crate::GraphError::Json) if it does not
    /// parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the description as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`GraphError::Json`](crate::GraphError::Json) if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the graph this description names.
    ///
    /// # Errors
    /// See [`AdjacencyMatrixGraph::new`].
    pub fn build(&self) -> Result<AdjacencyMatrixGraph> {
        GraphBuilder::with_vertices(self.vertices)
            .with_edges(self.edges.iter().copied())
            .build()
    }
}

impl From<&AdjacencyMatrixGraph> for GraphSpec {
    fn from(graph: &AdjacencyMatrixGraph) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edges().iter().map(|e| e.endpoints()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    #[test]
    fn parses_pairs_from_json() {
        let spec = GraphSpec::from_json_str(r#"{ "vertices": 3, "edges": [[0, 1], [1, 2]] }"#).unwrap();
        assert_eq!(spec, GraphSpec::new(3, [(0, 1), (1, 2)]));
    }

    #[test]
    fn edges_default_to_empty() {
        let spec = GraphSpec::from_json_str(r#"{ "vertices": 2 }"#).unwrap();
        assert!(spec.edges.is_empty());
        assert_eq!(spec.build().unwrap().edge_count(), 0);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = GraphSpec::from_json_str(r#"{ "vertices": 2, "weights": [] }"#).unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GraphSpec::from_path("/nonexistent/amgraph/graph.json").unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn graph_converts_back_to_description() {
        let spec = GraphSpec::sample();
        let graph = spec.build().unwrap();
        assert_eq!(GraphSpec::from(&graph), spec);
        assert_eq!(GraphSpec::from_json_str(&spec.to_json_string().unwrap()).unwrap(), spec);
    }

    #[test]
    fn build_reports_bad_endpoints() {
        let err = GraphSpec::new(2, [(0, 2)]).build().unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex { vertex: 2, .. }));
    }
}
