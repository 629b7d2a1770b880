//! Incremental construction of an [`AdjacencyMatrixGraph`].

use super::AdjacencyMatrixGraph;
use crate::error::Result;
use crate::graph::edge::{Edge, EdgeId};
use crate::graph::vertex::{Vertex, VertexId};

/// Collects vertices and edges, then builds the matrix once.
///
/// Vertices get consecutive elements, so the vertex collection is dense by
/// construction. Edge endpoints are only checked by [`build`](Self::build).
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding vertices `0..vertex_count`.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            vertices: (0..vertex_count).map(Vertex::new).collect(),
            edges: Vec::new(),
        }
    }

    /// Appends a vertex and returns its handle.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(id.index()));
        id
    }

    /// Appends an edge between `u` and `v` and returns its handle.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(u, v));
        id
    }

    /// Appends one edge per `(u, v)` element pair.
    #[must_use]
    pub fn with_edges<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (u, v) in pairs {
            self.add_edge(VertexId(u), VertexId(v));
        }
        self
    }

    /// Returns the number of vertices added so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Validates the collections and builds the graph.
    ///
    /// # Errors
    /// See [`AdjacencyMatrixGraph::new`].
    pub fn build(self) -> Result<AdjacencyMatrixGraph> {
        AdjacencyMatrixGraph::new(self.vertices, self.edges)
    }
}
