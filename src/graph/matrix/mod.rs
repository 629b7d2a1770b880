//! Adjacency-matrix graph representation.
//!
//! This module is vertically split:
//! - `builder`: incremental construction of vertex/edge collections
//! - `display`: console rendering of the matrix
//! - `tests`: module-local tests
//!
//! The matrix is filled once at construction and never resized. Vertex and edge
//! labels stay mutable so traversals can record their state in place.

use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::edge::{Edge, EdgeId};
use crate::graph::label::{EdgeLabel, VertexLabel};
use crate::graph::vertex::{Vertex, VertexId};

mod builder;
mod display;

pub use builder::GraphBuilder;
pub use display::MatrixDisplay;

/// An undirected graph backed by an `N×N` adjacency matrix.
///
/// Cell `[u][v]` holds the handle of the edge joining the vertices with
/// elements `u` and `v`, or `None`. The matrix is symmetric and its diagonal is
/// always empty.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n^2 + m)\) | Allocates the matrix, one pass over edges |
/// | `get_edge` | \(O(1)\) | Direct matrix lookup |
/// | `incident_edges` | \(O(1)\) | Precomputed, edge-collection order |
/// | `reset_labels` | \(O(n + m)\) | |
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    /// Row-major `n * n` cells.
    matrix: Vec<Option<EdgeId>>,
    /// Incident edge handles per vertex, in edge-collection order.
    incidence: Vec<Vec<EdgeId>>,
}

impl AdjacencyMatrixGraph {
    /// Builds the graph and its adjacency matrix.
    ///
    /// `vertices[i]` must carry element `i`. Every edge must join two distinct
    /// vertices of the collection. When several edges join the same pair, the
    /// matrix cell holds the first of them in collection order.
    ///
    /// # Errors
    /// Returns [`GraphError::ElementOutOfRange`], [`GraphError::DuplicateElement`]
    /// or [`GraphError::MisplacedVertex`] for a malformed vertex collection, and
    /// [`GraphError::UnknownVertex`] or [`GraphError::SelfLoop`] for a malformed
    /// edge. Returns [`GraphError::TooLarge`] when the `n * n` matrix cannot be
    /// allocated.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self> {
        let n = vertices.len();
        validate_vertices(&vertices)?;

        let mut matrix = allocate_matrix(n)?;
        let mut incidence = vec![Vec::new(); n];

        for (k, edge) in edges.iter().enumerate() {
            let (u, v) = edge.endpoints();
            for w in [u, v] {
                if w >= n {
                    return Err(GraphError::UnknownVertex {
                        edge: k,
                        vertex: w,
                        vertex_count: n,
                    });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { edge: k, vertex: u });
            }

            let id = EdgeId(k);
            if matrix[u * n + v].is_none() {
                matrix[u * n + v] = Some(id);
                matrix[v * n + u] = Some(id);
            } else {
                warn!(edge = k, u, v, "parallel edge shadowed in adjacency matrix");
            }
            incidence[u].push(id);
            incidence[v].push(id);
        }

        debug!(vertices = n, edges = edges.len(), "built adjacency matrix graph");

        Ok(Self {
            vertices,
            edges,
            matrix,
            incidence,
        })
    }

    /// Returns the vertex collection.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the edge collection.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertex named by `id`.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Returns the edge named by `id`.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Returns the raw matrix cell `[row][col]`.
    ///
    /// # Panics
    /// Panics if `row` or `col` are out of bounds.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<EdgeId> {
        let n = self.vertex_count();
        assert!(row < n && col < n, "cell ({row}, {col}) out of bounds for n={n}");
        self.matrix[row * n + col]
    }

    /// Returns the edge joining `v1` and `v2`, if any.
    ///
    /// Always `None` when `v1 == v2` or when either vertex is not in the graph.
    #[inline]
    pub fn get_edge(&self, v1: VertexId, v2: VertexId) -> Option<EdgeId> {
        let n = self.vertex_count();
        let (row, col) = (v1.index(), v2.index());
        if row >= n || col >= n {
            return None;
        }
        self.matrix[row * n + col]
    }

    /// Returns `true` iff an edge joins `v1` and `v2`.
    #[inline]
    pub fn are_adjacent(&self, v1: VertexId, v2: VertexId) -> bool {
        self.get_edge(v1, v2).is_some()
    }

    /// Returns the edges incident to `vertex`, in edge-collection order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex.index()]
    }

    /// Returns the number of edges incident to `vertex`.
    #[inline]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.incident_edges(vertex).len()
    }

    /// Overwrites the label of vertex `id`.
    #[inline]
    pub fn set_vertex_label(&mut self, id: VertexId, label: VertexLabel) {
        self.vertices[id.index()].set_label(label);
    }

    /// Overwrites the label of edge `id`.
    #[inline]
    pub fn set_edge_label(&mut self, id: EdgeId, label: EdgeLabel) {
        self.edges[id.index()].set_label(label);
    }

    /// Returns every vertex and edge to the unexplored state.
    pub fn reset_labels(&mut self) {
        for v in &mut self.vertices {
            v.set_label(VertexLabel::Unexplored);
        }
        for e in &mut self.edges {
            e.set_label(EdgeLabel::Unexplored);
        }
    }

    /// Returns a [`Display`](core::fmt::Display) adapter that renders the matrix.
    ///
    /// The alternate flag (`{:#}`) appends each edge's label initial.
    pub fn display_matrix(&self) -> MatrixDisplay<'_> {
        MatrixDisplay::new(self)
    }
}

/// Allocates the empty `n * n` matrix without aborting on exhaustion.
fn allocate_matrix(n: usize) -> Result<Vec<Option<EdgeId>>> {
    let too_large = || GraphError::TooLarge { vertex_count: n };
    let cells = n.checked_mul(n).ok_or_else(too_large)?;
    let mut matrix = Vec::new();
    matrix.try_reserve_exact(cells).map_err(|_| too_large())?;
    matrix.resize(cells, None);
    Ok(matrix)
}

fn validate_vertices(vertices: &[Vertex]) -> Result<()> {
    let n = vertices.len();
    let mut seen = vec![false; n];
    for (position, vertex) in vertices.iter().enumerate() {
        let element = vertex.element();
        if element >= n {
            return Err(GraphError::ElementOutOfRange {
                element,
                vertex_count: n,
            });
        }
        if seen[element] {
            return Err(GraphError::DuplicateElement { element });
        }
        seen[element] = true;
        if element != position {
            return Err(GraphError::MisplacedVertex { position, element });
        }
    }
    Ok(())
}
