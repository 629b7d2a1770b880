//! Error types for graph construction, queries and graph-description loading.

use thiserror::Error;

/// Errors raised by graph construction and queries.
#[derive(Error, Debug)]
pub enum GraphError {
    /// `opposite` was called with a vertex that is not an endpoint of the edge.
    #[error("vertex {vertex} is not incident to edge {endpoints:?}")]
    NotIncident {
        /// Element of the offending vertex.
        vertex: usize,
        /// Element values of the edge's endpoints, in construction order.
        endpoints: (usize, usize),
    },

    /// Two vertices share the same element.
    #[error("duplicate vertex element {element}")]
    DuplicateElement {
        /// The repeated element.
        element: usize,
    },

    /// A vertex element falls outside `0..vertex_count`.
    #[error("vertex element {element} out of range for {vertex_count} vertices")]
    ElementOutOfRange {
        /// The offending element.
        element: usize,
        /// Number of vertices supplied.
        vertex_count: usize,
    },

    /// The vertex collection is not ordered by element.
    #[error("vertex at position {position} has element {element}; expected {position}")]
    MisplacedVertex {
        /// Position in the vertex collection.
        position: usize,
        /// Element found there.
        element: usize,
    },

    /// An edge names a vertex outside the vertex collection.
    #[error("edge {edge} references vertex {vertex}, but the graph has {vertex_count} vertices")]
    UnknownVertex {
        /// Index of the edge in the edge collection.
        edge: usize,
        /// The unknown vertex element.
        vertex: usize,
        /// Number of vertices supplied.
        vertex_count: usize,
    },

    /// An edge connects a vertex to itself.
    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Index of the edge in the edge collection.
        edge: usize,
        /// The vertex on both ends.
        vertex: usize,
    },

    /// The adjacency matrix for this many vertices cannot be allocated.
    #[error("adjacency matrix for {vertex_count} vertices does not fit in memory")]
    TooLarge {
        /// Number of vertices supplied.
        vertex_count: usize,
    },

    /// Reading a graph description failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A graph description is not valid JSON for [`GraphSpec`](crate::graph::GraphSpec).
    #[error("invalid graph description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
