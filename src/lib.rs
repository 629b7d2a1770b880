//! # `amgraph` - Adjacency-Matrix Graphs and Depth-First Search
//!
//! A small undirected graph toolkit: vertices and edges carrying traversal
//! labels, a graph backed by a dense adjacency matrix, and a depth-first search
//! that classifies edges and derives connectivity.
//!
//! ## Key Features
//!
//! - **Handle identity**: vertices and edges are named by `VertexId`/`EdgeId`
//!   handles; incidence and opposite checks compare handles, never values.
//! - **Validated construction**: malformed vertex or edge collections are
//!   rejected with a descriptive [`GraphError`] instead of producing a wrong
//!   matrix.
//! - **Immutable structure, mutable labels**: the matrix is built once; only
//!   traversal labels change afterwards.
//! - **Stack-safe DFS**: an explicit frame stack reproduces the recursive visit
//!   order without tying depth to the call stack.
//! - **Declarative input**: graphs load from JSON through [`GraphSpec`].
//!
//! ## Invariants
//!
//! - The vertex at position `i` has element `i`; elements are dense `0..N-1`.
//! - The matrix is symmetric with an empty diagonal.
//! - A depth-first search labels every vertex `Visited` exactly once and every
//!   edge `Discovery` or `Back` exactly once; the discovery edges form a forest
//!   with `N - components` edges.
//!
//! ## Example
//!
//! ```rust
//! use amgraph::{GraphBuilder, VertexLabel};
//!
//! let mut graph = GraphBuilder::with_vertices(3)
//!     .with_edges([(0, 1), (1, 2)])
//!     .build()?;
//!
//! let forest = graph.depth_first_search();
//! assert_eq!(forest.len(), 2);
//! assert!(forest.is_spanning_tree(graph.vertex_count()));
//! assert!(graph.vertices().iter().all(|v| v.label() == VertexLabel::Visited));
//! # Ok::<(), amgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::SearchTree;
pub use error::{GraphError, Result};
pub use graph::{
    depth_first_search, AdjacencyMatrixGraph, DfsForest, Edge, EdgeId, EdgeLabel, GraphBuilder, GraphSpec,
    Vertex, VertexId, VertexLabel,
};

// Compile-time assertions for handle layout.
const _: () = {
    use core::mem;

    // Handles are plain indices.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());

    // Matrix cells stay at most two words.
    assert!(mem::size_of::<Option<EdgeId>>() <= 2 * mem::size_of::<usize>());
};
