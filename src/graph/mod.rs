//! Undirected graphs backed by an adjacency matrix, and their traversals.
//!
//! - `vertex`, `edge`, `label`: the elements a graph is built from
//! - `matrix`: the adjacency-matrix representation and its builder
//! - `traversal`: depth-first search and connectivity
//! - `description`: serializable graph descriptions

pub mod description;
pub mod edge;
pub mod label;
pub mod matrix;
pub mod traversal;
pub mod vertex;

pub use description::GraphSpec;
pub use edge::{Edge, EdgeId};
pub use label::{EdgeLabel, VertexLabel};
pub use matrix::{AdjacencyMatrixGraph, GraphBuilder, MatrixDisplay};
pub use traversal::{depth_first_search, DfsForest};
pub use vertex::{Vertex, VertexId};
