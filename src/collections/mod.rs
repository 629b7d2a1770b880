//! Supporting collections.
//!
//! - `search_tree`: arena-backed binary search tree

pub mod search_tree;

pub use search_tree::{InOrder, SearchTree};
