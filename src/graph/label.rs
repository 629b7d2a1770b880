//! Traversal-state labels carried by vertices and edges.
//!
//! Both label machines are one-way: a DFS moves a vertex from
//! `Unexplored` to `Visited`, and an edge from `Unexplored` to exactly one of
//! `Discovery` or `Back`. Only [`reset_labels`] goes back.
//!
//! [`reset_labels`]: crate::graph::AdjacencyMatrixGraph::reset_labels

use core::fmt;

/// Traversal state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexLabel {
    /// Not yet reached by a traversal.
    #[default]
    Unexplored,
    /// Reached by a traversal.
    Visited,
}

impl VertexLabel {
    /// Returns the label's display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unexplored => "UNEXPLORED",
            Self::Visited => "VISITED",
        }
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Traversal state of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeLabel {
    /// Not yet classified.
    #[default]
    Unexplored,
    /// Traversed into a previously unvisited vertex; part of the DFS forest.
    Discovery,
    /// Leads to an already visited vertex.
    Back,
}

impl EdgeLabel {
    /// Returns the label's display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unexplored => "UNEXPLORED",
            Self::Discovery => "DISCOVERY",
            Self::Back => "BACK",
        }
    }

    /// Single-letter tag used by the compact matrix rendering.
    pub(crate) const fn initial(self) -> char {
        match self {
            Self::Unexplored => 'U',
            Self::Discovery => 'D',
            Self::Back => 'B',
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_default_to_unexplored() {
        assert_eq!(VertexLabel::default(), VertexLabel::Unexplored);
        assert_eq!(EdgeLabel::default(), EdgeLabel::Unexplored);
    }

    #[test]
    fn labels_render_upper_case() {
        assert_eq!(VertexLabel::Visited.to_string(), "VISITED");
        assert_eq!(EdgeLabel::Discovery.to_string(), "DISCOVERY");
        assert_eq!(format!("{:>6}", EdgeLabel::Back), "  BACK");
    }
}
