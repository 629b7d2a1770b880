//! Vertices and their identity handles.

use core::fmt;

use super::label::VertexLabel;

/// Identity of a vertex within an [`AdjacencyMatrixGraph`](super::AdjacencyMatrixGraph).
///
/// Vertices are compared by handle, never by value. `VertexId(i)` names the
/// vertex whose element is `i`, which is also its row and column in the
/// adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Returns the dense index (the vertex's element).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph vertex: an integer element plus a traversal label.
///
/// Has no value equality; compare vertices through their [`VertexId`].
#[derive(Debug, Clone)]
pub struct Vertex {
    element: usize,
    label: VertexLabel,
}

impl Vertex {
    /// Creates an unexplored vertex.
    pub const fn new(element: usize) -> Self {
        Self {
            element,
            label: VertexLabel::Unexplored,
        }
    }

    /// Returns the vertex's element.
    #[inline]
    pub const fn element(&self) -> usize {
        self.element
    }

    /// Returns the handle naming this vertex.
    #[inline]
    pub const fn id(&self) -> VertexId {
        VertexId(self.element)
    }

    /// Returns the traversal label.
    #[inline]
    pub const fn label(&self) -> VertexLabel {
        self.label
    }

    /// Overwrites the traversal label.
    #[inline]
    pub fn set_label(&mut self, label: VertexLabel) {
        self.label = label;
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:2}, {})", self.element, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_label_round_trip() {
        let mut v = Vertex::new(4);
        assert_eq!(v.element(), 4);
        assert_eq!(v.id(), VertexId(4));
        assert_eq!(v.label(), VertexLabel::Unexplored);

        v.set_label(VertexLabel::Visited);
        assert_eq!(v.label(), VertexLabel::Visited);
        assert_eq!(v.to_string(), "( 4, VISITED)");
    }
}
