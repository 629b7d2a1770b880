//! Undirected edges and their identity handles.

use core::fmt;

use super::label::EdgeLabel;
use super::vertex::VertexId;
use crate::error::{GraphError, Result};

/// Identity of an edge: its position in the graph's edge collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl EdgeId {
    /// Returns the position in the edge collection.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// An undirected edge between two vertices.
///
/// The endpoint order is kept for display only; adjacency ignores it. Parallel
/// edges are told apart by their [`EdgeId`], so `Edge` has no value equality.
#[derive(Debug, Clone)]
pub struct Edge {
    origin: VertexId,
    destination: VertexId,
    label: EdgeLabel,
}

impl Edge {
    /// Creates an unexplored edge between `origin` and `destination`.
    pub const fn new(origin: VertexId, destination: VertexId) -> Self {
        Self {
            origin,
            destination,
            label: EdgeLabel::Unexplored,
        }
    }

    /// Returns the origin handle.
    #[inline]
    pub const fn origin(&self) -> VertexId {
        self.origin
    }

    /// Returns the destination handle.
    #[inline]
    pub const fn destination(&self) -> VertexId {
        self.destination
    }

    /// Returns the endpoint elements in construction order.
    #[inline]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.origin.index(), self.destination.index())
    }

    /// Returns `true` iff `vertex` is one of this edge's endpoints.
    #[inline]
    pub fn is_incident(&self, vertex: VertexId) -> bool {
        vertex == self.origin || vertex == self.destination
    }

    /// Returns `true` iff this edge joins `a` and `b`, in either order.
    #[inline]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.origin == a && self.destination == b) || (self.origin == b && self.destination == a)
    }

    /// Returns the endpoint on the other side of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::NotIncident`] if `vertex` is not an endpoint.
    pub fn opposite(&self, vertex: VertexId) -> Result<VertexId> {
        if vertex == self.origin {
            Ok(self.destination)
        } else if vertex == self.destination {
            Ok(self.origin)
        } else {
            Err(GraphError::NotIncident {
                vertex: vertex.index(),
                endpoints: self.endpoints(),
            })
        }
    }

    /// Returns the traversal label.
    #[inline]
    pub const fn label(&self) -> EdgeLabel {
        self.label
    }

    /// Overwrites the traversal label.
    #[inline]
    pub fn set_label(&mut self, label: EdgeLabel) {
        self.label = label;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (u, v) = self.endpoints();
        write!(f, "({u:2}, {v:2}, {})", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_returns_other_endpoint() {
        let e = Edge::new(VertexId(2), VertexId(5));
        assert_eq!(e.opposite(VertexId(2)).unwrap(), VertexId(5));
        assert_eq!(e.opposite(VertexId(5)).unwrap(), VertexId(2));
    }

    #[test]
    fn opposite_rejects_non_incident_vertex() {
        let e = Edge::new(VertexId(0), VertexId(1));
        let err = e.opposite(VertexId(7)).unwrap_err();
        assert!(matches!(
            err,
            GraphError::NotIncident {
                vertex: 7,
                endpoints: (0, 1)
            }
        ));
        assert_eq!(err.to_string(), "vertex 7 is not incident to edge (0, 1)");
    }

    #[test]
    fn incidence_and_endpoints() {
        let e = Edge::new(VertexId(3), VertexId(1));
        assert_eq!(e.endpoints(), (3, 1));
        assert!(e.is_incident(VertexId(3)));
        assert!(e.is_incident(VertexId(1)));
        assert!(!e.is_incident(VertexId(2)));
        assert!(e.connects(VertexId(1), VertexId(3)));
        assert!(!e.connects(VertexId(1), VertexId(2)));
    }

    #[test]
    fn display_shows_endpoints_and_label() {
        let mut e = Edge::new(VertexId(0), VertexId(11));
        assert_eq!(e.to_string(), "( 0, 11, UNEXPLORED)");
        e.set_label(EdgeLabel::Back);
        assert_eq!(e.to_string(), "( 0, 11, BACK)");
    }
}
