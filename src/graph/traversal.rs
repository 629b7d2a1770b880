//! Depth-first search over an [`AdjacencyMatrixGraph`].
//!
//! The traversal labels every vertex `Visited` and every edge either
//! `Discovery` (it led to a new vertex) or `Back` (it led to a visited one).
//! It runs on an explicit frame stack of `(vertex, next incident position)`, so
//! depth is bounded by heap memory rather than the call stack, while the visit
//! and classification order match the textbook recursive formulation exactly.

use tracing::{debug, trace};

use crate::graph::edge::EdgeId;
use crate::graph::label::{EdgeLabel, VertexLabel};
use crate::graph::matrix::AdjacencyMatrixGraph;
use crate::graph::vertex::VertexId;

/// Result of a depth-first search: the discovery edges plus the shape of the
/// forest they form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfsForest {
    discovery: Vec<EdgeId>,
    preorder: Vec<VertexId>,
    /// Index into `preorder` where each tree begins.
    tree_starts: Vec<usize>,
}

impl DfsForest {
    /// Returns the discovery edges in the order they were first traversed.
    #[inline]
    pub fn discovery_edges(&self) -> &[EdgeId] {
        &self.discovery
    }

    /// Returns the number of discovery edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.discovery.len()
    }

    /// Returns `true` if no edge was discovered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.discovery.is_empty()
    }

    /// Returns the vertices visited by this run, in visit order.
    #[inline]
    pub fn preorder(&self) -> &[VertexId] {
        &self.preorder
    }

    /// Returns the start vertex of each tree.
    pub fn roots(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.tree_starts.iter().map(|&i| self.preorder[i])
    }

    /// Returns the number of trees started by the outer driver.
    #[inline]
    pub fn tree_count(&self) -> usize {
        self.tree_starts.len()
    }

    /// Returns the vertices of each tree, in visit order.
    pub fn trees(&self) -> impl Iterator<Item = &[VertexId]> + '_ {
        let ends = self
            .tree_starts
            .iter()
            .skip(1)
            .copied()
            .chain(core::iter::once(self.preorder.len()));
        self.tree_starts
            .iter()
            .zip(ends)
            .map(|(&start, end)| &self.preorder[start..end])
    }

    /// Returns `true` iff the discovery edges form a single spanning tree of a
    /// graph with `vertex_count` vertices.
    ///
    /// Graphs with zero or one vertex are connected. Only meaningful for a
    /// forest produced from a fully unexplored graph.
    #[inline]
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        vertex_count <= 1 || self.discovery.len() + 1 == vertex_count
    }

    /// Returns `true` iff every vertex of `graph` is an endpoint of some
    /// discovery edge, or the graph has exactly one vertex.
    ///
    /// This is a coverage check, not a connectivity test: a forest of several
    /// trees, each with two or more vertices, also passes it. Use
    /// [`is_spanning_tree`](Self::is_spanning_tree) to decide connectivity.
    pub fn touches_every_vertex(&self, graph: &AdjacencyMatrixGraph) -> bool {
        if graph.vertex_count() == 1 {
            return true;
        }
        let mut touched = vec![false; graph.vertex_count()];
        for &id in &self.discovery {
            let (u, v) = graph.edge(id).endpoints();
            touched[u] = true;
            touched[v] = true;
        }
        touched.into_iter().all(|t| t)
    }
}

impl AdjacencyMatrixGraph {
    /// Runs a depth-first search over every still-unexplored vertex, in vertex
    /// collection order, and returns the resulting forest.
    ///
    /// Labels are updated in place. A second run without
    /// [`reset_labels`](Self::reset_labels) finds nothing left to explore and
    /// returns an empty forest.
    ///
    /// # Panics
    /// Panics if an incidence list names an edge that is not incident to its
    /// vertex, which construction rules out.
    pub fn depth_first_search(&mut self) -> DfsForest {
        let mut forest = DfsForest::default();
        let mut stack: Vec<(VertexId, usize)> = Vec::new();

        for start in (0..self.vertex_count()).map(VertexId) {
            if self.vertex(start).label() != VertexLabel::Unexplored {
                continue;
            }
            debug!(root = start.index(), "starting DFS tree");
            forest.tree_starts.push(forest.preorder.len());
            self.visit(start, &mut forest);
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (v, pos) = *frame;
                let Some(&id) = self.incident_edges(v).get(pos) else {
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                let edge = self.edge(id);
                if edge.label() != EdgeLabel::Unexplored {
                    continue;
                }
                let w = edge
                    .opposite(v)
                    .unwrap_or_else(|err| panic!("corrupt incidence list for edge {}: {err}", id.index()));

                if self.vertex(w).label() == VertexLabel::Unexplored {
                    trace!(edge = id.index(), from = v.index(), to = w.index(), "discovery edge");
                    self.set_edge_label(id, EdgeLabel::Discovery);
                    forest.discovery.push(id);
                    self.visit(w, &mut forest);
                    stack.push((w, 0));
                } else {
                    trace!(edge = id.index(), from = v.index(), to = w.index(), "back edge");
                    self.set_edge_label(id, EdgeLabel::Back);
                }
            }
        }

        debug!(
            discovery = forest.len(),
            trees = forest.tree_count(),
            "depth-first search finished"
        );
        forest
    }

    fn visit(&mut self, v: VertexId, forest: &mut DfsForest) {
        self.set_vertex_label(v, VertexLabel::Visited);
        forest.preorder.push(v);
    }

    /// Resets all labels, runs a depth-first search and reports whether the
    /// graph is connected.
    pub fn is_connected(&mut self) -> bool {
        self.reset_labels();
        self.depth_first_search().is_spanning_tree(self.vertex_count())
    }

    /// Resets all labels, runs a depth-first search and returns the vertex set
    /// of each connected component, in visit order.
    pub fn connected_components(&mut self) -> Vec<Vec<VertexId>> {
        self.reset_labels();
        self.depth_first_search().trees().map(<[VertexId]>::to_vec).collect()
    }
}

/// Runs [`AdjacencyMatrixGraph::depth_first_search`] on `graph`.
pub fn depth_first_search(graph: &mut AdjacencyMatrixGraph) -> DfsForest {
    graph.depth_first_search()
}
