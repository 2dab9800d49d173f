/*!
# Reversal

Builds a new graph with every edge direction flipped. The source graph is never modified and
the result shares no storage with it.
*/

use tracing::debug;

use super::*;

/// Provides the reverse (or transpose) of a graph.
pub trait Reverse: AdjacencyList {
    /// Creates a graph of type `GO` that contains the edge `(v, u)` for every occurrence of
    /// an edge `(u, v)` in `self`. Parallel edges stay parallel.
    ///
    /// Every vertex of `self` is a vertex of the result, even if it has no edges at all.
    fn reversed_as<GO>(&self) -> GO
    where
        GO: GraphEdgeEditing<Vertex = Self::Vertex> + GraphVertexEditing<Vertex = Self::Vertex>,
    {
        let mut reversed = GO::new();
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                reversed.add_edge(v.clone(), u.clone());
            }
            reversed.add_vertex(u.clone());
        }

        debug!(nodes = reversed.number_of_nodes(), "reversed graph");
        reversed
    }

    /// Creates the reverse of `self` as a graph of the same type.
    ///
    /// # Examples
    /// ```
    /// use genograph::{prelude::*, algo::*};
    ///
    /// let g: DirectedGraph<&str> = DirectedGraph::from_edges([("A", "B"), ("A", "C")]);
    /// let r = g.reversed();
    ///
    /// assert_eq!(r[&"B"], ["A"]);
    /// assert_eq!(r[&"C"], ["A"]);
    /// assert!(r[&"A"].is_empty());
    /// ```
    fn reversed(&self) -> Self
    where
        Self: GraphEdgeEditing + GraphVertexEditing,
    {
        self.reversed_as()
    }
}

impl<G> Reverse for G where G: AdjacencyList {}
