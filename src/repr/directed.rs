/*!
# Directed Graph Representation

[`DirectedGraph`] stores, for every vertex, the ordered sequence of its out-neighbors.
Vertices are kept in an insertion-ordered map, so [`DirectedGraph::keys`] and
[`DirectedGraph::values`] enumerate vertices in the order they were first referenced.

## Invariants
- Every vertex referenced by an edge is a key: adding `(u, v)` registers both `u` and `v`.
- Removing a vertex removes every occurrence of it from all other neighborhoods.
- The edge counter always equals the total length of all neighborhoods.

## Indexing
`graph[&u]` returns the neighborhood of `u` as a slice. Unknown vertices yield an empty slice:
indexing never panics and never creates a vertex. Use [`DirectedGraph::set_neighbors`] to
replace a neighborhood wholesale.
*/

use std::ops::Index;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use tracing::trace;

use crate::testing::test_graph_ops;

use super::*;

/// A directed adjacency-list graph over arbitrary vertices.
///
/// # Examples
/// ```
/// use genograph::prelude::*;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("A", "C");
///
/// assert_eq!(graph[&"A"], ["B", "C"]);
/// assert!(graph[&"B"].is_empty());
/// assert_eq!(graph.keys().copied().collect::<Vec<_>>(), ["A", "B", "C"]);
/// ```
#[derive(Clone)]
pub struct DirectedGraph<V>
where
    V: Vertex,
{
    out_nbs: IndexMap<V, Neighborhood<V>, FxBuildHasher>,
    num_edges: NumEdges,
}

impl<V: Vertex> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self {
            out_nbs: IndexMap::default(),
            num_edges: 0,
        }
    }
}

impl<V: Vertex + Debug> Debug for DirectedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.out_nbs.iter()).finish()
    }
}

/// Two graphs are equal if they have the same vertices and every vertex has the same
/// neighborhood (including order and parallel entries). The order of vertices is ignored.
impl<V: Vertex> PartialEq for DirectedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.num_edges == other.num_edges && self.out_nbs == other.out_nbs
    }
}

impl<V: Vertex> Eq for DirectedGraph<V> {}

impl<V: Vertex> DirectedGraph<V> {
    /// Returns the position of `u`, creating `u` with an empty neighborhood if absent.
    /// Every mutation goes through here so that referenced vertices are always keys.
    fn ensure_vertex(&mut self, u: V) -> usize {
        let entry = self.out_nbs.entry(u);
        let index = entry.index();
        entry.or_default();
        index
    }

    /// Returns the neighborhood of `u` or `None` if `u` is not a vertex
    pub fn get(&self, u: &V) -> Option<&[V]> {
        self.out_nbs.get(u).map(Neighborhood::as_slice)
    }

    /// Returns the neighborhood of `u` or `default` if `u` is not a vertex
    pub fn get_or<'a>(&'a self, u: &V, default: &'a [V]) -> &'a [V] {
        self.get(u).unwrap_or(default)
    }

    /// Returns an iterator over all vertices in order of creation
    pub fn keys(&self) -> impl Iterator<Item = &V> + '_ {
        self.out_nbs.keys()
    }

    /// Returns an iterator over all neighborhoods, in the same order as [`DirectedGraph::keys`]
    pub fn values(&self) -> impl Iterator<Item = &[V]> + '_ {
        self.out_nbs.values().map(Neighborhood::as_slice)
    }

    /// Returns an iterator over `(vertex, neighborhood)` pairs in order of creation
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.out_nbs.iter().map(|(u, nbs)| (u, nbs.as_slice()))
    }

    /// Replaces the neighborhood of `u` with `neighbors`, creating `u` if absent.
    ///
    /// Every vertex in `neighbors` is registered as well, so the key set stays equal
    /// to [`AdjacencyList::all_nodes`].
    pub fn set_neighbors<I>(&mut self, u: V, neighbors: I)
    where
        I: IntoIterator<Item = V>,
    {
        let index = self.ensure_vertex(u);
        let neighbors: Neighborhood<V> = neighbors.into_iter().collect();
        for v in neighbors.neighbors() {
            self.ensure_vertex(v.clone());
        }

        let new_len = neighbors.num_of_neighbors();
        let old_len = std::mem::replace(&mut self.out_nbs[index], neighbors).num_of_neighbors();
        self.num_edges = self.num_edges - old_len + new_len;
    }

    /// Adds the edge `(u, v)` if both endpoints are given.
    /// A missing endpoint makes this a silent no-op.
    ///
    /// Returns *true* exactly if an edge was added.
    pub fn add_optional_edge(&mut self, u: Option<V>, v: Option<V>) -> bool {
        match (u, v) {
            (Some(u), Some(v)) => {
                self.add_edge(u, v);
                true
            }
            _ => false,
        }
    }
}

impl<V: Vertex> Index<&V> for DirectedGraph<V> {
    type Output = [V];

    fn index(&self, u: &V) -> &Self::Output {
        self.get_or(u, &[])
    }
}

impl<V: Vertex> GraphNodeOrder for DirectedGraph<V> {
    type Vertex = V;

    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.out_nbs.keys()
    }

    fn contains_vertex(&self, u: &V) -> bool {
        self.out_nbs.contains_key(u)
    }
}

impl<V: Vertex> GraphEdgeOrder for DirectedGraph<V> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<V: Vertex> AdjacencyList for DirectedGraph<V> {
    fn neighbors_of(&self, u: &V) -> &[V] {
        self.get_or(u, &[])
    }
}

impl<V: Vertex> GraphNew for DirectedGraph<V> {
    fn new() -> Self {
        Self::default()
    }
}

impl<V: Vertex> GraphVertexEditing for DirectedGraph<V> {
    fn add_vertex(&mut self, u: V) -> bool {
        let num_nodes = self.out_nbs.len();
        self.ensure_vertex(u);
        self.out_nbs.len() > num_nodes
    }

    fn remove_vertex(&mut self, u: &V) -> bool {
        let Some(nbs) = self.out_nbs.shift_remove(u) else {
            return false;
        };
        self.num_edges -= nbs.num_of_neighbors();

        let mut num_incoming = 0;
        for nbs in self.out_nbs.values_mut() {
            num_incoming += nbs.remove_neighbors_if(|v| v == u);
        }
        self.num_edges -= num_incoming;

        trace!(
            out_degree = nbs.num_of_neighbors(),
            in_degree = num_incoming,
            "removed vertex"
        );
        true
    }
}

impl<V: Vertex> GraphEdgeEditing for DirectedGraph<V> {
    fn add_edge(&mut self, u: V, v: V) {
        let index = self.ensure_vertex(u);
        self.ensure_vertex(v.clone());
        self.out_nbs[index].add_neighbor(v);
        self.num_edges += 1;
    }

    fn try_add_edge(&mut self, u: V, v: V) -> bool {
        let index = self.ensure_vertex(u);
        self.ensure_vertex(v.clone());
        if self.out_nbs[index].try_add_neighbor(v) {
            true
        } else {
            self.num_edges += 1;
            false
        }
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        let removed = self
            .out_nbs
            .get_mut(u)
            .is_some_and(|nbs| nbs.try_remove_neighbor(v));
        if removed {
            self.num_edges -= 1;
        }
        removed
    }
}

impl<V: Vertex> Extend<Edge<V>> for DirectedGraph<V> {
    fn extend<I: IntoIterator<Item = Edge<V>>>(&mut self, iter: I) {
        self.add_edges(iter);
    }
}

impl<V: Vertex> FromIterator<Edge<V>> for DirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}


// ---------- Testing ----------

test_graph_ops!(
    test_u32_vertices,
    u32,
    |u: u32| u,
    (
        GraphVertexEditing,
        GraphEdgeEditing,
        Traversal,
        Reverse,
        GenealogicalSubgraph
    )
);

test_graph_ops!(
    test_string_vertices,
    String,
    |u: u32| format!("v{u}"),
    (
        GraphVertexEditing,
        GraphEdgeEditing,
        Traversal,
        Reverse,
        GenealogicalSubgraph
    )
);
