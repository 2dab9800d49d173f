use fxhash::FxHashSet;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphNodeOrder {
    /// The vertex type of the graph
    type Vertex: Vertex;

    /// Returns the number of vertices with a key entry
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns an iterator over all vertices with a key entry, in order of creation
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Returns *true* if `u` has a key entry in the graph
    fn contains_vertex(&self, u: &Self::Vertex) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph. Parallel edges are counted individually.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read-only access to the neighborhoods of a graph.
///
/// This is everything a consumer such as a renderer needs: the vertex set and, for every
/// vertex, its ordered sequence of out-neighbors.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the (out-)neighbors of `u` in insertion order, including parallel entries.
    /// Unknown vertices have an empty neighborhood.
    fn neighbors_of(&self, u: &Self::Vertex) -> &[Self::Vertex];

    /// Returns the number of outgoing edges of `u`
    fn degree_of(&self, u: &Self::Vertex) -> NumNodes {
        self.neighbors_of(u).len()
    }

    /// Returns an iterator over the outgoing edges of `u`
    fn edges_of<'a>(
        &'a self,
        u: &'a Self::Vertex,
    ) -> impl Iterator<Item = Edge<Self::Vertex>> + 'a {
        self.neighbors_of(u)
            .iter()
            .map(move |v| Edge(u.clone(), v.clone()))
    }

    /// Returns an iterator over all edges in the graph, one item per occurrence
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Vertex>> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }

    /// Returns the union of all key entries and all vertices appearing in any neighborhood.
    ///
    /// For graphs that register edge targets as keys this equals the key set, but it is
    /// computed independently of that invariant.
    fn all_nodes(&self) -> FxHashSet<Self::Vertex> {
        self.vertices()
            .chain(self.vertices().flat_map(|u| self.neighbors_of(u)))
            .cloned()
            .collect()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: AdjacencyList {
    /// Returns *true* if at least one edge `(u, v)` exists in the graph
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.neighbors_of(u).contains(v)
    }
}

impl<G: AdjacencyList> AdjacencyTest for G {}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph without any vertices
    fn new() -> Self;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphNodeOrder {
    /// Registers `u` as a vertex with an empty neighborhood.
    /// Returns *true* exactly if `u` was not present before; otherwise nothing changes.
    fn add_vertex(&mut self, u: Self::Vertex) -> bool;

    /// Removes `u` together with every edge into or out of `u`.
    /// Returns *true* if `u` was present; otherwise this is a no-op.
    fn remove_vertex(&mut self, u: &Self::Vertex) -> bool;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder {
    /// Appends `v` to the neighborhood of `u`. Both endpoints become vertices if they were not.
    /// Parallel edges are allowed: adding an existing edge again creates a second occurrence.
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex);

    /// Adds the edge `(u, v)` unless it is already present.
    /// Returns *true* exactly if the edge was present previously (and thus not added again).
    fn try_add_edge(&mut self, u: Self::Vertex, v: Self::Vertex) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge<Self::Vertex>>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes one occurrence of the edge `(u, v)`, i.e. the edge FROM u TO v.
    /// If parallel edges exist, only the first occurrence is removed.
    /// Returns *true* if an edge was removed and *false* if none existed.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> bool;
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch {
    /// Type of the endpoints of the provided edges
    type FromVertex: Vertex;

    /// Create a graph from an iterator over edges
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge<Self::FromVertex>>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    type FromVertex = G::Vertex;

    fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge<Self::FromVertex>>>) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }
}
