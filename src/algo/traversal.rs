/*!
Iterative depth-first traversal.

The search never recurses: it keeps an explicit stack of cursors, one per currently open
vertex, each pointing into that vertex's neighborhood. The traversal depth is therefore only
bounded by available memory, not by the call stack.

This module provides:
- [`DepthFirstSearch`], a lazy iterator yielding vertices in discovery order.
- The [`Traversal`] trait exposing the search (and reachability queries derived from it)
  directly as methods on graph data structures.
*/

use super::*;

/// Position within the neighborhood of a single open vertex.
#[derive(Debug, Clone)]
struct Cursor<'a, V> {
    neighbors: &'a [V],
    position: usize,
}

impl<'a, V> Cursor<'a, V> {
    fn new(neighbors: &'a [V]) -> Self {
        Self {
            neighbors,
            position: 0,
        }
    }

    /// Returns the next neighbor in sequence and advances past it
    fn next_neighbor(&mut self) -> Option<&'a V> {
        let v = self.neighbors.get(self.position)?;
        self.position += 1;
        Some(v)
    }
}

/// Depth-first search iterator over the vertices reachable from a start vertex.
///
/// The first item is the start vertex itself; every other vertex is yielded exactly once,
/// at the moment it is discovered. If the start vertex is not part of the graph, the
/// iterator is empty.
///
/// Vertices that occur in a neighborhood without having a key entry of their own are
/// treated as having no neighbors.
pub struct DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    discovered: FxHashSet<G::Vertex>,
    stack: Vec<Cursor<'a, G::Vertex>>,
    start: Option<G::Vertex>,
}

impl<'a, G> DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new search starting from `start`.
    pub fn new(graph: &'a G, start: &G::Vertex) -> Self {
        let mut search = Self {
            graph,
            discovered: FxHashSet::default(),
            stack: Vec::new(),
            start: None,
        };

        if graph.contains_vertex(start) {
            search.discovered.insert(start.clone());
            search.stack.push(Cursor::new(graph.neighbors_of(start)));
            search.start = Some(start.clone());
        }

        search
    }

    /// Returns all vertices discovered so far
    pub fn discovered(&self) -> &FxHashSet<G::Vertex> {
        &self.discovered
    }

    /// Runs the search to completion and returns the set of all discovered vertices,
    /// i.e. every vertex reachable from the start vertex (including itself).
    pub fn into_discovered(mut self) -> FxHashSet<G::Vertex> {
        self.by_ref().for_each(drop);
        self.discovered
    }
}

impl<G> Iterator for DepthFirstSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }

        loop {
            match self.stack.last_mut()?.next_neighbor() {
                Some(w) => {
                    if !self.discovered.contains(w) {
                        self.discovered.insert(w.clone());
                        self.stack.push(Cursor::new(self.graph.neighbors_of(w)));
                        return Some(w.clone());
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Provides traversal-based reachability queries on graphs.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use genograph::{prelude::*, algo::*};
    ///
    /// let g: DirectedGraph<u32> = DirectedGraph::from_edges([(0, 1), (0, 2), (1, 3)]);
    ///
    /// let order: Vec<_> = g.dfs(&0).collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// ```
    fn dfs(&self, start: &Self::Vertex) -> DepthFirstSearch<'_, Self> {
        DepthFirstSearch::new(self, start)
    }

    /// Returns the set of all vertices reachable from `start`, including `start` itself.
    /// If `start` is not a vertex of the graph, the set is empty.
    ///
    /// # Examples
    /// ```
    /// use genograph::{prelude::*, algo::*};
    ///
    /// let g: DirectedGraph<&str> = DirectedGraph::from_edges([("A", "B"), ("C", "A")]);
    ///
    /// assert_eq!(g.reachable(&"A").len(), 2);
    /// assert!(g.reachable(&"Z").is_empty());
    /// ```
    fn reachable(&self, start: &Self::Vertex) -> FxHashSet<Self::Vertex> {
        self.dfs(start).into_discovered()
    }

    /// Returns *true* if there is a directed path from `start` to `target`.
    /// Every vertex of the graph can reach itself.
    fn is_reachable(&self, start: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.dfs(start).any(|v| v == *target)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;

    fn family() -> DirectedGraph<&'static str> {
        let mut graph = DirectedGraph::new();
        graph.set_neighbors("A", ["B", "C"]);
        graph.set_neighbors("B", ["D", "E"]);
        graph.set_neighbors("C", ["F"]);
        graph.set_neighbors("D", []);
        graph.set_neighbors("E", ["F"]);
        graph.set_neighbors("F", []);
        graph
    }

    fn sorted(set: FxHashSet<&'static str>) -> Vec<&'static str> {
        set.into_iter().sorted().collect()
    }

    #[test]
    fn reachable_sets() {
        let graph = family();

        assert_eq!(sorted(graph.reachable(&"A")), ["A", "B", "C", "D", "E", "F"]);
        assert_eq!(sorted(graph.reachable(&"D")), ["D"]);
        assert_eq!(sorted(graph.reachable(&"E")), ["E", "F"]);
    }

    #[test]
    fn dfs_order() {
        let graph = family();
        assert_eq!(graph.dfs(&"A").collect_vec(), ["A", "B", "D", "E", "F", "C"]);
    }

    #[test]
    fn unknown_start() {
        let graph = family();
        assert!(graph.reachable(&"Z").is_empty());
        assert_eq!(graph.dfs(&"Z").count(), 0);

        let empty: DirectedGraph<&str> = DirectedGraph::new();
        assert!(empty.reachable(&"A").is_empty());
    }

    #[test]
    fn single_vertex() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex("A");
        assert_eq!(sorted(graph.reachable(&"A")), ["A"]);
    }

    #[test]
    fn cycle_terminates() {
        let graph: DirectedGraph<&str> =
            DirectedGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
        assert_eq!(sorted(graph.reachable(&"A")), ["A", "B", "C"]);
        assert!(graph.is_reachable(&"C", &"B"));
    }

    #[test]
    fn self_loop_and_parallel_edges() {
        let graph: DirectedGraph<u32> =
            DirectedGraph::from_edges([(0, 0), (0, 1), (0, 1), (1, 2), (2, 1)]);
        assert_eq!(graph.dfs(&0).collect_vec(), [0, 1, 2]);
        assert!(!graph.is_reachable(&2, &0));
    }

    #[test]
    fn target_without_key_has_no_neighbors() {
        // `DirectedGraph` registers every edge target, so a bare view is needed here
        struct View(Vec<(u32, Vec<u32>)>);

        impl GraphNodeOrder for View {
            type Vertex = u32;

            fn number_of_nodes(&self) -> NumNodes {
                self.0.len()
            }

            fn vertices(&self) -> impl Iterator<Item = &u32> + '_ {
                self.0.iter().map(|(u, _)| u)
            }

            fn contains_vertex(&self, u: &u32) -> bool {
                self.0.iter().any(|(v, _)| v == u)
            }
        }

        impl AdjacencyList for View {
            fn neighbors_of(&self, u: &u32) -> &[u32] {
                self.0
                    .iter()
                    .find(|(v, _)| v == u)
                    .map(|(_, nbs)| nbs.as_slice())
                    .unwrap_or(&[])
            }
        }

        let view = View(vec![(0, vec![1, 2]), (2, vec![3])]);
        assert_eq!(view.dfs(&0).collect_vec(), [0, 1, 2, 3]);

        let mut nodes = view.all_nodes().into_iter().collect_vec();
        nodes.sort_unstable();
        assert_eq!(nodes, [0, 1, 2, 3]);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n = 200_000u32;
        let graph: DirectedGraph<u32> = DirectedGraph::from_edges((1..n).map(|u| (u - 1, u)));
        assert_eq!(graph.reachable(&0).len(), n as usize);
        assert_eq!(graph.dfs(&0).last(), Some(n - 1));
    }

    #[test]
    fn partially_consumed_search() {
        let graph = family();
        let mut dfs = graph.dfs(&"A");
        assert_eq!(dfs.next(), Some("A"));
        assert_eq!(dfs.next(), Some("B"));
        assert_eq!(dfs.discovered().len(), 2);
        assert_eq!(dfs.into_discovered().len(), 6);
    }
}
