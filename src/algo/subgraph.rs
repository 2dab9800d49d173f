/*!
# Genealogical Subgraphs

The genealogical subgraph of a vertex `s` combines
- the descendant closure of `s` (everything reachable from `s`), and
- for every ancestor `a` of `s` (everything that can reach `s`), the descendant closure of `a`,

together with all edges of the source graph leaving any of these vertices.
Thus it contains the whole "family" of `s`: parents, grandparents, siblings, cousins and so on,
but nothing that is unrelated to `s` or only shares a descendant with it.

The result never contains parallel edges, even if the source graph does.
*/

use tracing::debug;

use super::*;

/// Copies every vertex reachable from `node` in `source` into `subgraph`, together with all
/// its outgoing edges. Edges already present in `subgraph` are not added a second time.
fn add_descendants<G, GO>(source: &G, subgraph: &mut GO, node: &G::Vertex)
where
    G: AdjacencyList,
    GO: GraphEdgeEditing<Vertex = G::Vertex> + GraphVertexEditing<Vertex = G::Vertex>,
{
    for u in source.dfs(node) {
        for v in source.neighbors_of(&u) {
            subgraph.try_add_edge(u.clone(), v.clone());
        }
        subgraph.add_vertex(u);
    }
}

/// Copies the descendant closure of every proper ancestor of `start` into `subgraph`.
fn add_ancestors<G, GO>(source: &G, subgraph: &mut GO, start: &G::Vertex)
where
    G: AdjacencyList,
    GO: GraphEdgeEditing<Vertex = G::Vertex> + GraphVertexEditing<Vertex = G::Vertex>,
{
    let reversed: DirectedGraph<G::Vertex> = source.reversed_as();
    for ancestor in reversed.dfs(start) {
        // descendants of vertices already present have been copied before
        if ancestor != *start && !subgraph.contains_vertex(&ancestor) {
            add_descendants(source, subgraph, &ancestor);
        }
    }
}

/// Provides descendant/ancestor closures and the genealogical subgraph of a vertex.
pub trait GenealogicalSubgraph: AdjacencyList {
    /// Returns the descendant closure of `u`: all vertices reachable from `u`, including `u`.
    /// Empty if `u` is not a vertex.
    fn descendants(&self, u: &Self::Vertex) -> FxHashSet<Self::Vertex> {
        self.reachable(u)
    }

    /// Returns the ancestor closure of `u`: all vertices `v != u` with a path from `v` to `u`.
    /// Empty if `u` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use genograph::{prelude::*, algo::*};
    ///
    /// let g: DirectedGraph<&str> = DirectedGraph::from_edges([("A", "B"), ("B", "C"), ("X", "Y")]);
    ///
    /// let mut ancestors: Vec<_> = g.ancestors(&"C").into_iter().collect();
    /// ancestors.sort();
    /// assert_eq!(ancestors, ["A", "B"]);
    /// ```
    fn ancestors(&self, u: &Self::Vertex) -> FxHashSet<Self::Vertex> {
        let reversed: DirectedGraph<Self::Vertex> = self.reversed_as();
        let mut ancestors = reversed.reachable(u);
        ancestors.remove(u);
        ancestors
    }

    /// Builds the genealogical subgraph of `start` as a graph of type `GO`.
    ///
    /// Vertices are processed in depth-first discovery order: first the descendants of
    /// `start`, then, ancestor by ancestor, their descendants. Every discovered vertex is
    /// registered in the result, so `start` is part of it whenever it is part of `self`.
    /// If `start` is not a vertex of `self`, the result is empty.
    ///
    /// # Complexity
    /// Every ancestor that is not yet part of the result starts its own descendant search
    /// over `self`, so the worst case is `O(a * (n + m))` for `a` ancestors. Ancestors are
    /// visited nearest first, hence on a long path ending in `start` the cost is quadratic
    /// in the path length.
    fn genealogical_subgraph_as<GO>(&self, start: &Self::Vertex) -> GO
    where
        GO: GraphEdgeEditing<Vertex = Self::Vertex> + GraphVertexEditing<Vertex = Self::Vertex>,
    {
        let mut subgraph = GO::new();
        add_descendants(self, &mut subgraph, start);
        add_ancestors(self, &mut subgraph, start);

        debug!(
            nodes = subgraph.number_of_nodes(),
            source_nodes = self.number_of_nodes(),
            "extracted genealogical subgraph"
        );
        subgraph
    }

    /// Builds the genealogical subgraph of `start` as a graph of the same type as `self`.
    ///
    /// # Examples
    /// ```
    /// use genograph::{prelude::*, algo::*};
    ///
    /// let g: DirectedGraph<&str> =
    ///     DirectedGraph::from_edges([("Mum", "Kid"), ("Mum", "Sis"), ("Other", "Thing")]);
    ///
    /// let family = g.genealogical_subgraph(&"Kid");
    /// assert_eq!(family[&"Mum"], ["Kid", "Sis"]);
    /// assert!(!family.contains_vertex(&"Other"));
    /// ```
    fn genealogical_subgraph(&self, start: &Self::Vertex) -> Self
    where
        Self: GraphEdgeEditing + GraphVertexEditing,
    {
        self.genealogical_subgraph_as(start)
    }
}

impl<G> GenealogicalSubgraph for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn sorted_edges(graph: &DirectedGraph<&'static str>) -> Vec<Edge<&'static str>> {
        graph.edges().sorted().collect()
    }

    /// ```text
    ///       Q
    ///      / \
    ///     P1  R    P2     W    U
    ///    /  \     /       |    |
    ///   S    X --+        |    V
    ///        |            |
    ///        C1 <---------+
    /// ```
    fn family() -> DirectedGraph<&'static str> {
        DirectedGraph::from_edges([
            ("Q", "P1"),
            ("Q", "R"),
            ("P1", "X"),
            ("P1", "S"),
            ("P2", "X"),
            ("X", "C1"),
            ("W", "C1"),
            ("U", "V"),
        ])
    }

    #[test]
    fn cycle() {
        let graph: DirectedGraph<&str> =
            DirectedGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
        let subgraph = graph.genealogical_subgraph(&"B");

        assert_eq!(
            sorted_edges(&subgraph),
            [Edge("A", "B"), Edge("B", "C"), Edge("C", "A")]
        );
    }

    #[test]
    fn family_of_x() {
        let graph = family();
        let subgraph = graph.genealogical_subgraph(&"X");

        assert_eq!(
            sorted_edges(&subgraph),
            [
                Edge("P1", "S"),
                Edge("P1", "X"),
                Edge("P2", "X"),
                Edge("Q", "P1"),
                Edge("Q", "R"),
                Edge("X", "C1"),
            ]
        );
        assert_eq!(
            subgraph.keys().copied().collect_vec(),
            ["X", "C1", "P1", "S", "Q", "R", "P2"]
        );
        for unrelated in ["W", "U", "V"] {
            assert!(!subgraph.contains_vertex(&unrelated));
        }
    }

    #[test]
    fn family_of_leaf_and_root() {
        let graph = family();

        let of_v = graph.genealogical_subgraph(&"V");
        assert_eq!(sorted_edges(&of_v), [Edge("U", "V")]);

        let of_w = graph.genealogical_subgraph(&"W");
        assert_eq!(sorted_edges(&of_w), [Edge("W", "C1")]);
    }

    #[test]
    fn source_is_untouched() {
        let graph = family();
        let before = graph.clone();
        let mut subgraph = graph.genealogical_subgraph(&"X");
        subgraph.remove_vertex(&"X");
        assert_eq!(graph, before);
    }

    #[test]
    fn unknown_start_gives_empty_graph() {
        let graph = family();
        let subgraph = graph.genealogical_subgraph(&"nobody");
        assert!(subgraph.is_empty());
        assert!(subgraph.is_edgeless());
    }

    #[test]
    fn isolated_start_is_kept() {
        let mut graph = family();
        graph.add_vertex("hermit");

        let subgraph = graph.genealogical_subgraph(&"hermit");
        assert_eq!(subgraph.keys().copied().collect_vec(), ["hermit"]);
        assert!(subgraph.is_edgeless());
    }

    #[test]
    fn parallel_edges_are_collapsed() {
        let graph: DirectedGraph<u32> = DirectedGraph::from_edges([(0, 1), (0, 1), (1, 2)]);
        let subgraph = graph.genealogical_subgraph(&1);

        assert_eq!(subgraph[&0], [1]);
        assert_eq!(subgraph[&1], [2]);
        assert_eq!(subgraph.number_of_edges(), 2);
    }

    #[test]
    fn closures() {
        let graph = family();

        assert_eq!(
            graph.descendants(&"P1").into_iter().sorted().collect_vec(),
            ["C1", "P1", "S", "X"]
        );
        assert_eq!(
            graph.ancestors(&"C1").into_iter().sorted().collect_vec(),
            ["P1", "P2", "Q", "W", "X"]
        );
        assert!(graph.ancestors(&"Q").is_empty());
        assert!(graph.ancestors(&"nobody").is_empty());
    }

    #[test]
    fn ancestors_exclude_self_on_cycle() {
        let graph: DirectedGraph<u32> = DirectedGraph::from_edges([(0, 1), (1, 0)]);
        assert_eq!(graph.ancestors(&0).into_iter().collect_vec(), [1]);
    }
}
