/// Generates randomized tests for a graph over vertices of type `$vertex`.
/// Vertices are created from integers `0..n` via `$make`.
///
/// Every listed trait adds a test that checks its operations against a naive reference
/// computed directly from the edge list.
macro_rules! test_graph_ops {
    ($env:ident, $vertex:ty, $make:expr, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, edge::*, ops::*, repr::*, testing::test_graph_ops};
            use fxhash::FxHashSet;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type Graph = DirectedGraph<$vertex>;

            fn vertex(u: u32) -> $vertex {
                ($make)(u)
            }

            /// Creates a list of `m` random edges for vertices `0..n`, possibly with
            /// parallel edges and self-loops
            fn random_edges<R: Rng>(rng: &mut R, n: u32, m: NumEdges) -> Vec<Edge<$vertex>> {
                (0..m)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        Edge(vertex(u), vertex(v))
                    })
                    .collect_vec()
            }

            /// Vertices reachable from `u`, computed as a fixpoint over the edge list
            fn closure(graph: &Graph, u: &$vertex) -> FxHashSet<$vertex> {
                let mut reached = FxHashSet::default();
                if !graph.contains_vertex(u) {
                    return reached;
                }
                reached.insert(u.clone());

                loop {
                    let next = graph
                        .edges()
                        .filter(|Edge(x, y)| reached.contains(x) && !reached.contains(y))
                        .map(|Edge(_, y)| y)
                        .collect_vec();
                    if next.is_empty() {
                        return reached;
                    }
                    reached.extend(next);
                }
            }

            $(
                test_graph_ops!($trait);
            )*
        }
    };
    (GraphVertexEditing) => {
        #[test]
        fn test_graph_vertex_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [5u32, 10, 30] {
                for m in [n as NumEdges, 3 * n as NumEdges] {
                    for _ in 0..10 {
                        let mut graph = Graph::from_edges(random_edges(rng, n, m));

                        let fresh = vertex(n);
                        assert!(graph.add_vertex(fresh.clone()));
                        assert!(!graph.add_vertex(fresh.clone()));
                        assert!(graph.contains_vertex(&fresh));
                        assert!(graph[&fresh].is_empty());

                        for _ in 0..(n / 2) {
                            let u = vertex(rng.random_range(0..=n));
                            let present = graph.contains_vertex(&u);
                            let num_nodes = graph.number_of_nodes();
                            let remaining = graph
                                .edges()
                                .filter(|Edge(x, y)| *x != u && *y != u)
                                .count();

                            assert_eq!(graph.remove_vertex(&u), present);
                            assert!(!graph.contains_vertex(&u));
                            assert!(graph.vertices().all(|v| !graph[v].contains(&u)));
                            assert_eq!(graph.number_of_nodes(), num_nodes - present as usize);
                            assert_eq!(graph.number_of_edges(), remaining);
                            assert!(!graph.remove_vertex(&u));
                        }
                    }
                }
            }
        }
    };
    (GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [5u32, 10, 30] {
                for m in [n as NumEdges, 3 * n as NumEdges] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m);

                        let mut graph = Graph::new();
                        for Edge(u, v) in edges.iter().cloned() {
                            graph.add_edge(u, v);
                        }

                        assert_eq!(graph.number_of_edges(), m);
                        assert!(edges.iter().all(|Edge(u, v)| {
                            graph.contains_vertex(u) && graph.contains_vertex(v)
                        }));
                        for u in graph.vertices() {
                            let expected = edges
                                .iter()
                                .filter(|Edge(x, _)| x == u)
                                .map(|Edge(_, y)| y.clone())
                                .collect_vec();
                            assert_eq!(graph[u], expected);
                        }

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);
                        for _ in 0..m {
                            let u = vertex(rng.random_range(0..n));
                            let v = vertex(rng.random_range(0..n));
                            let occurrences = graph[&u].iter().filter(|&w| *w == v).count();
                            let m_before = graph.number_of_edges();

                            if rng.random_bool(0.5) {
                                assert_eq!(graph.remove_edge(&u, &v), occurrences > 0);
                                let removed = (occurrences > 0) as usize;
                                assert_eq!(
                                    graph[&u].iter().filter(|&w| *w == v).count(),
                                    occurrences - removed
                                );
                                assert_eq!(graph.number_of_edges(), m_before - removed);
                            } else {
                                assert_eq!(graph.try_add_edge(u.clone(), v.clone()), occurrences > 0);
                                assert!(graph.has_edge(&u, &v));
                                assert_eq!(
                                    graph[&u].iter().filter(|&w| *w == v).count(),
                                    occurrences.max(1)
                                );
                            }

                            let total_degree: usize =
                                graph.vertices().map(|w| graph.degree_of(w)).sum();
                            assert_eq!(graph.number_of_edges(), total_degree);
                        }
                    }
                }
            }
        }
    };
    (Traversal) => {
        #[test]
        fn test_traversal() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [5u32, 10, 30] {
                for m in [n as NumEdges / 2, n as NumEdges, 2 * n as NumEdges] {
                    for _ in 0..10 {
                        let graph = Graph::from_edges(random_edges(rng, n, m));

                        for u in (0..=n).map(vertex) {
                            let expected = closure(&graph, &u);
                            assert_eq!(graph.reachable(&u), expected);
                            assert_eq!(graph.reachable(&u).contains(&u), graph.contains_vertex(&u));

                            let order = graph.dfs(&u).collect_vec();
                            assert_eq!(order.first(), graph.contains_vertex(&u).then_some(&u));
                            assert!(order.iter().all_unique());
                            assert_eq!(order.into_iter().collect::<FxHashSet<_>>(), expected);
                        }
                    }
                }
            }
        }
    };
    (Reverse) => {
        #[test]
        fn test_reverse() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [5u32, 10, 30] {
                for m in [n as NumEdges, 3 * n as NumEdges] {
                    for _ in 0..10 {
                        let mut graph = Graph::from_edges(random_edges(rng, n, m));
                        graph.add_vertex(vertex(n));

                        let reversed = graph.reversed();

                        assert_eq!(reversed.number_of_edges(), graph.number_of_edges());
                        assert_eq!(
                            reversed.vertices().collect::<FxHashSet<_>>(),
                            graph.vertices().collect::<FxHashSet<_>>()
                        );
                        assert_eq!(
                            reversed.edges().counts(),
                            graph.edges().map(Edge::reverse).counts()
                        );
                    }
                }
            }
        }
    };
    (GenealogicalSubgraph) => {
        #[test]
        fn test_genealogical_subgraph() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [5u32, 10, 30] {
                for m in [n as NumEdges / 2, n as NumEdges, 2 * n as NumEdges] {
                    for _ in 0..5 {
                        let graph = Graph::from_edges(random_edges(rng, n, m));

                        for u in (0..=n).map(vertex) {
                            let subgraph = graph.genealogical_subgraph(&u);

                            if !graph.contains_vertex(&u) {
                                assert!(subgraph.is_empty());
                                continue;
                            }

                            let ancestors = graph
                                .vertices()
                                .filter(|&a| *a != u && closure(&graph, a).contains(&u))
                                .cloned()
                                .collect::<FxHashSet<_>>();
                            assert_eq!(graph.ancestors(&u), ancestors);
                            assert_eq!(graph.descendants(&u), closure(&graph, &u));

                            let mut family = closure(&graph, &u);
                            for a in &ancestors {
                                family.extend(closure(&graph, a));
                            }

                            let expected_edges = graph
                                .edges()
                                .filter(|Edge(x, _)| family.contains(x))
                                .collect::<FxHashSet<_>>();

                            assert!(subgraph.contains_vertex(&u));
                            assert_eq!(subgraph.vertices().cloned().collect::<FxHashSet<_>>(), family);
                            assert!(subgraph.edges().all_unique());
                            assert_eq!(subgraph.edges().collect::<FxHashSet<_>>(), expected_edges);
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
