use std::fmt::{Debug, Display};

/// A directed edge `(source, target)`.
///
/// Direction matters: `Edge(u, v)` and `Edge(v, u)` are different edges.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

/// Number of edges in a graph (parallel edges are counted individually)
pub type NumEdges = usize;

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V> Edge<V> {
    /// Returns the endpoint the edge starts at
    pub fn source(&self) -> &V {
        &self.0
    }

    /// Returns the endpoint the edge points to
    pub fn target(&self) -> &V {
        &self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(self) -> Self {
        Edge(self.1, self.0)
    }
}

impl<V: PartialEq> Edge<V> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V: Clone> From<(&V, &V)> for Edge<V> {
    fn from(value: (&V, &V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V: Clone> From<&Edge<V>> for Edge<V> {
    fn from(value: &Edge<V>) -> Self {
        value.clone()
    }
}
