/*!
# Vertex Representation

In contrast to index-based graph libraries, vertices are not numbered `0..n`.
Any value that can be cloned, compared for equality and hashed may serve as a vertex:
two equal values always denote the same vertex, there is no further identity attached.

Typical choices are `&'static str`, `String` or small integers.
*/

use std::hash::Hash;

/// Marker trait for everything usable as a vertex.
///
/// Automatically implemented for every `Clone + Eq + Hash` type.
pub trait Vertex: Clone + Eq + Hash {}

impl<V> Vertex for V where V: Clone + Eq + Hash {}

/// Number of vertices in a graph
pub type NumNodes = usize;
