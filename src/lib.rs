/*!
`genograph` is a small directed-graph library designed for graphs whose vertices are
arbitrary values such as names or identifiers, and whose primary question is
"who is related to whom".

# Representation

Vertices are **not** numbered: any `Clone + Eq + Hash` value is a [`Vertex`](crate::node::Vertex).
For **edges**, we use a simple tuple-struct `Edge(V, V)` which is always directed from the first
to the second endpoint.

The only representation is [`DirectedGraph`](crate::repr::DirectedGraph), an insertion-ordered
adjacency list. It
- keeps out-neighbors in insertion order and allows parallel edges and self-loops,
- registers both endpoints of every added edge as vertices,
- removes every incident edge when a vertex is removed.

# Design

Basic graph operations are split into small traits in [`ops`]; algorithms in [`algo`] are
traits with blanket implementations over these, so they can be called directly on the graph.
Configurable functionality (such as the DOT output) is provided as structs using the
*Builder* / *Setter* pattern, with a shorthand trait for the default configuration.

No operation panics on unknown vertices: queries return empty results and removals return
*false*.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, basic graph operations, and the graph representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as DFS (`graph.dfs(&start)`),
  reachability, reversal and genealogical subgraph extraction,
- [`io`] includes writers to output a given graph, e.g. in the DOT language of GraphViz.

In most use-cases, `use genograph::{prelude::*, algo::*};` suffices for your needs.

```
use genograph::{prelude::*, algo::*};

let mut graph = DirectedGraph::new();
graph.add_edge("Grandma", "Mum");
graph.add_edge("Mum", "Me");
graph.add_edge("Mum", "Sister");
graph.add_edge("Neighbour", "Dog");

let family = graph.genealogical_subgraph(&"Me");
assert!(family.has_edge(&"Mum", &"Sister"));
assert!(!family.contains_vertex(&"Neighbour"));
```

# Logging

Construction of derived graphs and vertex removals emit [`tracing`] events at `debug` and
`trace` level. The library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `genograph::prelude` includes definitions for vertices and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
