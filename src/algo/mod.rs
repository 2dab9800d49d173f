/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use genograph::algo::*;
```
and gain access to traversal, reversal and genealogical subgraph extraction.
Every algorithm is implemented as a trait with a blanket implementation for all [`AdjacencyList`]s,
so it is available directly as a method on the graph itself.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod reverse;
mod subgraph;
mod traversal;

use fxhash::FxHashSet;

use crate::prelude::*;

pub use reverse::*;
pub use subgraph::*;
pub use traversal::*;
