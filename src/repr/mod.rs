/*!
# Graph Representations

Currently there is a single representation, [`DirectedGraph`], an adjacency list keyed by
arbitrary [`Vertex`] values. Each vertex owns a [`Neighborhood`], its ordered sequence of
out-neighbors.
*/

use std::fmt::Debug;

use crate::{edge::*, node::*, ops::*};

mod directed;
mod neighborhood;

pub use directed::*;
pub use neighborhood::*;
