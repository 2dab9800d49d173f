/*!
# IO

Utilities for writing graphs to different file formats.

## Output Formats

Currently supported output formats:
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).

Vertices are written by their [`Display`](std::fmt::Display) representation and quoted, so
labels may contain spaces, quotes or any other character.

## Traits

To generalize over writing:
- [`GraphWriter`] is implemented by configurable writers for a specific format (e.g. [`DotWriter`]).
- Format-specific shorthand traits such as [`DotWrite`] are implemented directly on graphs and use
  the default settings of their writer.
*/

pub mod dot;

use std::{
    fs::File,
    io::{BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use dot::*;

/// A configured writer that outputs graphs of type `G` in one specific format.
///
/// Implementors only provide [`GraphWriter::try_write_graph`] for arbitrary [`Write`]rs;
/// writing to a file is derived from it.
pub trait GraphWriter<G> {
    /// Writes `graph` to `writer` using the settings of `self`.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates (or truncates) the file at `path` and writes `graph` into it through a
    /// buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

use io_error;
