//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw styled nodes and
//! (optionally labelled) edges.
//!
//! Every vertex is declared once with the node style, after which every edge occurrence is
//! written with the edge style. Parallel edges are therefore drawn as separate arrows.
//!
//! ```
//! use genograph::{prelude::*, io::*};
//!
//! let g: DirectedGraph<&str> = DirectedGraph::from_edges([("A", "B")]);
//! let dot = DotWriter::new().edge_labels(false).to_dot_string(&g).unwrap();
//!
//! assert!(dot.starts_with("digraph \"dot\" {"));
//! assert!(dot.contains("\"A\" -> \"B\" [color=\"blue\", style=\"solid\"];"));
//! ```
use std::fmt::Display;

use itertools::Itertools;
use tracing::trace;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Name of the graph (default: `dot`)
    name: String,
    /// Shape of every node (default: `box`)
    node_shape: String,
    /// Style of every node (default: `filled`)
    node_style: String,
    /// Outline color of every node (default: `black`)
    node_color: String,
    /// Fill color of every node (default: `lightblue`)
    node_fill: String,
    /// Color of every edge (default: `blue`)
    edge_color: String,
    /// Style of every edge (default: `solid`)
    edge_style: String,
    /// Label every edge `(u, v)` with `u → v` (default: *true*)
    edge_labels: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            name: "dot".to_string(),
            node_shape: "box".to_string(),
            node_style: "filled".to_string(),
            node_color: "black".to_string(),
            node_fill: "lightblue".to_string(),
            edge_color: "blue".to_string(),
            edge_style: "solid".to_string(),
            edge_labels: true,
        }
    }
}

/// Quotes `text` as a DOT identifier, escaping quotes, backslashes, line feeds and carriage returns
fn quoted(text: impl Display) -> String {
    let text = text.to_string();
    let mut out = String::with_capacity(text.len() + 2);

    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');

    out
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the graph
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the shape of all nodes, e.g. `box`, `ellipse` or `circle`
    pub fn node_shape<S: Into<String>>(mut self, shape: S) -> Self {
        self.node_shape = shape.into();
        self
    }

    /// Set the style of all nodes, e.g. `filled` or `dashed`
    pub fn node_style<S: Into<String>>(mut self, style: S) -> Self {
        self.node_style = style.into();
        self
    }

    /// Set the outline color of all nodes
    pub fn node_color<S: Into<String>>(mut self, color: S) -> Self {
        self.node_color = color.into();
        self
    }

    /// Set the fill color of all nodes. Only visible if the node style is `filled`.
    pub fn node_fill<S: Into<String>>(mut self, color: S) -> Self {
        self.node_fill = color.into();
        self
    }

    /// Set the color of all edges
    pub fn edge_color<S: Into<String>>(mut self, color: S) -> Self {
        self.edge_color = color.into();
        self
    }

    /// Set the style of all edges, e.g. `solid`, `dashed` or `dotted`
    pub fn edge_style<S: Into<String>>(mut self, style: S) -> Self {
        self.edge_style = style.into();
        self
    }

    /// If *false*, edges are written without a label
    pub fn edge_labels(mut self, edge_labels: bool) -> Self {
        self.edge_labels = edge_labels;
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {} {{", quoted(&self.name))
    }

    /// Writes a node declaration with the configured node style for every node
    pub fn write_nodes<W, V, I>(&self, writer: &mut W, nodes: I) -> Result<()>
    where
        W: Write,
        V: Display,
        I: IntoIterator<Item = V>,
    {
        for u in nodes {
            writeln!(
                writer,
                "  {} [shape={}, style={}, color={}, fillcolor={}];",
                quoted(u),
                quoted(&self.node_shape),
                quoted(&self.node_style),
                quoted(&self.node_color),
                quoted(&self.node_fill)
            )?;
        }
        Ok(())
    }

    /// Writes every edge with the configured edge style (and label)
    pub fn write_edges<W, V, I>(&self, writer: &mut W, edges: I) -> Result<()>
    where
        W: Write,
        V: Display,
        I: IntoIterator<Item = Edge<V>>,
    {
        for Edge(u, v) in edges {
            write!(
                writer,
                "  {} -> {} [color={}, style={}",
                quoted(&u),
                quoted(&v),
                quoted(&self.edge_color),
                quoted(&self.edge_style)
            )?;

            if self.edge_labels {
                write!(writer, ", label={}", quoted(format!("{u} → {v}")))?;
            }

            writeln!(writer, "];")?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }

    /// Writes the graph into a newly allocated string
    ///
    /// # Errors
    /// Returns an error if formatting a vertex fails.
    pub fn to_dot_string<G>(&self, graph: &G) -> Result<String>
    where
        G: AdjacencyList,
        G::Vertex: Display,
    {
        let mut buffer = Vec::new();
        self.try_write_graph(graph, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io_error!(ErrorKind::InvalidData, e))
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList,
    G::Vertex: Display,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        // keys first, then targets without a key of their own
        let nodes = graph
            .vertices()
            .chain(graph.vertices().flat_map(|u| graph.neighbors_of(u)))
            .unique()
            .collect_vec();

        trace!(nodes = nodes.len(), name = %self.name, "writing dot graph");

        self.start_graph(&mut writer)?;
        self.write_nodes(&mut writer, nodes)?;
        self.write_edges(&mut writer, graph.edges())?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(&mut writer)?;
        writer.flush()
    }

    /// Returns the graph in the Dot-Format as a string
    fn to_dot_string(&self) -> Result<String>;
}

impl<G> DotWrite for G
where
    G: AdjacencyList,
    G::Vertex: Display,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }

    fn to_dot_string(&self) -> Result<String> {
        DotWriter::default().to_dot_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style() {
        let graph: DirectedGraph<&str> = DirectedGraph::from_edges([("A", "B"), ("A", "C")]);
        let dot = graph.to_dot_string().unwrap();

        let expected = [
            "digraph \"dot\" {",
            "  \"A\" [shape=\"box\", style=\"filled\", color=\"black\", fillcolor=\"lightblue\"];",
            "  \"B\" [shape=\"box\", style=\"filled\", color=\"black\", fillcolor=\"lightblue\"];",
            "  \"C\" [shape=\"box\", style=\"filled\", color=\"black\", fillcolor=\"lightblue\"];",
            "  \"A\" -> \"B\" [color=\"blue\", style=\"solid\", label=\"A → B\"];",
            "  \"A\" -> \"C\" [color=\"blue\", style=\"solid\", label=\"A → C\"];",
            "}",
            "",
        ]
        .join("\n");

        assert_eq!(dot, expected);
    }

    #[test]
    fn custom_style() {
        let graph: DirectedGraph<u32> = DirectedGraph::from_edges([(1, 2)]);
        let dot = DotWriter::new()
            .name("family")
            .node_shape("ellipse")
            .node_fill("white")
            .edge_color("red")
            .edge_style("dashed")
            .edge_labels(false)
            .to_dot_string(&graph)
            .unwrap();

        assert!(dot.starts_with("digraph \"family\" {\n"));
        assert!(dot.contains(
            "  \"1\" [shape=\"ellipse\", style=\"filled\", color=\"black\", fillcolor=\"white\"];"
        ));
        assert!(dot.contains("  \"1\" -> \"2\" [color=\"red\", style=\"dashed\"];"));
        assert!(!dot.contains("label"));
    }

    #[test]
    fn every_node_once_and_every_edge_occurrence() {
        let mut graph: DirectedGraph<&str> =
            DirectedGraph::from_edges([("A", "B"), ("A", "B"), ("B", "A")]);
        graph.add_vertex("lonely");

        let dot = graph.to_dot_string().unwrap();

        assert_eq!(dot.matches("fillcolor").count(), 3);
        assert_eq!(dot.matches("\"A\" -> \"B\"").count(), 2);
        assert_eq!(dot.matches("\"B\" -> \"A\"").count(), 1);
        assert!(dot.contains("  \"lonely\" [shape"));
    }

    #[test]
    fn empty_graph() {
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        assert_eq!(graph.to_dot_string().unwrap(), "digraph \"dot\" {\n}\n");
    }

    #[test]
    fn labels_are_escaped() {
        let graph: DirectedGraph<&str> =
            DirectedGraph::from_edges([("say \"hi\"", "back\\slash"), ("two\nlines", "x")]);
        let dot = graph.to_dot_string().unwrap();

        assert!(dot.contains("  \"say \\\"hi\\\"\" [shape"));
        assert!(dot.contains("  \"back\\\\slash\" [shape"));
        assert!(dot.contains("  \"two\\nlines\" [shape"));
        assert!(dot.contains("label=\"say \\\"hi\\\" → back\\\\slash\""));
    }

    #[test]
    fn write_to_writer() {
        let graph: DirectedGraph<&str> = DirectedGraph::from_edges([("A", "B")]);

        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), graph.to_dot_string().unwrap());
    }

    #[test]
    fn carriage_returns_are_escaped() {
        let graph: DirectedGraph<&str> = DirectedGraph::from_edges([("dos\r\nline", "x")]);
        let dot = graph.to_dot_string().unwrap();

        assert!(dot.contains("  \"dos\\r\\nline\" [shape"));
        assert!(dot.contains("label=\"dos\\r\\nline → x\""));
        assert!(!dot.contains('\r'));
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("genograph-{}-{name}.dot", std::process::id()))
    }

    #[test]
    fn write_dot_file() {
        let graph: DirectedGraph<&str> =
            DirectedGraph::from_edges([("A", "B"), ("B", "C"), ("A", "C")]);
        let path = temp_path("default");

        graph.try_write_dot_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, graph.to_dot_string().unwrap());
    }

    #[test]
    fn write_graph_file_with_custom_writer() {
        let graph: DirectedGraph<u32> = DirectedGraph::from_edges([(1, 2), (2, 1)]);
        let writer = DotWriter::new().name("pair").edge_labels(false);
        let path = temp_path("custom");

        writer.try_write_graph_file(&graph, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, writer.to_dot_string(&graph).unwrap());
        assert!(written.starts_with("digraph \"pair\" {\n"));
    }

    #[test]
    fn write_to_directory_fails() {
        let graph: DirectedGraph<&str> = DirectedGraph::from_edges([("A", "B")]);
        let dir = std::env::temp_dir();

        assert!(graph.try_write_dot_file(&dir).is_err());
        assert!(DotWriter::new().try_write_graph_file(&graph, &dir).is_err());
    }
}
