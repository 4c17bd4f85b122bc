//! Diagram serialization

use std::io::{self, Write};

use crate::model::{Edge, Node};

/// Streaming consumer of node and edge records.
///
/// The builder pushes records in discovery order; a sink must not
/// assume any particular edge ordering within one node's expansion.
pub trait DiagramSink {
    fn header(&mut self) -> io::Result<()>;
    fn node(&mut self, node: &Node) -> io::Result<()>;
    fn edge(&mut self, edge: &Edge) -> io::Result<()>;
    fn footer(&mut self) -> io::Result<()>;
}

/// Graphviz DOT serializer.
///
/// Canonical names are emitted verbatim inside quotes, which keeps
/// generic brackets and dots safe without any rewriting.
pub struct GraphvizEmitter<W: Write> {
    out: W,
}

impl<W: Write> GraphvizEmitter<W> {
    pub fn new(out: W) -> Self {
        GraphvizEmitter { out }
    }
}

impl<W: Write> DiagramSink for GraphvizEmitter<W> {
    fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "digraph dependencies {{")?;
        writeln!(self.out, "    splines = polyline")?;
        writeln!(self.out, "    edge [color = lightgray]")
    }

    fn node(&mut self, node: &Node) -> io::Result<()> {
        writeln!(
            self.out,
            "    \"{}\" [label = \"{}\"]",
            node.canonical, node.label
        )
    }

    fn edge(&mut self, edge: &Edge) -> io::Result<()> {
        writeln!(self.out, "    \"{}\" -> \"{}\"", edge.from, edge.to)
    }

    fn footer(&mut self) -> io::Result<()> {
        writeln!(self.out, "}}")
    }
}

/// Rewrite a canonical name into an identifier Mermaid accepts.
///
/// Lossy: `>` and spaces are deleted rather than escaped, so two
/// distinct canonical names can sanitize to the same token.
pub fn mermaid_safe(name: &str) -> String {
    let mut safe = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '.' | ',' => safe.push('_'),
            '<' => safe.push_str("__"),
            '>' | ' ' => {}
            other => safe.push(other),
        }
    }
    safe
}

/// Mermaid flowchart serializer, wrapped in a fenced code block.
///
/// The sanitization transform is applied to node declarations and edge
/// endpoints alike, so identical canonical names always produce the
/// same identifier.
pub struct MermaidEmitter<W: Write> {
    out: W,
}

impl<W: Write> MermaidEmitter<W> {
    pub fn new(out: W) -> Self {
        MermaidEmitter { out }
    }
}

impl<W: Write> DiagramSink for MermaidEmitter<W> {
    fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "```mermaid")?;
        writeln!(self.out, "flowchart TD")
    }

    fn node(&mut self, node: &Node) -> io::Result<()> {
        writeln!(
            self.out,
            "    {}[{}]",
            mermaid_safe(&node.canonical),
            node.label
        )
    }

    fn edge(&mut self, edge: &Edge) -> io::Result<()> {
        writeln!(
            self.out,
            "    {} --> {}",
            mermaid_safe(&edge.from),
            mermaid_safe(&edge.to)
        )
    }

    fn footer(&mut self) -> io::Result<()> {
        writeln!(self.out, "```")
    }
}
