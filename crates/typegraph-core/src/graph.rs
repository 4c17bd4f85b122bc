//! Collected graph using petgraph::StableDiGraph, keyed by canonical name

use std::collections::HashMap;
use std::io;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction;

use crate::model::{Edge, EdgeKind, Node};
use crate::render::DiagramSink;

/// In-memory form of an emitted graph: a directed multigraph with one
/// vertex per canonical name.
///
/// The builder streams into any sink; this one collects, which is what
/// property checks and tests want. Edge records may arrive before the
/// node record for an endpoint (the seeding pass does this), so unseen
/// endpoints are interned with an empty label and filled in when their
/// node record lands.
pub struct SymbolGraph {
    inner: StableDiGraph<Node, EdgeKind>,
    by_name: HashMap<String, NodeIndex>,
}

impl std::fmt::Debug for SymbolGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl SymbolGraph {
    pub fn new() -> Self {
        SymbolGraph {
            inner: StableDiGraph::new(),
            by_name: HashMap::new(),
        }
    }

    fn intern(&mut self, canonical: &str) -> NodeIndex {
        if let Some(&idx) = self.by_name.get(canonical) {
            return idx;
        }
        let idx = self.inner.add_node(Node {
            canonical: canonical.to_string(),
            label: String::new(),
        });
        self.by_name.insert(canonical.to_string(), idx);
        idx
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.by_name.contains_key(canonical)
    }

    /// Get a node by canonical name. Named so it does not shadow the
    /// `DiagramSink::node` record method.
    pub fn node_by_name(&self, canonical: &str) -> Option<&Node> {
        self.by_name
            .get(canonical)
            .and_then(|&idx| self.inner.node_weight(idx))
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges, endpoints resolved to canonical names.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner.edge_references().map(|edge_ref| Edge {
            from: self.inner[edge_ref.source()].canonical.clone(),
            to: self.inner[edge_ref.target()].canonical.clone(),
            kind: *edge_ref.weight(),
        })
    }

    /// Check whether an edge of a specific kind links two names.
    pub fn has_edge(&self, from: &str, to: &str, kind: EdgeKind) -> bool {
        let (Some(&from_idx), Some(&to_idx)) = (self.by_name.get(from), self.by_name.get(to))
        else {
            return false;
        };
        self.inner
            .edges_directed(from_idx, Direction::Outgoing)
            .any(|edge_ref| edge_ref.target() == to_idx && *edge_ref.weight() == kind)
    }

    /// All outgoing edges of a node.
    pub fn edges_from(&self, from: &str) -> Vec<Edge> {
        let Some(&from_idx) = self.by_name.get(from) else {
            return Vec::new();
        };
        self.inner
            .edges_directed(from_idx, Direction::Outgoing)
            .map(|edge_ref| Edge {
                from: from.to_string(),
                to: self.inner[edge_ref.target()].canonical.clone(),
                kind: *edge_ref.weight(),
            })
            .collect()
    }
}

impl Default for SymbolGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramSink for SymbolGraph {
    fn header(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn node(&mut self, node: &Node) -> io::Result<()> {
        let idx = self.intern(&node.canonical);
        self.inner[idx] = node.clone();
        Ok(())
    }

    fn edge(&mut self, edge: &Edge) -> io::Result<()> {
        let from = self.intern(&edge.from);
        let to = self.intern(&edge.to);
        self.inner.add_edge(from, to, edge.kind);
        Ok(())
    }

    fn footer(&mut self) -> io::Result<()> {
        Ok(())
    }
}
