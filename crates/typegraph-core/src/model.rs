//! Core data structures for the symbol graph

use serde::{Deserialize, Serialize};

/// Opaque handle to a type or namespace inside the active code model.
///
/// Only meaningful to the provider instance that produced it. The graph
/// itself never keys anything by handle: node identity is the canonical
/// name, so two distinct handles that render to the same canonical name
/// are the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// What kind of relationship an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// A field member whose declared type is the target.
    Member,
    /// The target is the base type of the source.
    Base,
    /// The source implements the target interface.
    Interface,
    /// The target derives from the source.
    Derived,
    /// The target implements the source interface.
    Implementation,
    /// The target appears as a generic type argument on the source.
    TypeArgument,
}

/// A graph vertex. Created the first time a symbol is dequeued for
/// expansion; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Fully-qualified, rendering-stable identity. The graph's node key.
    pub canonical: String,
    /// Short display label shown inside the rendered node.
    pub label: String,
}

/// A directed edge between two canonical names.
///
/// Write-once: edges between the same endpoints but of different kinds
/// stay distinct, while duplicate (target, kind) pairs within a single
/// node's expansion are collapsed before they reach a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

/// A single entry in a symbol's member list.
///
/// Closed discriminant so the builder and classifier switch on a fixed
/// set of member shapes instead of probing the provider at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member {
    /// A field with a declared type.
    Field(SymbolId),
    /// A nested type declaration. Expanded, but draws no edge.
    Nested(SymbolId),
    /// A child namespace. Expanded, but draws no edge.
    Namespace(SymbolId),
}
