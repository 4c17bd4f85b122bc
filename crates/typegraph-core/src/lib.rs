//! Typegraph Core — traversal engine, edge classification, and diagram emitters

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod provider;
pub mod render;


#[cfg(test)]
pub mod test_utils;

pub use builder::{BuildStats, GraphBuilder};
pub use classify::{Accepted, EdgeClassifier};
pub use config::{GraphConfig, IncludeFlags, OutputFormat};
pub use error::GraphError;
pub use graph::SymbolGraph;
pub use model::{Edge, EdgeKind, Member, Node, SymbolId};
pub use provider::CodeModel;
pub use render::{mermaid_safe, DiagramSink, GraphvizEmitter, MermaidEmitter};
