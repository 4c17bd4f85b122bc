//! Error types for graph construction

use thiserror::Error;

/// Terminal failures of a traversal run. The engine does not retry or
/// degrade; the caller surfaces these before a footer is ever written.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The configured root name does not resolve in the code model.
    #[error("root type `{0}` not found in code model")]
    RootNotFound(String),

    /// No root override was given and the model defines no entry point.
    #[error("code model defines no entry root")]
    NoEntryRoot,

    /// A relationship query failed at the provider boundary.
    #[error("code model query failed")]
    Query(#[from] anyhow::Error),

    /// Writing to the diagram sink failed.
    #[error("diagram output failed")]
    Io(#[from] std::io::Error),
}
