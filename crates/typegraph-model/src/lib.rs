//! JSON code-model provider
//!
//! Loads a code-model document — the serialized output of an external
//! compiler/analyzer — and serves it through the `CodeModel` trait.

pub mod document;
pub mod loader;


pub use document::{FieldDecl, ModelDocument, TypeDecl, TypeKind};
pub use loader::{JsonModel, ModelError};
