//! On-disk schema for a code-model document

use serde::{Deserialize, Serialize};

/// Declared kind of a type entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Namespace,
}

/// A single field declaration. Only the declared type matters to the
/// graph; the field name is carried for readability of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

fn default_true() -> bool {
    true
}

/// One declared type. Every relationship is expressed by canonical
/// name; names referenced but never declared are treated as external.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    /// Display label override; defaults to the shortened name.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default = "default_true")]
    pub in_source: bool,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub type_arguments: Vec<String>,
    /// Nested type declarations, by canonical name.
    #[serde(default)]
    pub nested: Vec<String>,
}

/// Root of the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelDocument {
    /// Canonical name of the program's entry-point type.
    #[serde(default)]
    pub entry_root: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}
