//! Run configuration

use serde::{Deserialize, Serialize};

/// Output serialization target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Graphviz,
    Mermaid,
}

/// Per-relationship-kind inclusion flags.
///
/// The first six gate relationship kinds. `enums` is a filter rather
/// than a relationship: it admits enum types into the graph regardless
/// of which relationship reached them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IncludeFlags {
    pub base: bool,
    pub derived: bool,
    pub implementations: bool,
    pub interfaces: bool,
    pub members: bool,
    pub type_args: bool,
    pub enums: bool,
}

impl IncludeFlags {
    /// Every relationship kind enabled. `enums` stays off.
    pub fn all_relationships() -> Self {
        IncludeFlags {
            base: true,
            derived: true,
            implementations: true,
            interfaces: true,
            members: true,
            type_args: true,
            enums: false,
        }
    }

    /// True when at least one relationship kind is enabled.
    pub fn any_relationship(&self) -> bool {
        self.base
            || self.derived
            || self.implementations
            || self.interfaces
            || self.members
            || self.type_args
    }

    /// Documented fallback: a flag set with every relationship disabled
    /// normalizes to one with every relationship enabled. Applied where
    /// configuration is constructed (the CLI); a core run handed a
    /// literal all-false set runs it as given and visits only the root.
    pub fn normalized(self) -> Self {
        if self.any_relationship() {
            self
        } else {
            IncludeFlags {
                enums: self.enums,
                ..IncludeFlags::all_relationships()
            }
        }
    }
}

/// Immutable configuration for a single run. No component mutates it
/// after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    pub format: OutputFormat,
    /// Canonical name of the root type; `None` means the model's entry
    /// root.
    pub root: Option<String>,
    pub include: IncludeFlags,
    /// Canonical names shut out of the graph entirely. Entries that
    /// match nothing are inert, not errors.
    pub exclude: Vec<String>,
}
