//! Code model provider trait

use crate::model::{Member, SymbolId};

/// Query surface of the external code model.
///
/// The traversal engine consumes symbols, relationships, and provenance
/// through this trait and reimplements none of the underlying analysis.
/// Derived-type and implementation searches are suspending operations at
/// the collaborator boundary; the builder awaits each one to completion
/// before issuing the next, so implementations never see overlapping
/// in-flight queries from a single run.
#[async_trait::async_trait]
pub trait CodeModel: Send + Sync {
    /// The program's entry-point type, if the model defines one.
    fn entry_root(&self) -> Option<SymbolId>;

    /// Resolve a type by canonical name.
    fn type_by_name(&self, name: &str) -> Option<SymbolId>;

    /// Fully-qualified, rendering-stable name. Node identity.
    fn canonical_name(&self, symbol: SymbolId) -> String;

    /// Short display label for diagram rendering.
    fn short_label(&self, symbol: SymbolId) -> String;

    /// Ordered member list of a type or namespace.
    fn members(&self, symbol: SymbolId) -> Vec<Member>;

    /// Base type, if any.
    fn base_type(&self, symbol: SymbolId) -> Option<SymbolId>;

    /// Interfaces the symbol implements.
    fn interfaces(&self, symbol: SymbolId) -> Vec<SymbolId>;

    /// Generic type arguments, empty when the symbol is not a generic
    /// instantiation.
    fn type_arguments(&self, symbol: SymbolId) -> Vec<SymbolId>;

    /// Whether the symbol's declaration lives in the analyzed source,
    /// as opposed to a library or runtime assembly.
    fn is_declared_in_source(&self, symbol: SymbolId) -> bool;

    /// Whether the symbol is an enum type.
    fn is_enum(&self, symbol: SymbolId) -> bool;

    /// Types deriving from the symbol. Suspending search.
    async fn find_derived_types(&self, symbol: SymbolId) -> anyhow::Result<Vec<SymbolId>>;

    /// Types implementing the symbol (an interface). Suspending search.
    async fn find_implementations(&self, symbol: SymbolId) -> anyhow::Result<Vec<SymbolId>>;

    /// Lazy walk over every type in the model's namespace tree, used by
    /// the interface-implementation seeding pass.
    fn all_types(&self) -> Box<dyn Iterator<Item = SymbolId> + '_>;
}
