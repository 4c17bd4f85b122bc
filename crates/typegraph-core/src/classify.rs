//! Edge admission rules

use crate::config::GraphConfig;
use crate::model::{EdgeKind, SymbolId};
use crate::provider::CodeModel;

/// A candidate target admitted into the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub target: SymbolId,
    pub canonical: String,
    pub kind: EdgeKind,
}

/// Pure decision logic for whether a reachable type becomes an edge.
///
/// The classifier never enqueues and never writes output; it only
/// advises the builder. Filters run in a fixed order and short-circuit
/// on the first rejection: exclusion list, enum filter, provenance.
pub struct EdgeClassifier<'a> {
    config: &'a GraphConfig,
}

impl<'a> EdgeClassifier<'a> {
    pub fn new(config: &'a GraphConfig) -> Self {
        EdgeClassifier { config }
    }

    /// Run every candidate through the admission filters. Accepted
    /// generic instantiations are additionally unwrapped into their
    /// type arguments when the `type_args` flag is set, each argument
    /// classified independently under the same filters.
    pub fn classify(
        &self,
        model: &dyn CodeModel,
        candidates: &[(SymbolId, EdgeKind)],
    ) -> Vec<Accepted> {
        let mut accepted = Vec::new();
        for &(target, kind) in candidates {
            self.admit(model, target, kind, &mut accepted);
        }
        accepted
    }

    fn admit(
        &self,
        model: &dyn CodeModel,
        target: SymbolId,
        kind: EdgeKind,
        out: &mut Vec<Accepted>,
    ) {
        if !self.passes_filters(model, target) {
            return;
        }
        out.push(Accepted {
            target,
            canonical: model.canonical_name(target),
            kind,
        });
        if self.config.include.type_args {
            for arg in model.type_arguments(target) {
                self.admit(model, arg, EdgeKind::TypeArgument, out);
            }
        }
    }

    /// The three rejection filters, without recording anything. Also
    /// used by the seeding pass to vet implementer types.
    pub fn passes_filters(&self, model: &dyn CodeModel, target: SymbolId) -> bool {
        let canonical = model.canonical_name(target);
        if self.config.exclude.iter().any(|name| *name == canonical) {
            return false;
        }
        if model.is_enum(target) && !self.config.include.enums {
            return false;
        }
        model.is_declared_in_source(target)
    }
}
