//! Breadth-first symbol graph construction

use std::collections::{HashSet, VecDeque};

use crate::classify::EdgeClassifier;
use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::model::{Edge, EdgeKind, Member, Node, SymbolId};
use crate::provider::CodeModel;
use crate::render::DiagramSink;

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub nodes: usize,
    pub edges: usize,
}

/// Bounded breadth-first traversal over the implicit graph whose nodes
/// are code-model symbols and whose edges the provider supplies lazily.
///
/// All traversal state lives on the instance: one builder per run,
/// nothing shared across runs. Node records stream to the sink in
/// strict FIFO discovery order; each node's record is emitted before
/// the next symbol is dequeued, so partial output is well-formed up to
/// the point of interruption.
pub struct GraphBuilder<'a> {
    config: &'a GraphConfig,
    visited: HashSet<String>,
    frontier: VecDeque<SymbolId>,
    /// Interfaces reached through `Interface` edges, in discovery
    /// order. These expand through the seeding pass, not the frontier.
    discovered_interfaces: Vec<String>,
    /// Implementation edges already emitted, across both the expansion
    /// path and the seeding pass.
    impl_edges: HashSet<(String, String)>,
    stats: BuildStats,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(config: &'a GraphConfig) -> Self {
        GraphBuilder {
            config,
            visited: HashSet::new(),
            frontier: VecDeque::new(),
            discovered_interfaces: Vec::new(),
            impl_edges: HashSet::new(),
            stats: BuildStats::default(),
        }
    }

    /// Run the traversal from `root`, streaming node and edge records
    /// into `sink`. Terminates because the model holds finitely many
    /// distinct canonical names and each is expanded at most once.
    pub async fn build(
        &mut self,
        model: &dyn CodeModel,
        root: SymbolId,
        sink: &mut dyn DiagramSink,
    ) -> Result<BuildStats, GraphError> {
        self.frontier.push_back(root);
        self.drain(model, sink).await?;
        self.seed_implementations(model, sink).await?;
        tracing::debug!(
            nodes = self.stats.nodes,
            edges = self.stats.edges,
            "traversal complete"
        );
        Ok(self.stats)
    }

    async fn drain(
        &mut self,
        model: &dyn CodeModel,
        sink: &mut dyn DiagramSink,
    ) -> Result<(), GraphError> {
        while let Some(symbol) = self.frontier.pop_front() {
            let canonical = model.canonical_name(symbol);
            if !self.visited.insert(canonical.clone()) {
                // duplicate enqueue is the expected steady state
                continue;
            }
            self.expand(model, symbol, canonical, sink).await?;
        }
        Ok(())
    }

    /// Emit the node record for `symbol`, then classify and record its
    /// outgoing edges, enqueueing accepted targets.
    async fn expand(
        &mut self,
        model: &dyn CodeModel,
        symbol: SymbolId,
        canonical: String,
        sink: &mut dyn DiagramSink,
    ) -> Result<(), GraphError> {
        tracing::debug!(symbol = %canonical, "expanding");
        sink.node(&Node {
            canonical: canonical.clone(),
            label: model.short_label(symbol),
        })?;
        self.stats.nodes += 1;

        let candidates = self.gather_candidates(model, symbol).await?;
        let classifier = EdgeClassifier::new(self.config);
        let accepted = classifier.classify(model, &candidates);

        let mut seen: HashSet<(String, EdgeKind)> = HashSet::new();
        for hit in accepted {
            if hit.canonical == canonical {
                // an edge never targets its own source
                continue;
            }
            if !seen.insert((hit.canonical.clone(), hit.kind)) {
                continue;
            }
            if hit.kind == EdgeKind::Implementation
                && !self
                    .impl_edges
                    .insert((canonical.clone(), hit.canonical.clone()))
            {
                continue;
            }
            if hit.kind == EdgeKind::Interface {
                if !self.discovered_interfaces.contains(&hit.canonical) {
                    self.discovered_interfaces.push(hit.canonical.clone());
                }
            } else {
                self.frontier.push_back(hit.target);
            }
            sink.edge(&Edge {
                from: canonical.clone(),
                to: hit.canonical,
                kind: hit.kind,
            })?;
            self.stats.edges += 1;
        }
        Ok(())
    }

    /// Collect the candidate relationship set for one symbol, gated by
    /// the configuration flags. Suspending provider queries are awaited
    /// one at a time.
    async fn gather_candidates(
        &mut self,
        model: &dyn CodeModel,
        symbol: SymbolId,
    ) -> Result<Vec<(SymbolId, EdgeKind)>, GraphError> {
        let include = self.config.include;
        let mut candidates = Vec::new();

        if include.members {
            for member in model.members(symbol) {
                match member {
                    Member::Field(ty) => candidates.push((ty, EdgeKind::Member)),
                    // nested declarations are expanded but draw no edge
                    Member::Nested(inner) | Member::Namespace(inner) => {
                        let classifier = EdgeClassifier::new(self.config);
                        if classifier.passes_filters(model, inner) {
                            self.frontier.push_back(inner);
                        }
                    }
                }
            }
        }
        if include.base {
            if let Some(base) = model.base_type(symbol) {
                candidates.push((base, EdgeKind::Base));
            }
        }
        if include.interfaces {
            for iface in model.interfaces(symbol) {
                candidates.push((iface, EdgeKind::Interface));
            }
        }
        if include.derived {
            for derived in model.find_derived_types(symbol).await? {
                candidates.push((derived, EdgeKind::Derived));
            }
        }
        if include.implementations {
            for implementer in model.find_implementations(symbol).await? {
                candidates.push((implementer, EdgeKind::Implementation));
            }
        }
        Ok(candidates)
    }

    /// Second-order discovery: every in-source type implementing an
    /// interface reached during the primary traversal is fed back into
    /// the frontier, the interface itself becomes a node, and the
    /// traversal runs to exhaustion again. Repeats until no new
    /// interfaces turn up, which happens for the same reason the
    /// primary pass terminates.
    ///
    /// The interface → implementer edges recorded here pass the
    /// classifier's filters but are not gated by the `implementations`
    /// flag, which only controls expansion-time searches.
    async fn seed_implementations(
        &mut self,
        model: &dyn CodeModel,
        sink: &mut dyn DiagramSink,
    ) -> Result<(), GraphError> {
        let mut next = 0;
        while next < self.discovered_interfaces.len() {
            let batch: Vec<String> = self.discovered_interfaces[next..].to_vec();
            next = self.discovered_interfaces.len();
            tracing::debug!(interfaces = batch.len(), "seeding implementers");

            for name in &batch {
                if let Some(iface) = model.type_by_name(name) {
                    self.frontier.push_back(iface);
                }
            }

            let classifier = EdgeClassifier::new(self.config);
            for ty in model.all_types() {
                if !classifier.passes_filters(model, ty) {
                    continue;
                }
                let ty_name = model.canonical_name(ty);
                for iface in model.interfaces(ty) {
                    let iface_name = model.canonical_name(iface);
                    if iface_name == ty_name || !batch.contains(&iface_name) {
                        continue;
                    }
                    self.frontier.push_back(ty);
                    if self
                        .impl_edges
                        .insert((iface_name.clone(), ty_name.clone()))
                    {
                        sink.edge(&Edge {
                            from: iface_name,
                            to: ty_name.clone(),
                            kind: EdgeKind::Implementation,
                        })?;
                        self.stats.edges += 1;
                    }
                }
            }

            self.drain(model, sink).await?;
        }
        Ok(())
    }
}
