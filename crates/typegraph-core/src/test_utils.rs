//! Hand-built in-memory code model for traversal tests

use std::collections::HashMap;

use crate::model::{Member, SymbolId};
use crate::provider::CodeModel;

#[derive(Default)]
struct FixtureType {
    name: String,
    in_source: bool,
    is_enum: bool,
    fields: Vec<SymbolId>,
    base: Option<SymbolId>,
    interfaces: Vec<SymbolId>,
    type_args: Vec<SymbolId>,
    nested: Vec<SymbolId>,
}

/// Minimal code model with relationships wired up by hand.
#[derive(Default)]
pub struct FixtureModel {
    types: Vec<FixtureType>,
    by_name: HashMap<String, SymbolId>,
    entry: Option<SymbolId>,
}

impl FixtureModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, name: &str, in_source: bool, is_enum: bool) -> SymbolId {
        let id = SymbolId(self.types.len() as u32);
        self.types.push(FixtureType {
            name: name.to_string(),
            in_source,
            is_enum,
            ..FixtureType::default()
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn add_type(&mut self, name: &str) -> SymbolId {
        self.push(name, true, false)
    }

    pub fn add_external(&mut self, name: &str) -> SymbolId {
        self.push(name, false, false)
    }

    pub fn add_enum(&mut self, name: &str) -> SymbolId {
        self.push(name, true, true)
    }

    pub fn set_entry(&mut self, id: SymbolId) {
        self.entry = Some(id);
    }

    pub fn field(&mut self, owner: SymbolId, ty: SymbolId) {
        self.types[owner.0 as usize].fields.push(ty);
    }

    pub fn set_base(&mut self, ty: SymbolId, base: SymbolId) {
        self.types[ty.0 as usize].base = Some(base);
    }

    pub fn implement(&mut self, ty: SymbolId, iface: SymbolId) {
        self.types[ty.0 as usize].interfaces.push(iface);
    }

    pub fn generic_args(&mut self, ty: SymbolId, args: &[SymbolId]) {
        self.types[ty.0 as usize].type_args.extend_from_slice(args);
    }

    pub fn nest(&mut self, owner: SymbolId, inner: SymbolId) {
        self.types[owner.0 as usize].nested.push(inner);
    }

    fn entry_ref(&self, id: SymbolId) -> &FixtureType {
        &self.types[id.0 as usize]
    }
}

#[async_trait::async_trait]
impl CodeModel for FixtureModel {
    fn entry_root(&self) -> Option<SymbolId> {
        self.entry
    }

    fn type_by_name(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).copied()
    }

    fn canonical_name(&self, symbol: SymbolId) -> String {
        self.entry_ref(symbol).name.clone()
    }

    fn short_label(&self, symbol: SymbolId) -> String {
        let name = self.entry_ref(symbol).name.as_str();
        name.rsplit('.').next().unwrap_or(name).to_string()
    }

    fn members(&self, symbol: SymbolId) -> Vec<Member> {
        let ty = self.entry_ref(symbol);
        let mut members: Vec<Member> = ty.fields.iter().map(|&f| Member::Field(f)).collect();
        members.extend(ty.nested.iter().map(|&n| Member::Nested(n)));
        members
    }

    fn base_type(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.entry_ref(symbol).base
    }

    fn interfaces(&self, symbol: SymbolId) -> Vec<SymbolId> {
        self.entry_ref(symbol).interfaces.clone()
    }

    fn type_arguments(&self, symbol: SymbolId) -> Vec<SymbolId> {
        self.entry_ref(symbol).type_args.clone()
    }

    fn is_declared_in_source(&self, symbol: SymbolId) -> bool {
        self.entry_ref(symbol).in_source
    }

    fn is_enum(&self, symbol: SymbolId) -> bool {
        self.entry_ref(symbol).is_enum
    }

    async fn find_derived_types(&self, symbol: SymbolId) -> anyhow::Result<Vec<SymbolId>> {
        Ok((0..self.types.len() as u32)
            .map(SymbolId)
            .filter(|&id| self.entry_ref(id).base == Some(symbol))
            .collect())
    }

    async fn find_implementations(&self, symbol: SymbolId) -> anyhow::Result<Vec<SymbolId>> {
        Ok((0..self.types.len() as u32)
            .map(SymbolId)
            .filter(|&id| self.entry_ref(id).interfaces.contains(&symbol))
            .collect())
    }

    fn all_types(&self) -> Box<dyn Iterator<Item = SymbolId> + '_> {
        Box::new((0..self.types.len() as u32).map(SymbolId))
    }
}

/// Sink that records the raw call sequence, for ordering and
/// duplicate-emission assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub nodes: Vec<crate::model::Node>,
    pub edges: Vec<crate::model::Edge>,
}

impl crate::render::DiagramSink for RecordingSink {
    fn header(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    fn node(&mut self, node: &crate::model::Node) -> std::io::Result<()> {
        self.nodes.push(node.clone());
        Ok(())
    }

    fn edge(&mut self, edge: &crate::model::Edge) -> std::io::Result<()> {
        self.edges.push(edge.clone());
        Ok(())
    }

    fn footer(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
