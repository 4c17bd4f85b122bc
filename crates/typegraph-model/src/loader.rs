//! Interned code model backed by a JSON document

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use typegraph_core::{CodeModel, Member, SymbolId};

use crate::document::{ModelDocument, TypeKind};

/// Failures while loading a code-model document. All terminal.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read code model `{path}`")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse code model `{path}`")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("type `{0}` is declared more than once")]
    Duplicate(String),
}

#[derive(Debug)]
struct Entry {
    name: String,
    label: Option<String>,
    kind: TypeKind,
    in_source: bool,
    /// Declared in the document, as opposed to interned from a
    /// reference.
    declared: bool,
    fields: Vec<SymbolId>,
    base: Option<SymbolId>,
    interfaces: Vec<SymbolId>,
    type_args: Vec<SymbolId>,
    nested: Vec<SymbolId>,
}

impl Entry {
    fn external(name: &str) -> Self {
        Entry {
            name: name.to_string(),
            label: None,
            kind: TypeKind::Class,
            in_source: false,
            declared: false,
            fields: Vec::new(),
            base: None,
            interfaces: Vec::new(),
            type_args: Vec::new(),
            nested: Vec::new(),
        }
    }
}

#[derive(Default)]
struct Interner {
    entries: Vec<Entry>,
    by_name: HashMap<String, SymbolId>,
}

impl Interner {
    /// Intern a referenced name, creating a synthetic external entry if
    /// the document never declares it. Synthetic generic instantiations
    /// keep their argument structure, parsed from the name itself.
    fn intern_ref(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = SymbolId(self.entries.len() as u32);
        self.entries.push(Entry::external(name));
        self.by_name.insert(name.to_string(), id);
        if let Some((_, args)) = split_generic(name) {
            let arg_ids: Vec<SymbolId> = args.iter().map(|arg| self.intern_ref(arg)).collect();
            self.entries[id.0 as usize].type_args = arg_ids;
        }
        id
    }
}

/// Code model served from a parsed document. Read-only after
/// construction; derived-type and implementation searches run against
/// inverted indexes built at load time.
pub struct JsonModel {
    entries: Vec<Entry>,
    by_name: HashMap<String, SymbolId>,
    entry_root: Option<SymbolId>,
    derived: Vec<Vec<SymbolId>>,
    implementers: Vec<Vec<SymbolId>>,
}

impl JsonModel {
    /// Read and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let doc: ModelDocument =
            serde_json::from_str(&text).map_err(|source| ModelError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        let model = Self::from_document(doc)?;
        tracing::info!(
            declared = model.declared_count(),
            interned = model.entries.len(),
            "loaded code model from {}",
            path.display()
        );
        Ok(model)
    }

    pub fn from_document(doc: ModelDocument) -> Result<Self, ModelError> {
        let mut interner = Interner::default();

        // pass 1: declared names claim their ids first
        for decl in &doc.types {
            if interner.by_name.contains_key(&decl.name) {
                return Err(ModelError::Duplicate(decl.name.clone()));
            }
            let id = SymbolId(interner.entries.len() as u32);
            interner.entries.push(Entry {
                name: decl.name.clone(),
                label: decl.label.clone(),
                kind: decl.kind,
                in_source: decl.in_source,
                declared: true,
                fields: Vec::new(),
                base: None,
                interfaces: Vec::new(),
                type_args: Vec::new(),
                nested: Vec::new(),
            });
            interner.by_name.insert(decl.name.clone(), id);
        }

        // pass 2: resolve every reference, interning unknowns
        for (index, decl) in doc.types.iter().enumerate() {
            let fields: Vec<SymbolId> = decl
                .fields
                .iter()
                .map(|field| interner.intern_ref(&field.ty))
                .collect();
            let base = decl.base.as_deref().map(|name| interner.intern_ref(name));
            let interfaces: Vec<SymbolId> = decl
                .interfaces
                .iter()
                .map(|name| interner.intern_ref(name))
                .collect();
            let mut type_args: Vec<SymbolId> = decl
                .type_arguments
                .iter()
                .map(|name| interner.intern_ref(name))
                .collect();
            if type_args.is_empty() {
                if let Some((_, args)) = split_generic(&decl.name) {
                    type_args = args.iter().map(|arg| interner.intern_ref(arg)).collect();
                }
            }
            let nested: Vec<SymbolId> = decl
                .nested
                .iter()
                .map(|name| interner.intern_ref(name))
                .collect();

            let entry = &mut interner.entries[index];
            entry.fields = fields;
            entry.base = base;
            entry.interfaces = interfaces;
            entry.type_args = type_args;
            entry.nested = nested;
        }

        let entry_root = doc
            .entry_root
            .as_deref()
            .and_then(|name| interner.by_name.get(name).copied());

        // inverted indexes for the suspending searches
        let total = interner.entries.len();
        let mut derived = vec![Vec::new(); total];
        let mut implementers = vec![Vec::new(); total];
        for (index, entry) in interner.entries.iter().enumerate() {
            let id = SymbolId(index as u32);
            if let Some(base) = entry.base {
                derived[base.0 as usize].push(id);
            }
            for &iface in &entry.interfaces {
                implementers[iface.0 as usize].push(id);
            }
        }

        Ok(JsonModel {
            entries: interner.entries,
            by_name: interner.by_name,
            entry_root,
            derived,
            implementers,
        })
    }

    /// Number of types the document declares (synthetic references
    /// excluded).
    pub fn declared_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.declared).count()
    }

    fn entry(&self, id: SymbolId) -> &Entry {
        &self.entries[id.0 as usize]
    }
}

#[async_trait::async_trait]
impl CodeModel for JsonModel {
    fn entry_root(&self) -> Option<SymbolId> {
        self.entry_root
    }

    fn type_by_name(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).copied()
    }

    fn canonical_name(&self, symbol: SymbolId) -> String {
        self.entry(symbol).name.clone()
    }

    fn short_label(&self, symbol: SymbolId) -> String {
        let entry = self.entry(symbol);
        entry
            .label
            .clone()
            .unwrap_or_else(|| shorten(&entry.name))
    }

    fn members(&self, symbol: SymbolId) -> Vec<Member> {
        let entry = self.entry(symbol);
        let mut members: Vec<Member> = entry.fields.iter().map(|&ty| Member::Field(ty)).collect();
        for &inner in &entry.nested {
            members.push(match self.entry(inner).kind {
                TypeKind::Namespace => Member::Namespace(inner),
                _ => Member::Nested(inner),
            });
        }
        members
    }

    fn base_type(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.entry(symbol).base
    }

    fn interfaces(&self, symbol: SymbolId) -> Vec<SymbolId> {
        self.entry(symbol).interfaces.clone()
    }

    fn type_arguments(&self, symbol: SymbolId) -> Vec<SymbolId> {
        self.entry(symbol).type_args.clone()
    }

    fn is_declared_in_source(&self, symbol: SymbolId) -> bool {
        self.entry(symbol).in_source
    }

    fn is_enum(&self, symbol: SymbolId) -> bool {
        self.entry(symbol).kind == TypeKind::Enum
    }

    async fn find_derived_types(&self, symbol: SymbolId) -> anyhow::Result<Vec<SymbolId>> {
        Ok(self.derived[symbol.0 as usize].clone())
    }

    async fn find_implementations(&self, symbol: SymbolId) -> anyhow::Result<Vec<SymbolId>> {
        Ok(self.implementers[symbol.0 as usize].clone())
    }

    fn all_types(&self) -> Box<dyn Iterator<Item = SymbolId> + '_> {
        Box::new(
            self.entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.declared && entry.kind != TypeKind::Namespace)
                .map(|(index, _)| SymbolId(index as u32)),
        )
    }
}

/// Split `Head<Arg, Arg>` into head and top-level arguments.
fn split_generic(name: &str) -> Option<(&str, Vec<String>)> {
    let open = name.find('<')?;
    if !name.ends_with('>') {
        return None;
    }
    let head = &name[..open];
    let inner = &name[open + 1..name.len() - 1];
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (offset, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(inner[start..offset].trim().to_string());
                start = offset + 1;
            }
            _ => {}
        }
    }
    let last = inner[start..].trim();
    if !last.is_empty() {
        args.push(last.to_string());
    }
    Some((head, args))
}

fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Strip namespace qualifiers outside angle brackets and shorten
/// argument lists recursively: `App.Wrap<App.Inner>` → `Wrap<Inner>`.
pub(crate) fn shorten(name: &str) -> String {
    match split_generic(name) {
        Some((head, args)) => {
            let short_args: Vec<String> = args.iter().map(|arg| shorten(arg)).collect();
            format!("{}<{}>", last_segment(head), short_args.join(", "))
        }
        None => last_segment(name).to_string(),
    }
}
