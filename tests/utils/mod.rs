//! Shared helpers for building symbol graphs in tests.
#![allow(dead_code)]

use refsite::model::{
	AttributeRecord, MemberKind, MemberSymbol, Symbol, SymbolGraph, SymbolId, SymbolKind,
	TypeKind, TypeSymbol,
};

/// Incrementally builds a [`SymbolGraph`] for tests.
pub struct GraphBuilder {
	graph: SymbolGraph,
	next: u32,
}

impl GraphBuilder {
	pub fn new() -> Self {
		Self {
			graph: SymbolGraph::default(),
			next: 0,
		}
	}

	fn insert(&mut self, symbol: Symbol) -> SymbolId {
		let id = SymbolId(self.next);
		self.next += 1;
		self.graph.symbols.insert(id, symbol);
		id
	}

	fn class(&mut self, name: &str, namespace: &[&str]) -> SymbolId {
		self.insert(Symbol {
			name: name.to_string(),
			namespace: namespace.iter().map(|s| s.to_string()).collect(),
			containing_type: None,
			is_static: false,
			docs: None,
			attributes: Vec::new(),
			kind: SymbolKind::Type(TypeSymbol {
				kind: TypeKind::Class,
				base_type: None,
				members: Vec::new(),
				is_anonymous: false,
			}),
		})
	}

	/// Add a class that receives a page in this run. `namespace` is the
	/// containment chain, innermost first.
	pub fn declared_class(&mut self, name: &str, namespace: &[&str]) -> SymbolId {
		let id = self.class(name, namespace);
		self.graph.declared.push(id);
		id
	}

	/// Add a class known to the graph but not declared in this run.
	pub fn external_class(&mut self, name: &str, namespace: &[&str]) -> SymbolId {
		self.class(name, namespace)
	}

	/// Mark a declared class as anonymous.
	pub fn set_anonymous(&mut self, ty: SymbolId) {
		if let Some(SymbolKind::Type(data)) =
			self.graph.symbols.get_mut(&ty).map(|s| &mut s.kind)
		{
			data.is_anonymous = true;
		}
	}

	pub fn set_base(&mut self, ty: SymbolId, base: SymbolId) {
		if let Some(SymbolKind::Type(data)) =
			self.graph.symbols.get_mut(&ty).map(|s| &mut s.kind)
		{
			data.base_type = Some(base);
		}
	}

	fn member(&mut self, owner: SymbolId, name: &str, kind: MemberKind) -> SymbolId {
		let namespace = self
			.graph
			.symbols
			.get(&owner)
			.map(|s| s.namespace.clone())
			.unwrap_or_default();
		let id = self.insert(Symbol {
			name: name.to_string(),
			namespace,
			containing_type: Some(owner),
			is_static: false,
			docs: None,
			attributes: Vec::new(),
			kind: SymbolKind::Member(MemberSymbol {
				kind,
				overrides: None,
				synthesized: false,
			}),
		});
		if let Some(SymbolKind::Type(data)) =
			self.graph.symbols.get_mut(&owner).map(|s| &mut s.kind)
		{
			data.members.push(id);
		}
		id
	}

	pub fn constructor(&mut self, owner: SymbolId, name: &str) -> SymbolId {
		self.member(owner, name, MemberKind::Constructor)
	}

	pub fn property(&mut self, owner: SymbolId, name: &str) -> SymbolId {
		self.member(owner, name, MemberKind::Property)
	}

	pub fn method(&mut self, owner: SymbolId, name: &str) -> SymbolId {
		self.member(owner, name, MemberKind::Method)
	}

	pub fn event(&mut self, owner: SymbolId, name: &str) -> SymbolId {
		self.member(owner, name, MemberKind::Event)
	}

	pub fn set_overrides(&mut self, member: SymbolId, overridden: SymbolId) {
		if let Some(SymbolKind::Member(data)) =
			self.graph.symbols.get_mut(&member).map(|s| &mut s.kind)
		{
			data.overrides = Some(overridden);
		}
	}

	pub fn set_synthesized(&mut self, member: SymbolId) {
		if let Some(SymbolKind::Member(data)) =
			self.graph.symbols.get_mut(&member).map(|s| &mut s.kind)
		{
			data.synthesized = true;
		}
	}

	pub fn set_static(&mut self, id: SymbolId) {
		if let Some(symbol) = self.graph.symbols.get_mut(&id) {
			symbol.is_static = true;
		}
	}

	pub fn set_docs(&mut self, id: SymbolId, docs: &str) {
		if let Some(symbol) = self.graph.symbols.get_mut(&id) {
			symbol.docs = Some(docs.to_string());
		}
	}

	pub fn add_attribute(&mut self, id: SymbolId, name: &str, value: &str) {
		if let Some(symbol) = self.graph.symbols.get_mut(&id) {
			symbol.attributes.push(AttributeRecord {
				name: name.to_string(),
				value: value.to_string(),
			});
		}
	}

	pub fn build(self) -> SymbolGraph {
		self.graph
	}
}
