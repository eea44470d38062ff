//! Indexed read-only view over a [`SymbolGraph`].

use rustc_hash::{FxHashMap, FxHashSet};

use super::{Symbol, SymbolGraph, SymbolId, SymbolKind};
use crate::error::{RefsiteError, Result};

/// Maximum depth of a containing-type chain tolerated while qualifying names.
/// Deeper nesting indicates a malformed graph.
const MAX_NESTING_DEPTH: usize = 64;

/// Read-only index over a symbol graph.
///
/// Construction walks the graph once to precompute fully qualified display
/// strings, the declared-type set, and a name lookup table used for
/// cross-reference resolution. All later queries are cheap and infallible on
/// ids that came out of the same graph.
pub struct GraphIndex<'a> {
	graph: &'a SymbolGraph,
	/// Fully qualified display string per symbol.
	names: FxHashMap<SymbolId, String>,
	/// Declared, non-anonymous types eligible for page generation, in
	/// front-end order.
	declared_order: Vec<SymbolId>,
	/// Set view of `declared_order` for membership tests.
	declared: FxHashSet<SymbolId>,
	/// Fully qualified name to type symbol, covering every type in the graph.
	types_by_name: FxHashMap<String, SymbolId>,
}

impl<'a> GraphIndex<'a> {
	/// Build the index, validating that every referenced id resolves.
	pub fn new(graph: &'a SymbolGraph) -> Result<Self> {
		let mut names = FxHashMap::default();
		let mut types_by_name: FxHashMap<String, SymbolId> = FxHashMap::default();

		for (&id, symbol) in &graph.symbols {
			let qualified = qualify(graph, symbol)?;
			if matches!(symbol.kind, SymbolKind::Type(_)) {
				let previous = types_by_name.insert(qualified.clone(), id);
				debug_assert!(
					previous.is_none() || previous == Some(id),
					"two distinct type symbols share the qualified name `{qualified}`"
				);
			}
			names.insert(id, qualified);
		}

		let mut declared_order = Vec::with_capacity(graph.declared.len());
		let mut declared = FxHashSet::default();
		for &id in &graph.declared {
			let symbol = graph
				.symbols
				.get(&id)
				.ok_or(RefsiteError::DanglingId(id))?;
			let ty = symbol.as_type().ok_or_else(|| {
				RefsiteError::InvalidGraph(format!(
					"declared id {} refers to `{}`, which is not a type",
					id.0, symbol.name
				))
			})?;
			if ty.is_anonymous {
				continue;
			}
			if declared.insert(id) {
				declared_order.push(id);
			}
		}

		Ok(Self {
			graph,
			names,
			declared_order,
			declared,
			types_by_name,
		})
	}

	/// The underlying graph.
	pub fn graph(&self) -> &'a SymbolGraph {
		self.graph
	}

	/// Look up a symbol, reporting a dangling id as a graph error.
	pub fn symbol(&self, id: SymbolId) -> Result<&'a Symbol> {
		self.graph
			.symbols
			.get(&id)
			.ok_or(RefsiteError::DanglingId(id))
	}

	/// Look up a symbol without an error path.
	pub fn get(&self, id: SymbolId) -> Option<&'a Symbol> {
		self.graph.symbols.get(&id)
	}

	/// Fully qualified display string for a symbol, empty if unknown.
	pub fn display_string(&self, id: SymbolId) -> &str {
		self.names.get(&id).map(String::as_str).unwrap_or("")
	}

	/// Whether a type receives a local page in this run.
	pub fn is_declared(&self, id: SymbolId) -> bool {
		self.declared.contains(&id)
	}

	/// Declared, non-anonymous types in front-end order.
	pub fn declared_types(&self) -> &[SymbolId] {
		&self.declared_order
	}

	/// Resolve a fully qualified type name against the whole graph.
	pub fn lookup_qualified(&self, name: &str) -> Option<SymbolId> {
		self.types_by_name.get(name).copied()
	}
}

/// Compute the fully qualified display string for a symbol: namespace chain
/// outermost first, then the containing-type chain, then the symbol's own
/// name, joined with `.`.
fn qualify(graph: &SymbolGraph, symbol: &Symbol) -> Result<String> {
	let mut type_chain = Vec::new();
	let mut curr = symbol.containing_type;
	while let Some(id) = curr {
		if type_chain.len() >= MAX_NESTING_DEPTH {
			debug_assert!(false, "containing-type chain for `{}` is cyclic", symbol.name);
			return Err(RefsiteError::CyclicHierarchy(symbol.name.clone()));
		}
		let parent = graph
			.symbols
			.get(&id)
			.ok_or(RefsiteError::DanglingId(id))?;
		type_chain.push(parent.name.as_str());
		curr = parent.containing_type;
	}

	let mut parts: Vec<&str> = symbol.namespace.iter().rev().map(String::as_str).collect();
	parts.extend(type_chain.iter().rev());
	parts.push(&symbol.name);
	Ok(parts.join("."))
}
