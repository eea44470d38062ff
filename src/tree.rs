//! Namespace/type tree for the site index.
//!
//! Declared types are inserted under their namespace path, creating
//! intermediate namespace nodes on demand. The tree is built once per run,
//! before any parallel per-type work, and is read-only afterwards.

use rustc_hash::FxHashMap;

use crate::model::{Symbol, SymbolId};

/// One path segment of the namespace/type hierarchy.
#[derive(Debug, Default)]
pub struct TreeNode {
	title: String,
	symbol: Option<SymbolId>,
	/// Children keyed by lowercased title; the displayed title keeps the
	/// casing of the first insertion.
	children: FxHashMap<String, TreeNode>,
}

impl TreeNode {
	/// Create the empty root node.
	pub fn root() -> Self {
		Self::default()
	}

	/// Display name of this path segment.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// The associated type symbol, or `None` for a pure namespace node.
	/// Pure namespace nodes are never directly navigable to a page.
	pub fn symbol(&self) -> Option<SymbolId> {
		self.symbol
	}

	/// Number of direct children.
	pub fn child_count(&self) -> usize {
		self.children.len()
	}

	/// Insert a declared type under its namespace path, creating or reusing
	/// a node per segment. Inserting the same symbol twice is a no-op beyond
	/// returning the existing leaf.
	pub fn insert(&mut self, id: SymbolId, symbol: &Symbol) -> &TreeNode {
		let mut curr = self;
		for segment in symbol.namespace.iter().rev() {
			curr = curr.get_or_create(segment);
		}
		let leaf = curr.get_or_create(&symbol.name);
		leaf.symbol = Some(id);
		leaf
	}

	/// Direct children, namespace nodes before type nodes and each group
	/// sorted by title, case-insensitively. This ordering is a rendering
	/// contract.
	pub fn children(&self) -> Vec<&TreeNode> {
		let mut nodes: Vec<&TreeNode> = self.children.values().collect();
		// Pure namespace nodes (no symbol) sort ahead of type nodes.
		nodes.sort_by(|a, b| {
			(a.symbol.is_some(), a.title.to_lowercase())
				.cmp(&(b.symbol.is_some(), b.title.to_lowercase()))
		});
		nodes
	}

	fn get_or_create(&mut self, title: &str) -> &mut TreeNode {
		self.children
			.entry(title.to_lowercase())
			.or_insert_with(|| TreeNode {
				title: title.to_string(),
				symbol: None,
				children: FxHashMap::default(),
			})
	}
}
