//! The symbol model consumed by the generator.
//!
//! A [`SymbolGraph`] is the fully resolved, read-only output of an external
//! semantic-analysis front end, deserialized from JSON. The generator never
//! mutates it; every downstream component works against the indexed view in
//! [`index::GraphIndex`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Indexed read-only view over a symbol graph.
pub mod index;

pub use self::index::GraphIndex;

/// Key referencing a symbol inside a [`SymbolGraph`].
///
/// Ids are assigned by the front end and are only meaningful within the graph
/// that contains them. They are distinct from the run-stable identifiers
/// derived in [`crate::ident`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// Classification of a type symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
	/// Reference type with an inheritance chain.
	Class,
	/// Abstract contract type.
	Interface,
	/// Value type.
	Struct,
	/// Enumeration type.
	Enum,
	/// Callable signature type.
	Delegate,
}

/// Classification of a member symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
	/// Instance or static constructor.
	Constructor,
	/// Property with accessors.
	Property,
	/// Ordinary method.
	Method,
	/// Event declaration.
	Event,
}

/// A custom attribute attached to a symbol, as a resolved name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord {
	/// Simple attribute name, e.g. `Description`.
	pub name: String,
	/// First constructor argument rendered as text.
	pub value: String,
}

/// Type-specific fields of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSymbol {
	/// Classification of the type.
	pub kind: TypeKind,
	/// Base type, absent at the root of a hierarchy or when the base is
	/// unknown to the front end.
	#[serde(default)]
	pub base_type: Option<SymbolId>,
	/// Members in declaration order.
	#[serde(default)]
	pub members: Vec<SymbolId>,
	/// Whether the type is compiler-generated and unnamed. Anonymous types
	/// never receive pages and never join the namespace tree.
	#[serde(default)]
	pub is_anonymous: bool,
}

/// Member-specific fields of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSymbol {
	/// Classification of the member.
	pub kind: MemberKind,
	/// Back-reference to the member this one overrides, when any.
	#[serde(default)]
	pub overrides: Option<SymbolId>,
	/// Whether the member was synthesized by the compiler (implicit
	/// constructors, accessor methods, static constructors, operators).
	#[serde(default)]
	pub synthesized: bool,
}

/// Kind-specific payload of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
	/// A named type.
	Type(TypeSymbol),
	/// A member owned by a type.
	Member(MemberSymbol),
}

/// One entity in the resolved program model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
	/// Simple name of the symbol, including any generic brackets,
	/// e.g. `List<T>`.
	pub name: String,
	/// Containing namespace chain, innermost segment first. Empty for
	/// symbols in the global namespace.
	#[serde(default)]
	pub namespace: Vec<String>,
	/// Containing type for members and nested types.
	#[serde(default)]
	pub containing_type: Option<SymbolId>,
	/// Whether the symbol is declared `static`.
	#[serde(default)]
	pub is_static: bool,
	/// Raw structured documentation-comment text, an XML fragment.
	#[serde(default)]
	pub docs: Option<String>,
	/// Custom attributes in declaration order.
	#[serde(default)]
	pub attributes: Vec<AttributeRecord>,
	/// Kind-specific payload.
	pub kind: SymbolKind,
}

impl Symbol {
	/// Type payload, when this symbol is a type.
	pub fn as_type(&self) -> Option<&TypeSymbol> {
		match &self.kind {
			SymbolKind::Type(ty) => Some(ty),
			SymbolKind::Member(_) => None,
		}
	}

	/// Member payload, when this symbol is a member.
	pub fn as_member(&self) -> Option<&MemberSymbol> {
		match &self.kind {
			SymbolKind::Member(member) => Some(member),
			SymbolKind::Type(_) => None,
		}
	}
}

/// A fully resolved symbol graph plus the set of types to generate pages for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolGraph {
	/// Every symbol known to the front end, keyed by graph id. Includes
	/// externally defined types referenced from declared code.
	pub symbols: HashMap<SymbolId, Symbol>,
	/// Types declared in the current project, in front-end order. Pages are
	/// generated for these; everything else resolves as external.
	#[serde(default)]
	pub declared: Vec<SymbolId>,
}
