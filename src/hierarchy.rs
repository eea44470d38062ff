//! Inheritance-chain derivations consumed by the page emitter.

use crate::error::{RefsiteError, Result};
use crate::model::{GraphIndex, SymbolId};

/// Upper bound on base-type and override chain walks. The symbol hierarchy is
/// acyclic by contract; hitting this bound means the input graph is
/// malformed, and the walk reports a cycle instead of looping.
pub const MAX_INHERITANCE_DEPTH: usize = 256;

/// Ordered inheritance chain from the root ancestor down to the symbol
/// itself, inclusive.
pub fn inheritance_chain(index: &GraphIndex<'_>, id: SymbolId) -> Result<Vec<SymbolId>> {
	let mut chain = Vec::new();
	let mut curr = Some(id);
	while let Some(cid) = curr {
		if chain.len() >= MAX_INHERITANCE_DEPTH {
			debug_assert!(
				false,
				"base-type chain of `{}` exceeds {MAX_INHERITANCE_DEPTH} levels",
				index.display_string(id)
			);
			return Err(RefsiteError::CyclicHierarchy(
				index.display_string(id).to_string(),
			));
		}
		let symbol = index.symbol(cid)?;
		let ty = symbol.as_type().ok_or_else(|| {
			RefsiteError::InvalidGraph(format!(
				"`{}` appears in a base-type chain but is not a type",
				symbol.name
			))
		})?;
		chain.push(cid);
		curr = ty.base_type;
	}
	chain.reverse();
	Ok(chain)
}

/// Declared types whose base type is exactly `id`, sorted by display string
/// so emitted pages are byte-stable across runs.
pub fn direct_subtypes(index: &GraphIndex<'_>, id: SymbolId) -> Vec<SymbolId> {
	let mut subtypes: Vec<SymbolId> = index
		.declared_types()
		.iter()
		.copied()
		.filter(|&candidate| {
			index
				.get(candidate)
				.and_then(|symbol| symbol.as_type())
				.is_some_and(|ty| ty.base_type == Some(id))
		})
		.collect();
	subtypes.sort_by(|&a, &b| index.display_string(a).cmp(index.display_string(b)));
	subtypes
}
