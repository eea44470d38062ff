//! Override-aware flattening of a type's inheritance chain into the member
//! lists displayed on its page.

use rustc_hash::FxHashSet;

use crate::error::{RefsiteError, Result};
use crate::hierarchy::MAX_INHERITANCE_DEPTH;
use crate::model::{GraphIndex, MemberKind, SymbolId};

/// One row of a member table: the member plus the type that declares it, so
/// the emitter can annotate inherited entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberEntry {
	/// The member symbol.
	pub member: SymbolId,
	/// The type the member is declared on. Differs from the rendered type
	/// for inherited entries.
	pub declaring_type: SymbolId,
}

/// Resolved member lists for one type page, per display category.
#[derive(Debug, Default)]
pub struct TypeMembers {
	/// Non-synthesized constructors of the type itself, declaration order.
	/// Constructors are not inherited.
	pub constructors: Vec<MemberEntry>,
	/// Properties across the inheritance chain, most-derived first, with
	/// overridden ancestors removed.
	pub properties: Vec<MemberEntry>,
	/// Methods across the inheritance chain with overridden ancestors,
	/// synthesized members, and statics removed; sorted by name.
	pub methods: Vec<MemberEntry>,
	/// Events of the type itself, declaration order.
	pub events: Vec<MemberEntry>,
}

/// Walk the inheritance chain of `type_id` and produce its de-duplicated
/// member lists.
///
/// A member is dropped once a more-derived member seen earlier in the walk
/// records it as overridden. Methods are name-sorted at the end; the
/// declaration-order handling of constructors and events is intentional and
/// must not be unified with it.
pub fn resolve_members(index: &GraphIndex<'_>, type_id: SymbolId) -> Result<TypeMembers> {
	let mut out = TypeMembers::default();
	let mut overridden_properties: FxHashSet<SymbolId> = FxHashSet::default();
	let mut overridden_methods: FxHashSet<SymbolId> = FxHashSet::default();

	let mut curr = Some(type_id);
	let mut depth = 0usize;
	while let Some(cid) = curr {
		if depth >= MAX_INHERITANCE_DEPTH {
			debug_assert!(
				false,
				"base-type chain of `{}` exceeds {MAX_INHERITANCE_DEPTH} levels",
				index.display_string(type_id)
			);
			return Err(RefsiteError::CyclicHierarchy(
				index.display_string(type_id).to_string(),
			));
		}
		let symbol = index.symbol(cid)?;
		let ty = symbol.as_type().ok_or_else(|| {
			RefsiteError::InvalidGraph(format!(
				"`{}` appears in a base-type chain but is not a type",
				symbol.name
			))
		})?;

		for &member_id in &ty.members {
			let member_symbol = index.symbol(member_id)?;
			let Some(member) = member_symbol.as_member() else {
				continue;
			};
			let entry = MemberEntry {
				member: member_id,
				declaring_type: cid,
			};
			match member.kind {
				MemberKind::Constructor => {
					if cid == type_id && !member.synthesized {
						out.constructors.push(entry);
					}
				}
				MemberKind::Event => {
					if cid == type_id {
						out.events.push(entry);
					}
				}
				MemberKind::Property => {
					if !overridden_properties.contains(&member_id) {
						out.properties.push(entry);
						if let Some(overridden) = member.overrides {
							overridden_properties.insert(overridden);
						}
					}
				}
				MemberKind::Method => {
					if member.synthesized
						|| member_symbol.is_static
						|| overridden_methods.contains(&member_id)
					{
						continue;
					}
					out.methods.push(entry);
					if let Some(overridden) = member.overrides {
						overridden_methods.insert(overridden);
					}
				}
			}
		}

		curr = ty.base_type;
		depth += 1;
	}

	out.methods.sort_by(|a, b| {
		let name = |entry: &MemberEntry| {
			index
				.get(entry.member)
				.map(|symbol| symbol.name.as_str())
				.unwrap_or("")
		};
		name(a).cmp(name(b))
	});

	Ok(out)
}
