//! Member flattening: override de-duplication, exclusions, and the
//! category-specific ordering rules.
mod utils;

use pretty_assertions::assert_eq;
use refsite::model::GraphIndex;
use refsite::resolve_members;
use utils::GraphBuilder;

#[test]
fn overridden_method_is_listed_once_attributed_to_most_derived() {
	let mut builder = GraphBuilder::new();
	let a = builder.declared_class("A", &["NS"]);
	let b = builder.declared_class("B", &["NS"]);
	let c = builder.declared_class("C", &["NS"]);
	builder.set_base(b, a);
	builder.set_base(c, b);

	let base_m = builder.method(a, "M");
	let derived_m = builder.method(c, "M");
	builder.set_overrides(derived_m, base_m);

	let graph = builder.build();
	let index = GraphIndex::new(&graph).unwrap();
	let members = resolve_members(&index, c).unwrap();

	assert_eq!(members.methods.len(), 1);
	assert_eq!(members.methods[0].member, derived_m);
	assert_eq!(members.methods[0].declaring_type, c);
}

#[test]
fn inherited_members_carry_their_declaring_type() {
	let mut builder = GraphBuilder::new();
	let animal = builder.declared_class("Animal", &["NS"]);
	let dog = builder.declared_class("Dog", &["NS"]);
	builder.set_base(dog, animal);
	let speak = builder.method(animal, "Speak");

	let graph = builder.build();
	let index = GraphIndex::new(&graph).unwrap();
	let members = resolve_members(&index, dog).unwrap();

	assert_eq!(members.methods.len(), 1);
	assert_eq!(members.methods[0].member, speak);
	assert_eq!(members.methods[0].declaring_type, animal);
}

#[test]
fn synthesized_and_static_methods_are_excluded() {
	let mut builder = GraphBuilder::new();
	let ty = builder.declared_class("Widget", &["NS"]);
	let get_accessor = builder.method(ty, "get_Size");
	builder.set_synthesized(get_accessor);
	let helper = builder.method(ty, "Helper");
	builder.set_static(helper);
	let plain = builder.method(ty, "Draw");

	let graph = builder.build();
	let index = GraphIndex::new(&graph).unwrap();
	let members = resolve_members(&index, ty).unwrap();

	let methods: Vec<_> = members.methods.iter().map(|e| e.member).collect();
	assert_eq!(methods, vec![plain]);
}

#[test]
fn implicit_constructors_are_excluded_and_base_constructors_not_inherited() {
	let mut builder = GraphBuilder::new();
	let base = builder.declared_class("Base", &["NS"]);
	let derived = builder.declared_class("Derived", &["NS"]);
	builder.set_base(derived, base);

	builder.constructor(base, "Base");
	let own = builder.constructor(derived, "Derived");
	let implicit = builder.constructor(derived, "Derived");
	builder.set_synthesized(implicit);

	let graph = builder.build();
	let index = GraphIndex::new(&graph).unwrap();
	let members = resolve_members(&index, derived).unwrap();

	let constructors: Vec<_> = members.constructors.iter().map(|e| e.member).collect();
	assert_eq!(constructors, vec![own]);
}

#[test]
fn methods_sort_by_name_while_constructors_and_events_keep_declaration_order() {
	let mut builder = GraphBuilder::new();
	let ty = builder.declared_class("Emitter", &["NS"]);

	let zulu = builder.method(ty, "Zulu");
	let alpha = builder.method(ty, "Alpha");
	let closed = builder.event(ty, "Closed");
	let activated = builder.event(ty, "Activated");

	let graph = builder.build();
	let index = GraphIndex::new(&graph).unwrap();
	let members = resolve_members(&index, ty).unwrap();

	let methods: Vec<_> = members.methods.iter().map(|e| e.member).collect();
	assert_eq!(methods, vec![alpha, zulu]);

	// Events are not sorted; declaration order is preserved.
	let events: Vec<_> = members.events.iter().map(|e| e.member).collect();
	assert_eq!(events, vec![closed, activated]);
}

#[test]
fn properties_walk_the_chain_with_override_deduplication() {
	let mut builder = GraphBuilder::new();
	let base = builder.declared_class("Base", &["NS"]);
	let derived = builder.declared_class("Derived", &["NS"]);
	builder.set_base(derived, base);

	let base_size = builder.property(base, "Size");
	let base_color = builder.property(base, "Color");
	let derived_size = builder.property(derived, "Size");
	builder.set_overrides(derived_size, base_size);

	let graph = builder.build();
	let index = GraphIndex::new(&graph).unwrap();
	let members = resolve_members(&index, derived).unwrap();

	let properties: Vec<_> = members.properties.iter().map(|e| e.member).collect();
	// Most-derived first, overridden ancestor removed, inherited entry kept.
	assert_eq!(properties, vec![derived_size, base_color]);
	assert_eq!(members.properties[1].declaring_type, base);
}
