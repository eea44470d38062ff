//! End-to-end generation runs against a temporary output directory.
mod utils;

use std::fs;

use refsite::SiteGenerator;
use utils::GraphBuilder;

#[test]
fn generates_pages_and_index_for_a_small_hierarchy() {
	let mut builder = GraphBuilder::new();
	let animal = builder.declared_class("Animal", &["NS"]);
	let dog = builder.declared_class("Dog", &["NS"]);
	builder.set_base(dog, animal);
	let speak = builder.method(animal, "Speak");
	builder.set_docs(speak, "<summary>Makes a sound</summary>");
	let graph = builder.build();

	let out = tempfile::tempdir().unwrap();
	let summary = SiteGenerator::new("zoo")
		.with_parallel(false)
		.generate(&graph, out.path())
		.unwrap();

	assert!(summary.is_complete());
	assert_eq!(summary.written.len(), 2);

	let dog_page = fs::read_to_string(out.path().join("doc/NS_Dog.html")).unwrap();
	// Speak is listed once, inherited from Animal, with the resolved summary.
	assert_eq!(dog_page.matches(">Speak</td>").count(), 1);
	assert!(dog_page.contains("Makes a sound"));
	assert!(dog_page.contains("(Inherited from <a href="));
	assert!(dog_page.contains(">Animal</a>)"));

	// The Animal page lists Speak as its own member, unannotated.
	let animal_page = fs::read_to_string(out.path().join("doc/NS_Animal.html")).unwrap();
	assert!(animal_page.contains(">Speak</td>"));
	assert!(!animal_page.contains("Inherited from"));

	// The hierarchy section links Dog back to Animal's local page.
	assert!(dog_page.contains("<a href=\"NS_Animal.html\">NS.Animal</a>"));

	let index_page = fs::read_to_string(out.path().join("docindex.html")).unwrap();
	assert!(index_page.contains("<div class=\"folderTitle\">NS</div>"));
	let animal_pos = index_page.find("doc/NS_Animal.html").unwrap();
	let dog_pos = index_page.find("doc/NS_Dog.html").unwrap();
	assert!(animal_pos < dog_pos, "Animal must precede Dog in the index");
}

#[test]
fn a_failed_page_is_reported_and_left_out_of_the_index() {
	let mut builder = GraphBuilder::new();
	let _good = builder.declared_class("Good", &["NS"]);
	let _bad = builder.declared_class("Bad", &["NS"]);
	let graph = builder.build();

	let out = tempfile::tempdir().unwrap();
	// Occupy the bad page's path with a directory so the write fails.
	fs::create_dir_all(out.path().join("doc/NS_Bad.html")).unwrap();

	let summary = SiteGenerator::new("zoo")
		.with_parallel(false)
		.generate(&graph, out.path())
		.unwrap();

	assert_eq!(summary.written, vec!["NS.Good".to_string()]);
	assert_eq!(summary.failed.len(), 1);
	assert_eq!(summary.failed[0].symbol, "NS.Bad");

	let index_page = fs::read_to_string(out.path().join("docindex.html")).unwrap();
	assert!(index_page.contains("doc/NS_Good.html"));
	assert!(!index_page.contains("doc/NS_Bad.html"));
}

#[test]
fn symbol_graph_deserializes_from_front_end_json() {
	let raw = r#"{
		"symbols": {
			"0": {
				"name": "Animal",
				"namespace": ["NS"],
				"kind": { "type": { "kind": "class", "members": [1] } }
			},
			"1": {
				"name": "Speak",
				"namespace": ["NS"],
				"containing_type": 0,
				"docs": "<summary>Makes a sound</summary>",
				"kind": { "member": { "kind": "method" } }
			}
		},
		"declared": [0]
	}"#;
	let graph: refsite::SymbolGraph = serde_json::from_str(raw).unwrap();

	let out = tempfile::tempdir().unwrap();
	let summary = SiteGenerator::new("zoo").generate(&graph, out.path()).unwrap();
	assert!(summary.is_complete());

	let page = fs::read_to_string(out.path().join("doc/NS_Animal.html")).unwrap();
	assert!(page.contains("Makes a sound"));
}

#[test]
fn generated_output_is_stable_across_runs() {
	let build = || {
		let mut builder = GraphBuilder::new();
		let animal = builder.declared_class("Animal", &["NS"]);
		let speak = builder.method(animal, "Speak");
		builder.set_docs(speak, "<summary>Makes a sound</summary>");
		builder.build()
	};

	let first_out = tempfile::tempdir().unwrap();
	let second_out = tempfile::tempdir().unwrap();
	let generator = SiteGenerator::new("zoo");
	generator.generate(&build(), first_out.path()).unwrap();
	generator.generate(&build(), second_out.path()).unwrap();

	let first = fs::read_to_string(first_out.path().join("doc/NS_Animal.html")).unwrap();
	let second = fs::read_to_string(second_out.path().join("doc/NS_Animal.html")).unwrap();
	assert_eq!(first, second);
}
