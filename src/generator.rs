//! High-level site generation API.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use crate::docs::{DEFAULT_SHARED_ROOTS, DocCache, DocResolver};
use crate::emit::{EmitContext, index as emit_index, page};
use crate::error::{RefsiteError, Result};
use crate::links::{self, ExternalLinks, LinkResolver, ReferenceSourceLinks};
use crate::model::{GraphIndex, SymbolGraph, SymbolId};
use crate::tree::TreeNode;

/// Name of the site index file written at the output root.
pub const INDEX_FILE: &str = "docindex.html";

/// One page that could not be generated.
#[derive(Debug, Clone)]
pub struct PageFailure {
	/// Fully qualified display string of the type whose page failed.
	pub symbol: String,
	/// Rendered failure reason.
	pub error: String,
}

/// Outcome of a generation run.
///
/// Per-page failures never abort the batch; they are collected here and the
/// affected types are left out of the emitted index.
#[derive(Debug, Default)]
pub struct GenerationSummary {
	/// Display strings of the types whose pages were written.
	pub written: Vec<String>,
	/// Pages that failed, with their reasons.
	pub failed: Vec<PageFailure>,
}

impl GenerationSummary {
	/// Whether every page was generated.
	pub fn is_complete(&self) -> bool {
		self.failed.is_empty()
	}
}

/// SiteGenerator turns a resolved symbol graph into a browsable reference
/// site: one HTML page per declared type plus a hyperlinked namespace index.
///
/// The generator is UI-agnostic and can be driven by any frontend. A single
/// instance can run against multiple graphs; each run owns its own tree and
/// documentation cache.
pub struct SiteGenerator {
	/// Project name shown on pages and used in reference-source links.
	project: String,

	/// URL prefix for reference-source links.
	base_path: String,

	/// Namespace roots whose documentation is cached and shared across
	/// pages.
	shared_roots: Vec<String>,

	/// Whether per-type pages are generated on the rayon thread pool.
	parallel: bool,

	/// Custom external reference resolution, when the default
	/// reference-source scheme is not wanted.
	external: Option<Arc<dyn ExternalLinks>>,
}

impl SiteGenerator {
	/// Creates a generator for the given project name with default
	/// configuration: reference-source links rooted at `/`, the `System`
	/// namespace treated as shared, and parallel page generation.
	pub fn new(project: impl Into<String>) -> Self {
		Self {
			project: project.into(),
			base_path: "/".to_string(),
			shared_roots: DEFAULT_SHARED_ROOTS
				.iter()
				.map(|root| root.to_string())
				.collect(),
			parallel: true,
			external: None,
		}
	}

	/// Sets the URL prefix used for reference-source links.
	pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
		self.base_path = base_path.into();
		self
	}

	/// Replaces the namespace roots whose documentation is cached and shared
	/// across pages.
	pub fn with_shared_roots(mut self, roots: Vec<String>) -> Self {
		self.shared_roots = roots;
		self
	}

	/// Enables or disables parallel page generation.
	pub fn with_parallel(mut self, parallel: bool) -> Self {
		self.parallel = parallel;
		self
	}

	/// Substitutes the external reference-resolution collaborator.
	pub fn with_external_links(mut self, external: Arc<dyn ExternalLinks>) -> Self {
		self.external = Some(external);
		self
	}

	/// Generate the site for a symbol graph under `out_root`.
	///
	/// Returns the per-page outcome summary; only run-level failures (an
	/// unusable output directory, a malformed graph, an unwritable index)
	/// surface as errors.
	pub fn generate(&self, graph: &SymbolGraph, out_root: &Path) -> Result<GenerationSummary> {
		let index = GraphIndex::new(graph)?;
		let doc_dir = out_root.join(links::DOC_FOLDER);
		fs::create_dir_all(&doc_dir)?;

		let external: Arc<dyn ExternalLinks> = match &self.external {
			Some(external) => Arc::clone(external),
			None => Arc::new(ReferenceSourceLinks::new(&self.base_path, &self.project)),
		};
		let links = LinkResolver::new(external);
		let cache = DocCache::new();
		let docs = DocResolver::new(&index, &links, &cache, &self.shared_roots);
		let ctx = EmitContext {
			index: &index,
			links: &links,
			docs: &docs,
			project: &self.project,
		};

		// The tree is built once, before any parallel per-type work, and is
		// read-only afterwards.
		let mut tree = TreeNode::root();
		for &id in index.declared_types() {
			tree.insert(id, index.symbol(id)?);
		}

		info!(
			pages = index.declared_types().len(),
			out = %out_root.display(),
			"generating type pages"
		);

		let emit_one = |id: SymbolId| -> Result<()> {
			let rendered = page::render_type_page(&ctx, id)?;
			let file = doc_dir.join(links::page_file_name(index.display_string(id)));
			fs::write(&file, rendered).map_err(|source| RefsiteError::PageWrite {
				path: file.clone(),
				source,
			})?;
			debug!(page = %file.display(), "wrote type page");
			Ok(())
		};

		let outcomes: Vec<(SymbolId, Result<()>)> = if self.parallel {
			index
				.declared_types()
				.par_iter()
				.map(|&id| (id, emit_one(id)))
				.collect()
		} else {
			index
				.declared_types()
				.iter()
				.map(|&id| (id, emit_one(id)))
				.collect()
		};

		let mut summary = GenerationSummary::default();
		let mut failed_ids = FxHashSet::default();
		for (id, outcome) in outcomes {
			let display_name = index.display_string(id).to_string();
			match outcome {
				Ok(()) => summary.written.push(display_name),
				Err(err) => {
					warn!(symbol = display_name.as_str(), %err, "page generation failed");
					failed_ids.insert(id);
					summary.failed.push(PageFailure {
						symbol: display_name,
						error: err.to_string(),
					});
				}
			}
		}

		let rendered_index = emit_index::render_doc_index(&ctx, &tree, &failed_ids);
		fs::write(out_root.join(INDEX_FILE), rendered_index)?;

		info!(
			written = summary.written.len(),
			failed = summary.failed.len(),
			"generation run complete"
		);
		Ok(summary)
	}
}
