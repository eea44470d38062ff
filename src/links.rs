//! Local-versus-external link resolution.
//!
//! A type declared in the current run links to its generated page inside the
//! documentation folder; everything else delegates to the reference-source
//! collaborator and must replace the whole browsing frame when followed.

use std::sync::Arc;

use crate::ident;
use crate::model::{GraphIndex, SymbolId};

/// Folder under the output root that holds the generated type pages.
pub const DOC_FOLDER: &str = "doc";

/// A resolved hyperlink target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
	/// URL relative to the page computing it.
	pub url: String,
	/// Whether following the link must replace the browsing context instead
	/// of loading inside the docs frame. True exactly for external targets.
	pub opens_in_parent_frame: bool,
}

/// Context a URL is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkContext {
	/// The URL is embedded in a page at the output root, such as the index.
	SiteRoot,
	/// The URL is embedded in a generated type page inside the doc folder.
	Page,
}

/// External reference-resolution collaborator.
///
/// Supplies URLs for symbols that are not part of the current run's declared
/// set. Implementations must be shareable across the page-generation workers.
pub trait ExternalLinks: Send + Sync {
	/// Produce an absolute or site-rooted URL for an externally defined
	/// symbol.
	fn resolve_external_url(&self, index: &GraphIndex<'_>, id: SymbolId) -> String;
}

/// Default [`ExternalLinks`] implementation producing reference-source
/// anchors of the form `{base_path}{project}/a.html#{stable-id}`.
#[derive(Debug, Clone)]
pub struct ReferenceSourceLinks {
	base_path: String,
	project: String,
}

impl ReferenceSourceLinks {
	/// Create a resolver rooted at the given base path and project name.
	pub fn new(base_path: impl Into<String>, project: impl Into<String>) -> Self {
		Self {
			base_path: base_path.into(),
			project: project.into(),
		}
	}
}

impl ExternalLinks for ReferenceSourceLinks {
	fn resolve_external_url(&self, index: &GraphIndex<'_>, id: SymbolId) -> String {
		format!(
			"{}{}/a.html#{}",
			self.base_path,
			self.project,
			ident::stable_id_hex(index.display_string(id))
		)
	}
}

/// Deterministic filename for a declared type's page: the fully qualified
/// display string with `.` replaced by `_` and generic brackets escaped.
pub fn page_file_name(display_string: &str) -> String {
	let mut name: String = display_string
		.chars()
		.map(|c| match c {
			'.' => '_',
			'<' => '[',
			'>' => ']',
			other => other,
		})
		.collect();
	name.push_str(".html");
	name
}

/// Decides whether a type links to a generated local page or to the external
/// reference source.
pub struct LinkResolver {
	external: Arc<dyn ExternalLinks>,
}

impl LinkResolver {
	/// Create a resolver that delegates external targets to `external`.
	pub fn new(external: Arc<dyn ExternalLinks>) -> Self {
		Self { external }
	}

	/// Resolve a link to a type for the given context.
	pub fn resolve(&self, index: &GraphIndex<'_>, id: SymbolId, context: LinkContext) -> Link {
		if index.is_declared(id) {
			let file = page_file_name(index.display_string(id));
			let url = match context {
				LinkContext::SiteRoot => format!("{DOC_FOLDER}/{file}"),
				LinkContext::Page => file,
			};
			Link {
				url,
				opens_in_parent_frame: false,
			}
		} else {
			Link {
				url: self.external.resolve_external_url(index, id),
				opens_in_parent_frame: true,
			}
		}
	}

	/// Direct access to the external collaborator, for links that always use
	/// the reference-source scheme (member anchors, inherited-from targets).
	pub fn external(&self) -> &dyn ExternalLinks {
		&*self.external
	}
}
