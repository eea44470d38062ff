//! Documentation resolution.
//!
//! Walks a symbol's override chain until prose is found, merges
//! attribute-supplied short descriptions with structured doc-comment
//! summaries, rewrites `<see cref="..."/>` markers into resolved hyperlinks,
//! and caches results for symbols rooted in shared framework namespaces.

use std::sync::Arc;

use parking_lot::Mutex;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rustc_hash::FxHashMap;
use tracing::warn;

use crate::emit::markup;
use crate::error::{RefsiteError, Result};
use crate::hierarchy::MAX_INHERITANCE_DEPTH;
use crate::ident;
use crate::links::{LinkContext, LinkResolver};
use crate::model::{GraphIndex, SymbolId};

/// Namespace roots whose documentation is cached and shared across pages
/// when no explicit configuration is supplied.
pub const DEFAULT_SHARED_ROOTS: &[&str] = &["System"];

/// Attribute name carrying a short description for a symbol.
const DESCRIPTION_ATTRIBUTE: &str = "Description";
/// Attribute name carrying an alternate display name for a symbol.
const DISPLAY_NAME_ATTRIBUTE: &str = "DisplayName";

/// Documentation resolved for one symbol.
///
/// Once computed under the caching policy the value is immutable and reused;
/// cached entries are shared as [`Arc`]s across every page that references
/// the symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDocumentation {
	/// Short description sourced from a `Description` attribute.
	pub short_description: Option<String>,
	/// Alternate display name sourced from a `DisplayName` attribute.
	pub display_name: Option<String>,
	/// Rendered HTML fragment of the first `<summary>` element found on the
	/// override chain, with cross-reference markers rewritten to links.
	pub summary_html: Option<String>,
}

impl ResolvedDocumentation {
	/// Combined description cell content: the escaped short text followed by
	/// the summary markup when both exist, otherwise whichever is present.
	pub fn description_html(&self) -> String {
		match (&self.short_description, &self.summary_html) {
			(Some(short), Some(summary)) => {
				format!("{} {summary}", markup::escape(short))
			}
			(Some(short), None) => markup::escape(short),
			(None, Some(summary)) => summary.clone(),
			(None, None) => String::new(),
		}
	}
}

/// Run-wide cache of resolved documentation for shared framework symbols,
/// keyed by stable id.
///
/// Supports concurrent read/insert with a publish-once contract: the first
/// published entry for a key wins, and racing workers that computed the same
/// entry redundantly receive the published value.
#[derive(Default)]
pub struct DocCache {
	entries: Mutex<FxHashMap<u64, Arc<ResolvedDocumentation>>>,
}

impl DocCache {
	/// Create an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Look up a published entry.
	pub fn get(&self, key: u64) -> Option<Arc<ResolvedDocumentation>> {
		self.entries.lock().get(&key).cloned()
	}

	/// Publish an entry, returning the winning value for the key.
	pub fn publish(
		&self,
		key: u64,
		value: Arc<ResolvedDocumentation>,
	) -> Arc<ResolvedDocumentation> {
		self.entries.lock().entry(key).or_insert(value).clone()
	}
}

/// Resolves documentation for symbols, consulting the shared cache for
/// framework-rooted symbols and resolving locally declared symbols fresh on
/// every request.
pub struct DocResolver<'a> {
	index: &'a GraphIndex<'a>,
	links: &'a LinkResolver,
	cache: &'a DocCache,
	shared_roots: &'a [String],
}

impl<'a> DocResolver<'a> {
	/// Create a resolver over the given index, link resolver, and cache.
	pub fn new(
		index: &'a GraphIndex<'a>,
		links: &'a LinkResolver,
		cache: &'a DocCache,
		shared_roots: &'a [String],
	) -> Self {
		Self {
			index,
			links,
			cache,
			shared_roots,
		}
	}

	/// Resolve documentation for a symbol under the caching policy.
	pub fn resolve(&self, id: SymbolId) -> Result<Arc<ResolvedDocumentation>> {
		let display = self.index.display_string(id);
		if self.is_shared(display) {
			let key = ident::stable_id(display);
			if let Some(hit) = self.cache.get(key) {
				return Ok(hit);
			}
			let computed = Arc::new(self.resolve_uncached(id)?);
			return Ok(self.cache.publish(key, computed));
		}
		Ok(Arc::new(self.resolve_uncached(id)?))
	}

	fn is_shared(&self, display_string: &str) -> bool {
		self.shared_roots.iter().any(|root| {
			display_string
				.strip_prefix(root.as_str())
				.is_some_and(|rest| rest.starts_with('.'))
		})
	}

	/// Walk the override chain, collecting the first short description and
	/// the first summary. The walk stops once a summary is found or the
	/// chain ends.
	fn resolve_uncached(&self, id: SymbolId) -> Result<ResolvedDocumentation> {
		let mut doc = ResolvedDocumentation::default();
		let mut curr = Some(id);
		let mut depth = 0usize;

		while let Some(cid) = curr {
			if depth >= MAX_INHERITANCE_DEPTH {
				debug_assert!(
					false,
					"override chain of `{}` exceeds {MAX_INHERITANCE_DEPTH} levels",
					self.index.display_string(id)
				);
				return Err(RefsiteError::CyclicHierarchy(
					self.index.display_string(id).to_string(),
				));
			}
			let symbol = self.index.symbol(cid)?;

			for attribute in &symbol.attributes {
				match attribute.name.as_str() {
					DESCRIPTION_ATTRIBUTE if doc.short_description.is_none() => {
						doc.short_description = Some(attribute.value.clone());
					}
					DISPLAY_NAME_ATTRIBUTE if doc.display_name.is_none() => {
						doc.display_name = Some(attribute.value.clone());
					}
					_ => {}
				}
			}

			if let Some(raw) = &symbol.docs {
				if let Some(summary) = self.summary_markup(raw, &symbol.name) {
					doc.summary_html = Some(summary);
				}
			}
			if doc.summary_html.is_some() {
				break;
			}

			curr = symbol.as_member().and_then(|member| member.overrides);
			depth += 1;
		}

		Ok(doc)
	}

	/// Parse a raw doc-comment fragment and render the first `<summary>`
	/// element as HTML with cross-reference markers rewritten.
	///
	/// Returns `None` both when the fragment has no summary and when it is
	/// malformed; a parse failure degrades to absent documentation for this
	/// level of the walk rather than aborting it.
	fn summary_markup(&self, raw: &str, symbol_name: &str) -> Option<String> {
		let wrapped = format!("<doc>{raw}</doc>");
		let mut reader = Reader::from_str(&wrapped);

		let mut summary: Option<String> = None;
		let mut html = String::new();
		let mut capturing = false;
		let mut passthrough_depth = 0usize;
		// Set while discarding the children of a non-empty <see> element.
		let mut skipped_see: Option<SkippedSee> = None;

		loop {
			match reader.read_event() {
				Err(err) => {
					warn!(symbol = symbol_name, %err, "malformed documentation comment");
					return None;
				}
				Ok(Event::Eof) => break,
				Ok(Event::Start(element)) => {
					if let Some(skip) = skipped_see.as_mut() {
						skip.depth += 1;
						continue;
					}
					if capturing {
						if element.local_name().as_ref() == b"see" {
							skipped_see = Some(SkippedSee {
								depth: 1,
								cref: attribute_value(&element, b"cref"),
								label: String::new(),
							});
						} else {
							push_passthrough_tag(&mut html, &element, false);
							passthrough_depth += 1;
						}
					} else if element.local_name().as_ref() == b"summary" && summary.is_none() {
						capturing = true;
						passthrough_depth = 0;
					}
				}
				Ok(Event::Empty(element)) => {
					if skipped_see.is_some() {
						continue;
					}
					if capturing {
						if element.local_name().as_ref() == b"see" {
							let cref = attribute_value(&element, b"cref");
							html.push_str(&self.rewrite_see(cref.as_deref(), ""));
						} else {
							push_passthrough_tag(&mut html, &element, true);
						}
					}
				}
				Ok(Event::End(element)) => {
					if let Some(skip) = skipped_see.as_mut() {
						skip.depth -= 1;
						if skip.depth == 0 {
							if let Some(finished) = skipped_see.take() {
								html.push_str(
									&self.rewrite_see(finished.cref.as_deref(), &finished.label),
								);
							}
						}
						continue;
					}
					if capturing {
						if element.local_name().as_ref() == b"summary" && passthrough_depth == 0 {
							capturing = false;
							summary = Some(std::mem::take(&mut html));
						} else {
							passthrough_depth = passthrough_depth.saturating_sub(1);
							html.push_str("</");
							html.push_str(&String::from_utf8_lossy(element.local_name().as_ref()));
							html.push('>');
						}
					}
				}
				Ok(Event::Text(text)) => {
					let Ok(decoded) = text.decode() else {
						warn!(symbol = symbol_name, "malformed documentation comment");
						return None;
					};
					if let Some(skip) = skipped_see.as_mut() {
						skip.label.push_str(&decoded);
					} else if capturing {
						html.push_str(&markup::escape(&decoded));
					}
				}
				Ok(Event::CData(data)) => {
					let decoded = String::from_utf8_lossy(&data);
					if let Some(skip) = skipped_see.as_mut() {
						skip.label.push_str(&decoded);
					} else if capturing {
						html.push_str(&markup::escape(&decoded));
					}
				}
				Ok(Event::GeneralRef(reference)) => {
					// Entity references are reported separately from text.
					let Some(resolved) = resolve_reference(&reference) else {
						warn!(symbol = symbol_name, "malformed documentation comment");
						return None;
					};
					if let Some(skip) = skipped_see.as_mut() {
						skip.label.push(resolved);
					} else if capturing {
						let mut buffer = [0u8; 4];
						html.push_str(&markup::escape(resolved.encode_utf8(&mut buffer)));
					}
				}
				Ok(_) => {}
			}
		}

		summary
	}

	/// Rewrite one cross-reference marker as a hyperlink.
	///
	/// `T:`-prefixed crefs are resolved against the symbol model; declared
	/// targets link to their local page, known external targets to the
	/// reference source. Anything unresolvable becomes a non-navigable
	/// placeholder instead of aborting the page.
	fn rewrite_see(&self, cref: Option<&str>, text_label: &str) -> String {
		let Some(cref) = cref else {
			return placeholder_link(text_label);
		};
		let Some(qualified) = cref.strip_prefix("T:") else {
			return placeholder_link(cref);
		};
		match self.index.lookup_qualified(qualified) {
			Some(target) => {
				let link = self.links.resolve(self.index, target, LinkContext::Page);
				let label = self
					.index
					.get(target)
					.map(|symbol| symbol.name.as_str())
					.unwrap_or(qualified);
				let frame = if link.opens_in_parent_frame {
					" target=\"_top\""
				} else {
					""
				};
				format!(
					"<a href=\"{}\"{frame}>{}</a>",
					markup::escape(&link.url),
					markup::escape(label)
				)
			}
			None => {
				warn!(cref, "unresolvable cross-reference marker");
				placeholder_link(cref)
			}
		}
	}
}

/// State for a `<see>` element whose children are being discarded.
struct SkippedSee {
	depth: usize,
	cref: Option<String>,
	label: String,
}

/// Non-navigable placeholder for an unresolvable reference.
fn placeholder_link(label: &str) -> String {
	format!("<a href=\"#\">{}</a>", markup::escape(label))
}

/// Resolve a predefined entity or character reference to its character.
/// Undefined entities render the whole comment malformed.
fn resolve_reference(reference: &[u8]) -> Option<char> {
	match reference {
		b"amp" => Some('&'),
		b"lt" => Some('<'),
		b"gt" => Some('>'),
		b"quot" => Some('"'),
		b"apos" => Some('\''),
		[b'#', b'x' | b'X', digits @ ..] => {
			let code = u32::from_str_radix(std::str::from_utf8(digits).ok()?, 16).ok()?;
			char::from_u32(code)
		}
		[b'#', digits @ ..] => {
			let code: u32 = std::str::from_utf8(digits).ok()?.parse().ok()?;
			char::from_u32(code)
		}
		_ => None,
	}
}

/// First value of the named attribute on an element, if present.
fn attribute_value(element: &BytesStart<'_>, name: &[u8]) -> Option<String> {
	element
		.attributes()
		.flatten()
		.find(|attribute| attribute.key.as_ref() == name)
		.and_then(|attribute| attribute.unescape_value().ok())
		.map(|value| value.into_owned())
}

/// Re-emit an element tag unchanged, preserving its attributes. Used for
/// markup inside a summary that is not a cross-reference marker.
fn push_passthrough_tag(html: &mut String, element: &BytesStart<'_>, self_closing: bool) {
	html.push('<');
	html.push_str(&String::from_utf8_lossy(element.name().as_ref()));
	for attribute in element.attributes().flatten() {
		if let Ok(value) = attribute.unescape_value() {
			html.push(' ');
			html.push_str(&String::from_utf8_lossy(attribute.key.as_ref()));
			html.push_str("=\"");
			html.push_str(&markup::escape(&value));
			html.push('"');
		}
	}
	if self_closing {
		html.push_str("/>");
	} else {
		html.push('>');
	}
}
