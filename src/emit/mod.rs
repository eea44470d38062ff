//! HTML emission for generated pages.
//!
//! The emitter is a pure consumer of the resolvers: it turns resolved
//! hierarchy chains, member tables, and documentation strings into page
//! markup. Stylesheets, scripts, and icons are site assets supplied outside
//! the generator.

use crate::docs::DocResolver;
use crate::links::LinkResolver;
use crate::model::GraphIndex;

/// HTML escaping helpers.
pub mod markup;

/// Site index (`docindex.html`) rendering.
pub mod index;

/// Per-type page rendering.
pub mod page;

/// Shared borrows every emitter function needs.
pub struct EmitContext<'a> {
	/// Indexed symbol graph.
	pub index: &'a GraphIndex<'a>,
	/// Local-versus-external link resolution.
	pub links: &'a LinkResolver,
	/// Documentation resolution with the run-wide cache behind it.
	pub docs: &'a DocResolver<'a>,
	/// Project name shown on pages and used in reference-source links.
	pub project: &'a str,
}
