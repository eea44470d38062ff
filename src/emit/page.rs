//! Rendering of one generated type page.

use super::EmitContext;
use super::markup;
use crate::error::Result;
use crate::hierarchy;
use crate::ident;
use crate::links::LinkContext;
use crate::members::{self, MemberEntry};
use crate::model::SymbolId;

/// Render the full HTML document for a declared type.
pub fn render_type_page(ctx: &EmitContext<'_>, id: SymbolId) -> Result<String> {
	let symbol = ctx.index.symbol(id)?;
	let display = ctx.index.display_string(id);
	let name = markup::escape(&symbol.name);
	let reference_url = ctx.links.external().resolve_external_url(ctx.index, id);

	let mut out = String::new();
	out.push_str("<!DOCTYPE html>\n<html><head><title>");
	out.push_str(&name);
	out.push_str(
		"</title><link rel=\"stylesheet\" href=\"../../styles.css\"><link rel=\"stylesheet\" href=\"../../sandcastle.css\"></head>\n<body>\n",
	);
	out.push_str(&format!(
		"<h1>{name} {}</h1>\n",
		markup::escape(ident::kind_label(symbol))
	));
	out.push_str(&format!(
		"<p>To browse the source code for this type, see the <a href=\"{}\" target=\"_top\">Reference Source</a>.</p>\n",
		markup::escape(&reference_url)
	));
	out.push_str(&format!(
		"<p style=\"margin-top:0;margin-bottom:0;\"><strong>Namespace:</strong> {}</p>\n",
		markup::escape(namespace_of(display))
	));
	out.push_str(&format!(
		"<p style=\"margin-top:0;margin-bottom:0;\"><strong>Project:</strong> {}</p>\n",
		markup::escape(ctx.project)
	));

	write_hierarchy(ctx, &mut out, id)?;

	let members = members::resolve_members(ctx.index, id)?;
	write_member_table(ctx, &mut out, "Constructors", &members.constructors, id)?;
	write_member_table(ctx, &mut out, "Properties", &members.properties, id)?;
	write_member_table(ctx, &mut out, "Methods", &members.methods, id)?;
	write_member_table(ctx, &mut out, "Events", &members.events, id)?;

	out.push_str("</body>\n</html>\n");
	Ok(out)
}

/// Inheritance-hierarchy section: ancestors as indented links, the rendered
/// type in bold, declared direct subtypes indented one level further.
fn write_hierarchy(ctx: &EmitContext<'_>, out: &mut String, id: SymbolId) -> Result<()> {
	out.push_str("<section>\n  <h2>Inheritance Hierarchy</h2>\n");

	let chain = hierarchy::inheritance_chain(ctx.index, id)?;
	for (level, &ancestor) in chain.iter().take(chain.len() - 1).enumerate() {
		let link = ctx.links.resolve(ctx.index, ancestor, LinkContext::Page);
		let frame = if link.opens_in_parent_frame {
			" target=\"_top\""
		} else {
			""
		};
		out.push_str(&format!(
			"<p style=\"margin-top:0;margin-bottom:0;padding-left:{}px\"><a href=\"{}\"{frame}>{}</a></p>\n",
			level * 10,
			markup::escape(&link.url),
			markup::escape(ctx.index.display_string(ancestor))
		));
	}
	out.push_str(&format!(
		"<p style=\"margin-top:0;margin-bottom:0;padding-left:{}px\"><strong>{}</strong></p>\n",
		(chain.len() - 1) * 10,
		markup::escape(ctx.index.display_string(id))
	));
	for subtype in hierarchy::direct_subtypes(ctx.index, id) {
		let link = ctx.links.resolve(ctx.index, subtype, LinkContext::Page);
		let frame = if link.opens_in_parent_frame {
			" target=\"_top\""
		} else {
			""
		};
		out.push_str(&format!(
			"<p style=\"margin-top:0;margin-bottom:0;padding-left:{}px\"><a href=\"{}\"{frame}>{}</a></p>\n",
			chain.len() * 10,
			markup::escape(&link.url),
			markup::escape(ctx.index.display_string(subtype))
		));
	}

	out.push_str("</section>\n");
	Ok(())
}

/// One member table section: glyph, reference-source anchor, name, and the
/// resolved description with an inherited-from annotation when the declaring
/// type differs from the rendered type.
fn write_member_table(
	ctx: &EmitContext<'_>,
	out: &mut String,
	title: &str,
	entries: &[MemberEntry],
	rendered_type: SymbolId,
) -> Result<()> {
	out.push_str(&format!("<section>\n  <h2>{title}</h2>\n"));
	out.push_str(
		"<table class=\"ex\"><thead><tr><td class=\"ex\"></td><td class=\"ex\"></td><td class=\"ex\">Name</td><td class=\"ex\">Description</td></tr></thead><tbody>",
	);

	for entry in entries {
		let member = ctx.index.symbol(entry.member)?;
		let reference_url = ctx
			.links
			.external()
			.resolve_external_url(ctx.index, entry.member);
		let doc = ctx.docs.resolve(entry.member)?;

		out.push_str(&format!(
			"<tr><td class=\"ex\"><img src=\"../../content/icons/{}.png\" /></td><td class=\"ex\"><a href=\"{}\">{{}}</a></td><td class=\"ex\">{}</td><td class=\"ex\">{}",
			ident::glyph_number(member),
			markup::escape(&reference_url),
			markup::escape(&member.name),
			doc.description_html()
		));
		if entry.declaring_type != rendered_type {
			let declaring = ctx.index.symbol(entry.declaring_type)?;
			let declaring_url = ctx
				.links
				.external()
				.resolve_external_url(ctx.index, entry.declaring_type);
			out.push_str(&format!(
				" (Inherited from <a href=\"{}\">{}</a>)",
				markup::escape(&declaring_url),
				markup::escape(&declaring.name)
			));
		}
		out.push_str("</td></tr>");
	}

	out.push_str("</tbody></table></section>\n");
	Ok(())
}

/// Namespace portion of a fully qualified display string, empty when the
/// symbol lives in the global namespace.
fn namespace_of(display_string: &str) -> &str {
	match display_string.rfind('.') {
		Some(last_dot) => &display_string[..last_dot],
		None => "",
	}
}
