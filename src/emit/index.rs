//! Rendering of the site index with its collapsible namespace explorer.

use rustc_hash::FxHashSet;

use super::EmitContext;
use super::markup;
use crate::ident;
use crate::links::LinkContext;
use crate::model::SymbolId;
use crate::tree::TreeNode;

/// Relative path from the index file to the shared site assets.
const ASSET_PREFIX: &str = "../";

/// Render `docindex.html`: a fixed header, the namespace/type explorer in a
/// left pane, and the content iframe the type links target.
///
/// Types whose page failed to generate are left out of the explorer instead
/// of linking to a missing file.
pub fn render_doc_index(
	ctx: &EmitContext<'_>,
	tree: &TreeNode,
	failed: &FxHashSet<SymbolId>,
) -> String {
	let mut out = String::new();
	out.push_str(
		"<!DOCTYPE html><html><head><title>Index</title>\n<link rel=\"stylesheet\" href=\"../styles.css\">\n<script src=\"../scripts.js\"></script>\n</head><body class=\"namespaceExplorerBody\"><div class=\"headerBody\" style=\"position:fixed;top:0;left:0;right:0;height:40px;color:white;padding:10px 15px;font-size:26px\">\n  Documentation\n</div>\n<div style=\"position:fixed;top:60px;left:0;width:290px;bottom:0;overflow:auto;padding:5px;\">\n",
	);
	write_children(ctx, &mut out, tree, failed);
	out.push_str(
		"</div>\n<div style=\"position:fixed;top:60px;left:300px;right:0;bottom:0;border-left:1px solid #ccc\">\n<iframe name=\"s\" style=\"width:100%;height:100%;border:0;\">\n</iframe>\n</div><script>initializeNamespaceExplorer();</script></body></html>\n",
	);
	out
}

fn write_children(
	ctx: &EmitContext<'_>,
	out: &mut String,
	node: &TreeNode,
	failed: &FxHashSet<SymbolId>,
) {
	for child in node.children() {
		write_child(ctx, out, child, failed);
	}
}

fn write_child(
	ctx: &EmitContext<'_>,
	out: &mut String,
	node: &TreeNode,
	failed: &FxHashSet<SymbolId>,
) {
	match node.symbol() {
		Some(id) if failed.contains(&id) => {
			// The page is absent; keep the subtree reachable without a link.
			if node.child_count() == 0 {
				return;
			}
			write_namespace(out, node.title());
		}
		Some(id) => {
			let class = if node.child_count() > 0 {
				"folderTitle"
			} else {
				"typeTitle"
			};
			write_type(ctx, out, id, node.title(), class);
		}
		None => write_namespace(out, node.title()),
	}

	if node.child_count() > 0 {
		out.push_str("<div class=\"folder\">\n");
		write_children(ctx, out, node, failed);
		out.push_str("</div>");
	}
	out.push('\n');
}

fn write_namespace(out: &mut String, title: &str) {
	out.push_str(&format!(
		"<div class=\"folderTitle\">{}</div>",
		markup::escape(title)
	));
}

fn write_type(ctx: &EmitContext<'_>, out: &mut String, id: SymbolId, title: &str, class: &str) {
	let link = ctx.links.resolve(ctx.index, id, LinkContext::SiteRoot);
	let glyph = ctx
		.index
		.get(id)
		.map(ident::glyph_number)
		.unwrap_or_default();
	out.push_str(&format!(
		"<div class=\"{class}\"><a class=\"tDN\" href=\"{}\" target=\"s\"><img class=\"tDNI\" src=\"{ASSET_PREFIX}content/icons/{glyph}.png\" />{}</a></div>",
		markup::escape(&link.url),
		markup::escape(title)
	));
}
