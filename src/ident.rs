//! Identity and naming for symbols: run-stable identifiers, kind labels, and
//! icon classification.
//!
//! Everything here is a pure function of the symbol's display string or kind,
//! so cache keys and generated filenames are reproducible across runs.

use md5::{Digest, Md5};

use crate::model::{MemberKind, Symbol, SymbolKind, TypeKind};

/// Run-stable numeric identifier for a symbol, derived from the first eight
/// bytes of the MD5 digest of its fully qualified display string.
pub fn stable_id(display_string: &str) -> u64 {
	let digest = Md5::digest(display_string.as_bytes());
	let mut bytes = [0u8; 8];
	bytes.copy_from_slice(&digest[..8]);
	u64::from_be_bytes(bytes)
}

/// Hex rendering of [`stable_id`], used in reference-source anchors.
pub fn stable_id_hex(display_string: &str) -> String {
	let digest = Md5::digest(display_string.as_bytes());
	hex::encode(&digest[..8])
}

/// Human-readable kind label for a symbol, e.g. `Class` or `Property`.
pub fn kind_label(symbol: &Symbol) -> &'static str {
	match &symbol.kind {
		SymbolKind::Type(ty) => match ty.kind {
			TypeKind::Class => "Class",
			TypeKind::Interface => "Interface",
			TypeKind::Struct => "Struct",
			TypeKind::Enum => "Enum",
			TypeKind::Delegate => "Delegate",
		},
		SymbolKind::Member(member) => match member.kind {
			MemberKind::Constructor => "Constructor",
			MemberKind::Property => "Property",
			MemberKind::Method => "Method",
			MemberKind::Event => "Event",
		},
	}
}

/// Icon-sheet offset selecting the glyph rendered next to a symbol.
///
/// The numbering matches the `content/icons/{n}.png` sheet shipped with the
/// site assets; each kind maps to the first glyph of its group.
pub fn glyph_number(symbol: &Symbol) -> u32 {
	match &symbol.kind {
		SymbolKind::Type(ty) => match ty.kind {
			TypeKind::Class => 0,
			TypeKind::Delegate => 12,
			TypeKind::Enum => 18,
			TypeKind::Interface => 48,
			TypeKind::Struct => 108,
		},
		SymbolKind::Member(member) => match member.kind {
			MemberKind::Constructor | MemberKind::Method => 72,
			MemberKind::Property => 102,
			MemberKind::Event => 36,
		},
	}
}
