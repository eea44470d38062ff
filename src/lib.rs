//! Core library for refsite, generating a browsable API reference site from
//! a resolved symbol graph.
//!
//! This crate provides the high-level [`SiteGenerator`] API which organizes
//! declared types into a namespace tree, flattens inheritance chains into
//! member tables, resolves documentation across override chains, and emits
//! one hyperlinked HTML page per type plus a site index. It is designed to be
//! UI-agnostic and can be used by any frontend (CLI, build task, server).

/// Documentation resolution over override chains, with the run-wide cache.
pub mod docs;

/// HTML emission for type pages and the site index.
pub mod emit;

/// Error helpers for the library.
pub mod error;

/// High-level site generation API.
pub mod generator;

/// Inheritance-chain derivations.
pub mod hierarchy;

/// Identity and naming: stable ids, kind labels, glyph classification.
pub mod ident;

/// Local-versus-external link resolution.
pub mod links;

/// Override-aware member flattening.
pub mod members;

/// The symbol model consumed by the generator.
pub mod model;

/// Namespace/type tree for the site index.
pub mod tree;

pub use crate::docs::{DocCache, DocResolver, ResolvedDocumentation};
pub use crate::error::{RefsiteError, Result};
pub use crate::generator::{GenerationSummary, PageFailure, SiteGenerator};
pub use crate::links::{ExternalLinks, Link, LinkContext, LinkResolver, ReferenceSourceLinks};
pub use crate::members::{MemberEntry, TypeMembers, resolve_members};
pub use crate::model::{GraphIndex, Symbol, SymbolGraph, SymbolId};
pub use crate::tree::TreeNode;
