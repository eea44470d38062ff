//! Error types shared across the refsite library.

use std::fmt;
use std::path::PathBuf;

use serde_json::Error as SerdeError;

use crate::model::SymbolId;

/// Aggregate errors produced by the refsite library.
#[derive(Debug)]
pub enum RefsiteError {
	/// Failed to perform IO operations against the output tree.
	Io(std::io::Error),
	/// Failed to write a single generated page.
	PageWrite {
		/// Destination path of the page that could not be written.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Failed to encode or decode JSON.
	Serialization(SerdeError),
	/// The symbol graph referenced an id that is not present in its index.
	DanglingId(SymbolId),
	/// A base-type or override chain exceeded the maximum supported depth.
	CyclicHierarchy(String),
	/// The supplied symbol graph is malformed.
	InvalidGraph(String),
}

impl fmt::Display for RefsiteError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(err) => write!(f, "{err}"),
			Self::PageWrite { path, source } => {
				write!(f, "failed to write page {}: {source}", path.display())
			}
			Self::Serialization(err) => write!(f, "{err}"),
			Self::DanglingId(id) => {
				write!(f, "symbol graph references id {} which is not in the index", id.0)
			}
			Self::CyclicHierarchy(symbol) => {
				write!(
					f,
					"hierarchy walk for `{symbol}` exceeded the maximum depth; the base-type or override chain is cyclic"
				)
			}
			Self::InvalidGraph(message) => write!(f, "{message}"),
		}
	}
}

impl std::error::Error for RefsiteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(err) => Some(err),
			Self::PageWrite { source, .. } => Some(source),
			Self::Serialization(err) => Some(err),
			Self::DanglingId(_) | Self::CyclicHierarchy(_) | Self::InvalidGraph(_) => None,
		}
	}
}

impl From<std::io::Error> for RefsiteError {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<SerdeError> for RefsiteError {
	fn from(err: SerdeError) -> Self {
		Self::Serialization(err)
	}
}

/// Result type returned by the refsite library.
pub type Result<T> = std::result::Result<T, RefsiteError>;
