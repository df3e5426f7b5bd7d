//! Error types for tree flattening.

use thiserror::Error;

/// Errors raised while flattening a tree.
///
/// The default (lenient) flattening never produces these; they only surface
/// when a caller opts into strict handling or hands over a leaf where a
/// folder was expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A leaf held contents that are neither text nor bytes.
    #[error("unsupported file contents at '{path}': {kind} (only text or bytes are accepted)")]
    UnsupportedContent { path: String, kind: &'static str },

    /// The top-level node was a file, not a folder.
    #[error("cannot enumerate {kind} contents as a directory")]
    NotABranch { kind: &'static str },
}
