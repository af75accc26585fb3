use std::path::PathBuf;
use thiserror::Error;

use crate::tree::KeyPath;

/// Errors raised while loading, reassembling or writing resource documents
#[derive(Debug, Error)]
pub enum LocaleError {
    /// Source or curated document is missing, unreadable, or not a string tree
    #[error("Failed to load resource document {path}: {reason}")]
    DocumentLoad { path: PathBuf, reason: String },

    /// Output document could not be written
    #[error("Failed to write resource document {path}: {reason}")]
    DocumentWrite { path: PathBuf, reason: String },

    /// Reassembly target does not have the shape of the source tree
    #[error("Structural mismatch: no interior node along key path '{path}'")]
    StructuralMismatch { path: KeyPath },
}

impl LocaleError {
    pub fn document_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DocumentLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn document_write(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DocumentWrite {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by the chunk codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A chunk entry already contains the delimiter, so its boundaries would be lost
    #[error("Chunk entry {index} contains the delimiter token")]
    DelimiterCollision { index: usize },
}

pub type Result<T> = std::result::Result<T, LocaleError>;
