use thiserror::Error;

use crate::index::IndexError;

#[derive(Error, Debug)]
/// Errors returned by the format converters.
pub enum CodecError {
    /// JSON encode/decode failure (includes gzip stream errors surfaced while reading).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while compressing or decompressing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes left over after the gzip member of a native file.
    #[error("{len} trailing bytes after gzip stream")]
    TrailingBytes { len: usize },

    /// rkyv serialization or validation failure.
    #[error("binary archive error: {0}")]
    Binary(String),

    /// Archive was written by an incompatible encoder.
    #[error("unsupported binary format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the archive.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },

    /// Tauq notation could not be compiled.
    #[error("Tauq error: {0}")]
    Tauq(String),

    /// Master text was not UTF-8.
    #[error("master file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Master content was structurally valid but semantically unusable.
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Convenience result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
