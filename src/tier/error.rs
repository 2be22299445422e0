use thiserror::Error;

use crate::codec::CodecError;
use crate::source::SourceError;
use crate::storage::CacheReadError;

#[derive(Error, Debug)]
/// A single tier could not produce an index. Always recovered by falling through.
pub enum TierError {
    /// The Fast Local Store has no usable cache file.
    #[error("fast local cache absent or unusable")]
    CacheAbsent,

    /// The tier's directory or file does not exist.
    #[error("{what} not found")]
    NotFound { what: String },

    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode failed: {0}")]
    Codec(#[from] CodecError),

    /// The staged copy of a byte-compatible tier failed validation.
    #[error("staged copy unusable: {0}")]
    Staged(#[from] CacheReadError),

    #[error("background task failed: {0}")]
    Task(String),
}

pub type TierResult<T> = Result<T, TierError>;
