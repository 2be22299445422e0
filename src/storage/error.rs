use thiserror::Error;

use crate::codec::CodecError;
use crate::storage::mmap::MmapError;

#[derive(Error, Debug)]
/// Reasons the canonical cache file could not be turned into an index.
pub enum CacheReadError {
    #[error("cache file unreadable: {0}")]
    Mmap(#[from] MmapError),

    #[error("cache file malformed: {0}")]
    Codec(#[from] CodecError),
}

#[derive(Error, Debug)]
/// Promotion into the Fast Local Store failed. Never fatal to a resolution.
pub enum WriteBackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode failed: {0}")]
    Codec(#[from] CodecError),

    #[error("background task failed: {0}")]
    Task(String),
}

pub type WriteBackResult<T> = Result<T, WriteBackError>;
