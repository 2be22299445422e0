use thiserror::Error;

#[derive(Error, Debug)]
/// Errors returned by a [`SourceStore`](super::SourceStore).
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store itself cannot be reached (unmounted volume, offline backend).
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("invalid name '{name}': must be a single path segment")]
    InvalidName { name: String },
}

pub type SourceResult<T> = Result<T, SourceError>;
