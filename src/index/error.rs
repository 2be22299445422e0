use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Errors raised while deriving an [`AliasIndex`](super::AliasIndex) from a master record.
pub enum IndexError {
    /// An entity had no usable identifier.
    #[error("entity at position {position} has an empty identifier")]
    EmptyIdentifier {
        /// Zero-based position of the entity in the master record.
        position: usize,
    },
}

/// Convenience result type for index construction.
pub type IndexResult<T> = Result<T, IndexError>;
