//! Local storage for the promoted cache.
//!
//! - [`local`] reads the canonical cache file (the Fast Local Store).
//! - [`writer`] stages and atomically commits new cache contents.
//! - [`mmap`] provides the read-only mapping both use.

pub mod error;
pub mod local;
pub mod mmap;
pub mod writer;

pub use error::{CacheReadError, WriteBackError, WriteBackResult};
pub use local::FastLocalStore;
pub use writer::{CacheWriter, StagedCache};
