//! Read-only access to the authoritative file store.
//!
//! The resolver only needs to find a named directory under a well-known root, find a
//! named file inside it and stream its bytes. [`LocalSourceStore`] serves a directory
//! tree on disk; [`MockSourceStore`] is an in-memory double that counts calls.

pub mod error;
pub mod local;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{SourceError, SourceResult};
pub use local::LocalSourceStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSourceStore;

use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Readable byte stream for one source file.
pub type SourceReader = Box<dyn AsyncRead + Send + Unpin>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A directory found under the store's root.
pub struct SourceDir {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file found inside a [`SourceDir`].
pub struct SourceFile {
    pub dir: String,
    pub name: String,
    /// Size in bytes, when the store knows it up front.
    pub len: Option<u64>,
}

impl SourceFile {
    /// `dir/name`, used in logs.
    pub fn display_path(&self) -> String {
        format!("{}/{}", self.dir, self.name)
    }
}

#[async_trait]
/// Storage-access collaborator consumed by the remote tiers.
pub trait SourceStore: Send + Sync {
    /// Human-readable name of the root location, for logs.
    fn root_name(&self) -> String;

    /// Finds a directory directly under the root.
    async fn find_dir(&self, name: &str) -> SourceResult<Option<SourceDir>>;

    /// Finds a file directly inside `dir`.
    async fn find_file(&self, dir: &SourceDir, name: &str) -> SourceResult<Option<SourceFile>>;

    /// Opens `file` for reading.
    async fn open(&self, file: &SourceFile) -> SourceResult<SourceReader>;
}

/// Rejects names that could escape the directory they are looked up in.
pub(crate) fn validate_segment(name: &str) -> SourceResult<()> {
    use std::path::{Component, Path};

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(SourceError::InvalidName {
            name: name.to_string(),
        }),
    }
}
