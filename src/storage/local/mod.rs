//! Fast Local Store: the single canonical cache file.


use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::codec::decode_native;
use crate::constants::CACHE_FILE_NAME;
use crate::index::AliasIndex;
use crate::storage::error::CacheReadError;
use crate::storage::mmap::{MmapError, MmapFileHandle};

#[derive(Debug, Clone)]
/// Reads the promoted cache from a process-owned directory.
pub struct FastLocalStore {
    cache_dir: PathBuf,
}

impl FastLocalStore {
    /// Creates a store rooted at `cache_dir`. Nothing is created on disk yet.
    pub fn new(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Canonical cache file path. The file name is fixed.
    pub fn cache_path(&self) -> PathBuf {
        self.cache_dir.join(CACHE_FILE_NAME)
    }

    /// Returns `true` if the canonical cache file exists.
    pub fn exists(&self) -> bool {
        self.cache_path().is_file()
    }

    /// Ensures the cache directory exists.
    pub fn ensure_cache_dir(&self) -> io::Result<()> {
        if !self.cache_dir.exists() {
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }

    /// Decodes a file in the native cache format.
    ///
    /// Shared by the tier-1 read and by the compressed tier, which validates its staged
    /// copy through this same path before committing it.
    pub fn read_file(path: &Path) -> Result<AliasIndex, CacheReadError> {
        let handle = MmapFileHandle::open(path)?;
        Ok(decode_native(handle.as_slice())?)
    }

    /// Blocking variant of [`load_cached`](Self::load_cached).
    pub fn load_cached_blocking(&self) -> Option<AliasIndex> {
        let path = self.cache_path();

        match Self::read_file(&path) {
            Ok(index) => {
                debug!(path = %path.display(), entities = index.len(), "Loaded cached alias index");
                Some(index)
            }
            Err(CacheReadError::Mmap(MmapError::Io(e))) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No cached alias index");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unusable alias cache");
                None
            }
        }
    }

    /// Reads the canonical cache file. Missing, empty or malformed files are all
    /// reported as absent so resolution falls through to remote tiers.
    pub async fn load_cached(&self) -> Option<AliasIndex> {
        let store = self.clone();
        match tokio::task::spawn_blocking(move || store.load_cached_blocking()).await {
            Ok(index) => index,
            Err(e) => {
                warn!(error = %e, "Cache read task failed");
                None
            }
        }
    }
}
