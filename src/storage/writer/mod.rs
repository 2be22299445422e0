//! Cache Writer: stage into a temp file next to the cache, then rename over it.
//!
//! The canonical file is only ever replaced by [`NamedTempFile::persist`], so readers
//! see either no file, the complete old file or the complete new file.


use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::codec::encode_native;
use crate::constants::{STAGING_PREFIX, STAGING_SUFFIX};
use crate::hashing::{hash_bytes, hash_to_u64, short_hex};
use crate::index::AliasIndex;
use crate::storage::error::{WriteBackError, WriteBackResult};
use crate::storage::local::FastLocalStore;

/// Bytes staged next to the canonical cache file, not yet visible to readers.
///
/// Dropping a `StagedCache` without committing it deletes the temp file and leaves the
/// canonical file untouched.
#[derive(Debug)]
pub struct StagedCache {
    file: NamedTempFile,
    len: u64,
}

impl StagedCache {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone)]
/// Promotes data into a [`FastLocalStore`].
pub struct CacheWriter {
    store: FastLocalStore,
}

impl CacheWriter {
    pub fn new(store: FastLocalStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FastLocalStore {
        &self.store
    }

    /// Writes `data` to a fresh temp file in the cache directory and syncs it.
    pub fn stage_bytes_blocking(&self, data: &[u8]) -> WriteBackResult<StagedCache> {
        self.store.ensure_cache_dir()?;

        let mut file = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .suffix(STAGING_SUFFIX)
            .tempfile_in(self.store.cache_dir())?;

        file.write_all(data)?;
        file.flush()?;
        file.as_file().sync_all()?;

        debug!(
            path = %file.path().display(),
            bytes = data.len(),
            content = %short_hex(&hash_bytes(data)),
            "Staged alias cache"
        );

        Ok(StagedCache {
            file,
            len: data.len() as u64,
        })
    }

    /// Atomically renames `staged` over the canonical cache path.
    pub fn commit_blocking(&self, staged: StagedCache) -> WriteBackResult<u64> {
        let target = self.store.cache_path();
        let len = staged.len;

        staged.file.persist(&target).map_err(|e| e.error)?;
        sync_dir(self.store.cache_dir());

        info!(path = %target.display(), bytes = len, "Promoted alias cache");
        Ok(len)
    }

    /// Serializes `index` in the native format and commits it.
    pub fn promote_blocking(&self, index: &AliasIndex) -> WriteBackResult<u64> {
        let bytes = encode_native(index)?;
        debug!(
            entities = index.len(),
            content = hash_to_u64(&bytes),
            "Encoded alias index for promotion"
        );
        let staged = self.stage_bytes_blocking(&bytes)?;
        self.commit_blocking(staged)
    }

    pub async fn stage_bytes(&self, data: Vec<u8>) -> WriteBackResult<StagedCache> {
        let writer = self.clone();
        tokio::task::spawn_blocking(move || writer.stage_bytes_blocking(&data))
            .await
            .map_err(|e| WriteBackError::Task(e.to_string()))?
    }

    pub async fn commit(&self, staged: StagedCache) -> WriteBackResult<u64> {
        let writer = self.clone();
        tokio::task::spawn_blocking(move || writer.commit_blocking(staged))
            .await
            .map_err(|e| WriteBackError::Task(e.to_string()))?
    }

    /// Promotes `index` into the Fast Local Store.
    ///
    /// Encoding happens on the caller's task; staging and rename run on the blocking
    /// pool and complete even if the caller is dropped mid-way.
    pub async fn promote(&self, index: &AliasIndex) -> WriteBackResult<u64> {
        let bytes = encode_native(index)?;
        let staged = self.stage_bytes(bytes).await?;
        self.commit(staged).await
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Err(e) = std::fs::File::open(dir).and_then(|d| d.sync_all()) {
        debug!(path = %dir.display(), error = %e, "Directory sync failed");
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}
