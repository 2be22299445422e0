//! Tiers served by the source store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use super::descriptor::{TierDescriptor, TierFormat, WriteBack};
use super::error::{TierError, TierResult};
use super::{Staging, Tier, TierLoad};
use crate::codec::{CodecResult, decode_binary, decode_master, decode_native};
use crate::index::AliasIndex;
use crate::source::SourceStore;
use crate::storage::{CacheWriter, FastLocalStore};

/// Tier backed by one file in the source store.
pub struct RemoteTier {
    descriptor: TierDescriptor,
    dir: String,
    file: String,
    source: Arc<dyn SourceStore>,
}

impl RemoteTier {
    pub fn new(
        descriptor: TierDescriptor,
        dir: String,
        file: String,
        source: Arc<dyn SourceStore>,
    ) -> Self {
        Self {
            descriptor,
            dir,
            file,
            source,
        }
    }

    async fn fetch(&self) -> TierResult<Vec<u8>> {
        let dir = self
            .source
            .find_dir(&self.dir)
            .await?
            .ok_or_else(|| TierError::NotFound {
                what: format!("directory '{}' under {}", self.dir, self.source.root_name()),
            })?;

        let file = self
            .source
            .find_file(&dir, &self.file)
            .await?
            .ok_or_else(|| TierError::NotFound {
                what: format!("file '{}/{}'", self.dir, self.file),
            })?;

        let mut reader = self.source.open(&file).await?;
        let mut bytes = Vec::with_capacity(file.len.unwrap_or(0) as usize);
        reader.read_to_end(&mut bytes).await?;

        debug!(
            tier = %self.descriptor.name,
            path = %file.display_path(),
            bytes = bytes.len(),
            "Fetched tier source"
        );
        Ok(bytes)
    }
}

/// Runs the converter matching `format`.
pub fn decode(format: TierFormat, bytes: &[u8]) -> CodecResult<AliasIndex> {
    match format {
        TierFormat::Native => decode_native(bytes),
        TierFormat::CompactBinary => decode_binary(bytes),
        TierFormat::Master(master) => decode_master(bytes, master),
    }
}

/// Stages `bytes` next to the cache and reads the index back through the cache reader.
///
/// A staged copy that fails to decode is dropped (removing the temp file) so a bad
/// remote file never reaches the canonical path. If staging itself fails the bytes are
/// decoded in memory and the failure is handed to the resolver.
fn copy_through_cache(
    writer: &CacheWriter,
    tier: &str,
    format: TierFormat,
    bytes: Vec<u8>,
) -> TierResult<TierLoad> {
    match writer.stage_bytes_blocking(&bytes) {
        Ok(staged) => {
            let index = FastLocalStore::read_file(staged.path())?;
            Ok(TierLoad {
                index,
                staging: Staging::Staged(staged),
            })
        }
        Err(e) => {
            warn!(tier = %tier, error = %e, "Could not stage tier bytes; decoding in memory");
            let index = decode(format, &bytes)?;
            Ok(TierLoad {
                index,
                staging: Staging::Failed(e),
            })
        }
    }
}

#[async_trait]
impl Tier for RemoteTier {
    fn descriptor(&self) -> &TierDescriptor {
        &self.descriptor
    }

    async fn load(&self, writer: &CacheWriter) -> TierResult<TierLoad> {
        let bytes = self.fetch().await?;
        let format = self.descriptor.format;

        let load = match self.descriptor.effective_write_back() {
            WriteBack::CopyBytes => {
                let writer = writer.clone();
                let tier = self.descriptor.name.clone();
                tokio::task::spawn_blocking(move || {
                    copy_through_cache(&writer, &tier, format, bytes)
                })
                .await
                .map_err(|e| TierError::Task(e.to_string()))??
            }
            WriteBack::None | WriteBack::Reserialize => {
                let index = tokio::task::spawn_blocking(move || decode(format, &bytes))
                    .await
                    .map_err(|e| TierError::Task(e.to_string()))??;
                TierLoad::unstaged(index)
            }
        };

        Ok(load)
    }
}
