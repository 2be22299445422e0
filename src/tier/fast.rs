use async_trait::async_trait;

use super::descriptor::TierDescriptor;
use super::error::{TierError, TierResult};
use super::{Tier, TierLoad};
use crate::storage::{CacheWriter, FastLocalStore};

/// Tier 1: the promoted cache file.
pub struct FastLocalTier {
    descriptor: TierDescriptor,
    store: FastLocalStore,
}

impl FastLocalTier {
    pub fn new(descriptor: TierDescriptor, store: FastLocalStore) -> Self {
        Self { descriptor, store }
    }
}

#[async_trait]
impl Tier for FastLocalTier {
    fn descriptor(&self) -> &TierDescriptor {
        &self.descriptor
    }

    async fn load(&self, _writer: &CacheWriter) -> TierResult<TierLoad> {
        self.store
            .load_cached()
            .await
            .map(TierLoad::unstaged)
            .ok_or(TierError::CacheAbsent)
    }
}
