//! Tier resolver: tries each tier in order and promotes fallback hits into the cache.

pub mod error;
pub mod types;


pub use error::{ResolveError, ResolveResult, TierFailure};
pub use types::{Promotion, Resolution};

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;
use crate::hashing::short_hex;
use crate::index::AliasIndex;
use crate::source::{LocalSourceStore, SourceStore};
use crate::storage::{CacheWriter, FastLocalStore};
use crate::tier::{Staging, Tier, TierDescriptor, WriteBack, build_tiers};

/// Resolves the alias index from an ordered list of tiers.
///
/// Owns its collaborators; there is no process-wide state. Cloning is not supported,
/// share it behind an [`Arc`] instead (see [`spawn_resolve`](Self::spawn_resolve)).
pub struct AliasResolver {
    tiers: Vec<Box<dyn Tier>>,
    writer: CacheWriter,
}

impl std::fmt::Debug for AliasResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasResolver")
            .field(
                "tiers",
                &self
                    .tiers
                    .iter()
                    .map(|t| t.descriptor().name.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("cache", &self.writer.store().cache_path())
            .finish()
    }
}

impl AliasResolver {
    /// Creates a resolver over prebuilt tiers.
    pub fn new(tiers: Vec<Box<dyn Tier>>, writer: CacheWriter) -> Self {
        Self { tiers, writer }
    }

    /// Builds tiers from `plan`, reading remote tiers through `source`.
    pub fn from_plan(
        plan: &[TierDescriptor],
        source: Arc<dyn SourceStore>,
        cache: FastLocalStore,
    ) -> Self {
        let tiers = build_tiers(plan, source, &cache);
        Self::new(tiers, CacheWriter::new(cache))
    }

    /// Builds the default four-tier resolver over a local source directory.
    pub fn from_config(config: &Config) -> Self {
        let source: Arc<dyn SourceStore> =
            Arc::new(LocalSourceStore::new(config.source_root.clone()));
        Self::from_plan(
            &config.tier_plan(),
            source,
            FastLocalStore::new(config.cache_dir.clone()),
        )
    }

    pub fn cache(&self) -> &FastLocalStore {
        self.writer.store()
    }

    /// Descriptors in resolution order.
    pub fn plan(&self) -> impl Iterator<Item = &TierDescriptor> {
        self.tiers.iter().map(|t| t.descriptor())
    }

    /// Resolves the index, discarding resolution details.
    pub async fn resolve(&self) -> ResolveResult<AliasIndex> {
        self.resolve_detailed().await.map(Resolution::into_index)
    }

    /// Resolves the index.
    ///
    /// Tiers are attempted strictly in order and every tier error is absorbed. Any
    /// write-back finishes (or is logged as failed) before this returns.
    #[instrument(skip(self), fields(tiers = self.tiers.len()))]
    pub async fn resolve_detailed(&self) -> ResolveResult<Resolution> {
        let mut failures = Vec::new();

        for (position, tier) in self.tiers.iter().enumerate() {
            let descriptor = tier.descriptor();
            debug!(tier = %descriptor.name, position, "Attempting tier");

            match tier.load(&self.writer).await {
                Ok(load) => {
                    info!(
                        tier = %descriptor.name,
                        position,
                        entities = load.index.len(),
                        aliases = load.index.alias_count(),
                        fingerprint = %short_hex(&load.index.fingerprint()),
                        "Alias index resolved"
                    );

                    let promotion = self.write_back(descriptor, load.staging, &load.index).await;

                    return Ok(Resolution {
                        index: load.index,
                        tier: descriptor.name.clone(),
                        position,
                        promotion,
                    });
                }
                Err(e) => {
                    warn!(tier = %descriptor.name, position, error = %e, "Tier unavailable");
                    failures.push(TierFailure {
                        tier: descriptor.name.clone(),
                        position,
                        error: e,
                    });
                }
            }
        }

        error!(
            attempted = failures.len(),
            "All alias tiers exhausted; alias features unavailable"
        );
        Err(ResolveError::AllTiersExhausted { failures })
    }

    /// Runs [`resolve_detailed`](Self::resolve_detailed) as a background task.
    pub fn spawn_resolve(self: Arc<Self>) -> JoinHandle<ResolveResult<Resolution>> {
        tokio::spawn(async move { self.resolve_detailed().await })
    }

    async fn write_back(
        &self,
        descriptor: &TierDescriptor,
        staging: Staging,
        index: &AliasIndex,
    ) -> Promotion {
        let result = match (descriptor.effective_write_back(), staging) {
            (_, Staging::Failed(e)) => Err(e),
            (WriteBack::CopyBytes, Staging::Staged(staged)) => self.writer.commit(staged).await,
            (WriteBack::None, _) => return Promotion::NotRequired,
            // Reserialize, or a copy tier that produced nothing to commit.
            (_, _) => self.writer.promote(index).await,
        };

        match result {
            Ok(bytes) => Promotion::Promoted { bytes },
            Err(e) => {
                warn!(
                    tier = %descriptor.name,
                    path = %self.writer.store().cache_path().display(),
                    error = %e,
                    "Write-back to fast local store failed"
                );
                Promotion::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
