//! Resolution tiers.
//!
//! A tier is anything that can attempt to produce an [`AliasIndex`]. The resolver only
//! sees `Box<dyn Tier>` values built from [`TierDescriptor`]s, so adding a tier never
//! touches orchestration.

pub mod descriptor;
pub mod error;
pub mod factory;
pub mod fast;
pub mod remote;


pub use descriptor::{TierDescriptor, TierFormat, TierLocation, WriteBack};
pub use error::{TierError, TierResult};
pub use factory::build_tiers;
pub use fast::FastLocalTier;
pub use remote::RemoteTier;

use async_trait::async_trait;

use crate::index::AliasIndex;
use crate::storage::{CacheWriter, StagedCache, WriteBackError};

#[derive(Debug)]
/// State of the promotion a tier prepared while loading.
pub enum Staging {
    /// Nothing was prepared.
    None,
    /// Verbatim bytes sit in a temp file awaiting commit.
    Staged(StagedCache),
    /// The tier loaded fine but could not stage its bytes.
    Failed(WriteBackError),
}

#[derive(Debug)]
/// Successful tier attempt.
pub struct TierLoad {
    pub index: AliasIndex,
    pub staging: Staging,
}

impl TierLoad {
    pub fn unstaged(index: AliasIndex) -> Self {
        Self {
            index,
            staging: Staging::None,
        }
    }
}

#[async_trait]
/// Uniform attempt-load capability shared by every tier.
pub trait Tier: Send + Sync {
    fn descriptor(&self) -> &TierDescriptor;

    /// Attempts to materialize the index. Byte-copy tiers stage through `writer`; the
    /// commit itself is left to the resolver.
    async fn load(&self, writer: &CacheWriter) -> TierResult<TierLoad>;
}
