use std::sync::Arc;

use tracing::warn;

use super::descriptor::{TierDescriptor, TierLocation};
use super::fast::FastLocalTier;
use super::remote::RemoteTier;
use super::Tier;
use crate::source::SourceStore;
use crate::storage::FastLocalStore;

/// Builds the ordered tier list for a resolution plan.
pub fn build_tiers(
    plan: &[TierDescriptor],
    source: Arc<dyn SourceStore>,
    cache: &FastLocalStore,
) -> Vec<Box<dyn Tier>> {
    plan.iter()
        .map(|descriptor| -> Box<dyn Tier> {
            if descriptor.effective_write_back() != descriptor.write_back {
                warn!(
                    tier = %descriptor.name,
                    configured = %descriptor.write_back,
                    effective = %descriptor.effective_write_back(),
                    "Adjusted write-back policy for tier"
                );
            }

            match &descriptor.location {
                TierLocation::FastLocal => {
                    Box::new(FastLocalTier::new(descriptor.clone(), cache.clone()))
                }
                TierLocation::Remote { dir, file } => Box::new(RemoteTier::new(
                    descriptor.clone(),
                    dir.clone(),
                    file.clone(),
                    Arc::clone(&source),
                )),
            }
        })
        .collect()
}
