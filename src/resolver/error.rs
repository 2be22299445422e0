use thiserror::Error;

use crate::tier::TierError;

#[derive(Debug)]
/// Why one tier was skipped during a resolution.
pub struct TierFailure {
    pub tier: String,
    pub position: usize,
    pub error: TierError,
}

impl std::fmt::Display for TierFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}: {}", self.position + 1, self.tier, self.error)
    }
}

#[derive(Error, Debug)]
/// The only error a resolution surfaces to its caller.
pub enum ResolveError {
    /// Every configured tier failed. Alias-dependent features should be disabled.
    #[error("no alias source available ({} tiers tried)", .failures.len())]
    AllTiersExhausted { failures: Vec<TierFailure> },
}

pub type ResolveResult<T> = Result<T, ResolveError>;
