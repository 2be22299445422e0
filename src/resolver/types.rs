use crate::index::AliasIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What happened to the Fast Local Store after a successful load.
pub enum Promotion {
    /// The serving tier does not write back (or is the cache itself).
    NotRequired,
    /// The cache now holds the served index.
    Promoted { bytes: u64 },
    /// Promotion was attempted and failed; the index is still valid.
    Failed { reason: String },
}

impl Promotion {
    pub fn is_promoted(&self) -> bool {
        matches!(self, Promotion::Promoted { .. })
    }
}

#[derive(Debug, Clone)]
/// Outcome of a successful resolution.
pub struct Resolution {
    pub index: AliasIndex,
    /// Name of the tier that served the index.
    pub tier: String,
    /// Zero-based position of that tier in the plan.
    pub position: usize,
    pub promotion: Promotion,
}

impl Resolution {
    pub fn into_index(self) -> AliasIndex {
        self.index
    }

    /// `true` if the index came from the first tier.
    pub fn is_cache_hit(&self) -> bool {
        self.position == 0
    }
}
