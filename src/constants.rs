//! Cross-cutting, shared constants.
//!
//! # Cache File Invariant
//!
//! [`CACHE_FILE_NAME`] is shared by both promotion paths (byte copy from the
//! compressed tier and re-serialization from the master tier). It is deliberately
//! absent from [`Config`](crate::config::Config): every writer and the reader must
//! agree on it.

/// Canonical file name of the promoted cache inside the cache directory.
pub const CACHE_FILE_NAME: &str = "alias_index.cache";

/// Prefix for staging files created next to the canonical cache file.
pub const STAGING_PREFIX: &str = ".alias_index.";
/// Suffix for staging files created next to the canonical cache file.
pub const STAGING_SUFFIX: &str = ".tmp";

pub const DEFAULT_CACHE_DIR: &str = "./.alias-cache";
pub const DEFAULT_SOURCE_ROOT: &str = "./alias-source";
pub const DEFAULT_SOURCE_DIR: &str = "alias";

pub const DEFAULT_BINARY_FILE: &str = "alias_index.rkyv";
pub const DEFAULT_COMPRESSED_FILE: &str = "alias_index.json.gz";
pub const DEFAULT_MASTER_FILE: &str = "alias_master.json";

/// Tier names used in logs and [`Resolution`](crate::resolver::Resolution).
pub const TIER_FAST_LOCAL: &str = "fast_local";
pub const TIER_COMPACT_BINARY: &str = "compact_binary";
pub const TIER_COMPRESSED: &str = "compressed";
pub const TIER_MASTER: &str = "master";

/// rkyv archives are copied into buffers with this alignment before validation.
pub const RKYV_ALIGNMENT: usize = 16;
