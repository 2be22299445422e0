//! Alias resolver library crate (used by the `alias-resolve` binary and integration tests).
//!
//! Loads the alias index from an ordered list of tiers and heals the local cache when a
//! slower tier had to be used.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`AliasResolver`], [`Resolution`], [`Promotion`] - Tiered resolution
//! - [`ResolveError`] - The single fatal outcome (`AllTiersExhausted`)
//! - [`AliasIndex`], [`AliasMaster`], [`AliasEntity`] - Domain data
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//!
//! ## Tiers & Storage
//! - [`Tier`], [`TierDescriptor`], [`WriteBack`] - Tier abstraction and plan
//! - [`FastLocalStore`], [`CacheWriter`] - Local cache and atomic promotion
//! - [`SourceStore`], [`LocalSourceStore`] - Authoritative file store
//!
//! ## Test/Mock Support
//! [`MockSourceStore`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod codec;
pub mod config;
pub mod constants;
pub mod hashing;
pub mod index;
pub mod resolver;
pub mod source;
pub mod storage;
pub mod tier;

pub use codec::{CodecError, MasterFormat};
pub use config::{Config, ConfigError};
pub use hashing::{hash_index, short_hex};
pub use index::{AliasEntity, AliasIndex, AliasMaster, IndexError};
pub use resolver::{AliasResolver, Promotion, Resolution, ResolveError, TierFailure};
#[cfg(any(test, feature = "mock"))]
pub use source::MockSourceStore;
pub use source::{LocalSourceStore, SourceError, SourceStore};
pub use storage::{CacheWriter, FastLocalStore};
pub use tier::{Tier, TierDescriptor, TierError, TierFormat, WriteBack};
