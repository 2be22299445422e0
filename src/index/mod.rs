//! Alias data model: the authoritative master record and the derived index.
//!
//! - [`AliasMaster`] is what authoring tools write.
//! - [`AliasIndex`] is what every tier ultimately produces.

/// Index construction errors.
pub mod error;
mod model;


pub use error::{IndexError, IndexResult};
pub use model::{AliasEntity, AliasIndex, AliasMaster};
