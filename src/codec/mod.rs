//! Format converters.
//!
//! - [`native`] is the Fast Local Store format (gzip-wrapped JSON). The compressed
//!   remote tier ships the same bytes.
//! - [`binary`] is the compact `rkyv` archive served by the binary tier.
//! - [`master`] parses the human-authored master record (JSON or Tauq).

/// Codec error types.
pub mod error;
pub mod binary;
pub mod master;
pub mod native;

#[cfg(test)]
mod tests;

pub use binary::{BINARY_FORMAT_VERSION, BinaryIndex, BinaryRecord, decode_binary, encode_binary};
pub use error::{CodecError, CodecResult};
pub use master::{MasterFormat, decode_master, encode_master, parse_master};
pub use native::{decode_native, encode_native};
