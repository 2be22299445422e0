//! Compact binary format: an `rkyv` archive of flat records.

use rkyv::rancor::Error as RkyvError;
use rkyv::util::AlignedVec;
use rkyv::{Archive, Deserialize, Serialize};

use super::error::{CodecError, CodecResult};
use crate::constants::RKYV_ALIGNMENT;
use crate::index::AliasIndex;

/// Bumped whenever [`BinaryIndex`] changes shape.
pub const BINARY_FORMAT_VERSION: u32 = 1;

/// One entity as stored in the binary archive.
#[derive(Archive, Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct BinaryRecord {
    pub id: String,
    pub aliases: Vec<String>,
}

/// Root of the binary archive.
#[derive(Archive, Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct BinaryIndex {
    pub version: u32,
    pub records: Vec<BinaryRecord>,
}

impl From<&AliasIndex> for BinaryIndex {
    fn from(index: &AliasIndex) -> Self {
        Self {
            version: BINARY_FORMAT_VERSION,
            records: index
                .iter()
                .map(|(id, aliases)| BinaryRecord {
                    id: id.to_string(),
                    aliases: aliases.iter().cloned().collect(),
                })
                .collect(),
        }
    }
}

/// Encodes `index` as a binary archive (used by authoring tools and tests).
pub fn encode_binary(index: &AliasIndex) -> CodecResult<Vec<u8>> {
    let archive = BinaryIndex::from(index);
    let bytes = rkyv::to_bytes::<RkyvError>(&archive)
        .map_err(|e| CodecError::Binary(format!("{:?}", e)))?;
    Ok(bytes.to_vec())
}

/// Validates and deserializes a binary archive straight into an [`AliasIndex`].
///
/// Input read from a stream has no alignment guarantee, so it is copied into an
/// aligned buffer before validation.
pub fn decode_binary(bytes: &[u8]) -> CodecResult<AliasIndex> {
    let mut aligned = AlignedVec::<RKYV_ALIGNMENT>::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let archive = rkyv::from_bytes::<BinaryIndex, RkyvError>(&aligned)
        .map_err(|e| CodecError::Binary(format!("{:?}", e)))?;

    if archive.version != BINARY_FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion {
            found: archive.version,
            expected: BINARY_FORMAT_VERSION,
        });
    }

    Ok(AliasIndex::from_entries(
        archive.records.into_iter().map(|r| (r.id, r.aliases)),
    ))
}
