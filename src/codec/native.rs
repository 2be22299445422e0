//! Native cache format: gzip around the JSON form of [`AliasIndex`].

use std::io::Write;

use flate2::Compression;
use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use serde::Deserialize;

use super::error::{CodecError, CodecResult};
use crate::index::AliasIndex;

/// Encodes `index` into the bytes stored at the canonical cache path.
pub fn encode_native(index: &AliasIndex) -> CodecResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    serde_json::to_writer(&mut encoder, index)?;
    encoder.flush()?;
    Ok(encoder.finish()?)
}

/// Decodes native bytes.
///
/// The input must be exactly one gzip member holding one JSON document. Truncated
/// streams, trailing JSON and bytes after the gzip trailer are all errors.
pub fn decode_native(bytes: &[u8]) -> CodecResult<AliasIndex> {
    let mut decoder = GzDecoder::new(bytes);

    let index = {
        let mut de = serde_json::Deserializer::from_reader(&mut decoder);
        let index = AliasIndex::deserialize(&mut de)?;
        de.end()?;
        index
    };

    let rest = decoder.into_inner();
    if !rest.is_empty() {
        return Err(CodecError::TrailingBytes { len: rest.len() });
    }
    Ok(index)
}
