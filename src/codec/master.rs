//! Master record parsing (JSON or Tauq notation).

use std::path::Path;

use super::error::{CodecError, CodecResult};
use crate::index::{AliasIndex, AliasMaster};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Notation used by the master file.
pub enum MasterFormat {
    #[default]
    /// `{"entities":[{"id":..,"aliases":[..]}]}`
    Json,
    /// The same document written in Tauq notation.
    Tauq,
}

impl MasterFormat {
    /// Picks the notation from a file name: `.tqn`/`.tauq` is Tauq, anything else JSON.
    pub fn from_file_name(name: &str) -> Self {
        match Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("tqn") | Some("tauq") => Self::Tauq,
            _ => Self::Json,
        }
    }
}

impl std::str::FromStr for MasterFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "tauq" | "tqn" => Ok(Self::Tauq),
            _ => Err(format!("Unknown master format: {}", s)),
        }
    }
}

/// Parses master bytes into an [`AliasMaster`]. A leading UTF-8 BOM is ignored.
pub fn parse_master(bytes: &[u8], format: MasterFormat) -> CodecResult<AliasMaster> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match format {
        MasterFormat::Json => Ok(serde_json::from_slice(bytes)?),
        MasterFormat::Tauq => {
            let text = std::str::from_utf8(bytes)?;
            let value =
                tauq::compile_tauq(text).map_err(|e| CodecError::Tauq(format!("{:?}", e)))?;
            Ok(serde_json::from_value(value)?)
        }
    }
}

/// Parses master bytes and derives the index from them.
pub fn decode_master(bytes: &[u8], format: MasterFormat) -> CodecResult<AliasIndex> {
    let master = parse_master(bytes, format)?;
    Ok(AliasIndex::from_master(&master)?)
}

/// Writes `master` in the given notation.
pub fn encode_master(master: &AliasMaster, format: MasterFormat) -> CodecResult<Vec<u8>> {
    match format {
        MasterFormat::Json => Ok(serde_json::to_vec_pretty(master)?),
        MasterFormat::Tauq => {
            let value = serde_json::to_value(master)?;
            Ok(tauq::format_to_tauq(&value).into_bytes())
        }
    }
}
