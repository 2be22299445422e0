//! Tier descriptors: where a tier lives, how it is encoded, and how it promotes.

use std::fmt;

use crate::codec::MasterFormat;
use crate::constants::TIER_FAST_LOCAL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierLocation {
    /// The canonical cache file in the local cache directory.
    FastLocal,
    /// `file` inside directory `dir` of the source store.
    Remote { dir: String, file: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierFormat {
    /// Same bytes as the Fast Local Store (gzip JSON).
    Native,
    /// rkyv archive.
    CompactBinary,
    /// Human-authored master record.
    Master(MasterFormat),
}

impl fmt::Display for TierFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierFormat::Native => write!(f, "native"),
            TierFormat::CompactBinary => write!(f, "compact_binary"),
            TierFormat::Master(MasterFormat::Json) => write!(f, "master_json"),
            TierFormat::Master(MasterFormat::Tauq) => write!(f, "master_tauq"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// What happens to the Fast Local Store after this tier serves an index.
pub enum WriteBack {
    #[default]
    /// Leave the cache alone.
    None,
    /// Copy the tier's bytes verbatim. Only valid for [`TierFormat::Native`].
    CopyBytes,
    /// Encode the loaded index in the native format.
    Reserialize,
}

impl fmt::Display for WriteBack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteBack::None => write!(f, "none"),
            WriteBack::CopyBytes => write!(f, "copy_bytes"),
            WriteBack::Reserialize => write!(f, "reserialize"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry in the ordered resolution plan.
pub struct TierDescriptor {
    pub name: String,
    pub location: TierLocation,
    pub format: TierFormat,
    pub write_back: WriteBack,
}

impl TierDescriptor {
    /// The Fast Local Store tier. It is the cache, so it never writes back.
    pub fn fast_local() -> Self {
        Self {
            name: TIER_FAST_LOCAL.to_string(),
            location: TierLocation::FastLocal,
            format: TierFormat::Native,
            write_back: WriteBack::None,
        }
    }

    pub fn remote(
        name: impl Into<String>,
        dir: impl Into<String>,
        file: impl Into<String>,
        format: TierFormat,
        write_back: WriteBack,
    ) -> Self {
        Self {
            name: name.into(),
            location: TierLocation::Remote {
                dir: dir.into(),
                file: file.into(),
            },
            format,
            write_back,
        }
    }

    pub fn is_fast_local(&self) -> bool {
        matches!(self.location, TierLocation::FastLocal)
    }

    /// Write-back policy after normalization.
    ///
    /// Byte copies are only meaningful for native bytes; any other format falls back to
    /// re-serialization so the cache never receives foreign bytes.
    pub fn effective_write_back(&self) -> WriteBack {
        match (self.write_back, self.format) {
            _ if self.is_fast_local() => WriteBack::None,
            (WriteBack::CopyBytes, TierFormat::Native) => WriteBack::CopyBytes,
            (WriteBack::CopyBytes, _) => WriteBack::Reserialize,
            (other, _) => other,
        }
    }
}

impl fmt::Display for TierDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            TierLocation::FastLocal => write!(f, "{} (local cache)", self.name),
            TierLocation::Remote { dir, file } => {
                write!(f, "{} ({}/{}, {})", self.name, dir, file, self.format)
            }
        }
    }
}
