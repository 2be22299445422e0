//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `ALIAS_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::codec::MasterFormat;
use crate::constants::{
    DEFAULT_BINARY_FILE, DEFAULT_CACHE_DIR, DEFAULT_COMPRESSED_FILE, DEFAULT_MASTER_FILE,
    DEFAULT_SOURCE_DIR, DEFAULT_SOURCE_ROOT, TIER_COMPACT_BINARY, TIER_COMPRESSED, TIER_MASTER,
};
use crate::tier::{TierDescriptor, TierFormat, WriteBack};

/// Resolver configuration loaded from environment variables.
///
/// The canonical cache file name is intentionally not configurable; see
/// [`CACHE_FILE_NAME`](crate::constants::CACHE_FILE_NAME).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Process-owned directory holding the promoted cache. Default: `./.alias-cache`.
    pub cache_dir: PathBuf,

    /// Root of the authoritative file store. Default: `./alias-source`.
    pub source_root: PathBuf,

    /// Directory under the root that holds the alias files. Default: `alias`.
    pub source_dir: String,

    /// Compact binary file name. Default: `alias_index.rkyv`.
    pub binary_file: String,

    /// Compressed (cache-compatible) file name. Default: `alias_index.json.gz`.
    pub compressed_file: String,

    /// Master file name; `.tqn`/`.tauq` selects Tauq notation. Default: `alias_master.json`.
    pub master_file: String,

    /// Promote binary-tier hits into the cache. Default: `false`.
    pub binary_write_back: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            source_dir: DEFAULT_SOURCE_DIR.to_string(),
            binary_file: DEFAULT_BINARY_FILE.to_string(),
            compressed_file: DEFAULT_COMPRESSED_FILE.to_string(),
            master_file: DEFAULT_MASTER_FILE.to_string(),
            binary_write_back: false,
        }
    }
}

impl Config {
    const ENV_CACHE_DIR: &'static str = "ALIAS_CACHE_DIR";
    const ENV_SOURCE_ROOT: &'static str = "ALIAS_SOURCE_ROOT";
    const ENV_SOURCE_DIR: &'static str = "ALIAS_SOURCE_DIR";
    const ENV_BINARY_FILE: &'static str = "ALIAS_BINARY_FILE";
    const ENV_COMPRESSED_FILE: &'static str = "ALIAS_COMPRESSED_FILE";
    const ENV_MASTER_FILE: &'static str = "ALIAS_MASTER_FILE";
    const ENV_BINARY_WRITE_BACK: &'static str = "ALIAS_BINARY_WRITE_BACK";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cache_dir = Self::parse_path_from_env(Self::ENV_CACHE_DIR, defaults.cache_dir);
        let source_root = Self::parse_path_from_env(Self::ENV_SOURCE_ROOT, defaults.source_root);
        let source_dir = Self::parse_string_from_env(Self::ENV_SOURCE_DIR, defaults.source_dir);
        let binary_file = Self::parse_string_from_env(Self::ENV_BINARY_FILE, defaults.binary_file);
        let compressed_file =
            Self::parse_string_from_env(Self::ENV_COMPRESSED_FILE, defaults.compressed_file);
        let master_file = Self::parse_string_from_env(Self::ENV_MASTER_FILE, defaults.master_file);
        let binary_write_back =
            Self::parse_bool_from_env(Self::ENV_BINARY_WRITE_BACK, defaults.binary_write_back)?;

        Ok(Self {
            cache_dir,
            source_root,
            source_dir,
            binary_file,
            compressed_file,
            master_file,
            binary_write_back,
        })
    }

    /// Validates paths and names (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_dir.exists() && !self.cache_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.cache_dir.clone(),
            });
        }

        if self.source_root.exists() && !self.source_root.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.source_root.clone(),
            });
        }

        let names = [
            (Self::ENV_SOURCE_DIR, &self.source_dir),
            (Self::ENV_BINARY_FILE, &self.binary_file),
            (Self::ENV_COMPRESSED_FILE, &self.compressed_file),
            (Self::ENV_MASTER_FILE, &self.master_file),
        ];
        for (name, value) in names {
            if crate::source::validate_segment(value).is_err() {
                return Err(ConfigError::InvalidName {
                    name,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }

    /// Ordered tier plan: cache, compact binary, compressed, master.
    pub fn tier_plan(&self) -> Vec<TierDescriptor> {
        let binary_write_back = if self.binary_write_back {
            WriteBack::Reserialize
        } else {
            WriteBack::None
        };

        vec![
            TierDescriptor::fast_local(),
            TierDescriptor::remote(
                TIER_COMPACT_BINARY,
                &self.source_dir,
                &self.binary_file,
                TierFormat::CompactBinary,
                binary_write_back,
            ),
            TierDescriptor::remote(
                TIER_COMPRESSED,
                &self.source_dir,
                &self.compressed_file,
                TierFormat::Native,
                WriteBack::CopyBytes,
            ),
            TierDescriptor::remote(
                TIER_MASTER,
                &self.source_dir,
                &self.master_file,
                TierFormat::Master(MasterFormat::from_file_name(&self.master_file)),
                WriteBack::Reserialize,
            ),
        ]
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
