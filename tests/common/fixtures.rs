//! Test fixtures for integration tests.

use std::path::{Path, PathBuf};

use alias::codec::{MasterFormat, encode_binary, encode_master, encode_native};
use alias::config::Config;
use alias::constants::{
    DEFAULT_BINARY_FILE, DEFAULT_COMPRESSED_FILE, DEFAULT_MASTER_FILE, DEFAULT_SOURCE_DIR,
};
use alias::{AliasEntity, AliasIndex, AliasMaster};
use tempfile::TempDir;

pub const ENTITY_COUNT: usize = 25;

/// Deterministic master with `ENTITY_COUNT` entities; `tag` is added as an alias of each.
pub fn master_tagged(tag: &str) -> AliasMaster {
    let entities = (0..ENTITY_COUNT)
        .map(|i| {
            AliasEntity::new(
                format!("entity-{i:03}"),
                [format!("Name {i}"), format!("N{i}"), format!("{tag}-{i}")],
            )
        })
        .collect();
    AliasMaster::new(entities)
}

pub fn index_tagged(tag: &str) -> AliasIndex {
    AliasIndex::from_master(&master_tagged(tag)).expect("fixture master is valid")
}

/// Source root plus cache dir, both inside one temp dir.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn source_root(&self) -> PathBuf {
        self.dir.path().join("source")
    }

    pub fn source_dir(&self) -> PathBuf {
        self.source_root().join(DEFAULT_SOURCE_DIR)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.dir.path().join("cache")
    }

    pub fn config(&self) -> Config {
        Config {
            cache_dir: self.cache_dir(),
            source_root: self.source_root(),
            ..Config::default()
        }
    }

    pub fn write_source(&self, name: &str, bytes: &[u8]) -> PathBuf {
        std::fs::create_dir_all(self.source_dir()).expect("create source dir");
        let path = self.source_dir().join(name);
        std::fs::write(&path, bytes).expect("write source file");
        path
    }

    pub fn put_binary(&self, index: &AliasIndex) {
        self.write_source(DEFAULT_BINARY_FILE, &encode_binary(index).unwrap());
    }

    pub fn put_compressed(&self, index: &AliasIndex) -> Vec<u8> {
        let bytes = encode_native(index).unwrap();
        self.write_source(DEFAULT_COMPRESSED_FILE, &bytes);
        bytes
    }

    pub fn put_master(&self, master: &AliasMaster) {
        self.write_source(
            DEFAULT_MASTER_FILE,
            &encode_master(master, MasterFormat::Json).unwrap(),
        );
    }

    pub fn remove_source(&self) {
        let _ = std::fs::remove_dir_all(self.source_root());
    }

    /// Names of every file in the cache dir, sorted.
    pub fn cache_listing(&self) -> Vec<String> {
        list_names(&self.cache_dir())
    }
}

fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|rd| {
            rd.filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
