use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::{SourceError, SourceResult};
use super::{SourceDir, SourceFile, SourceReader, SourceStore};

#[derive(Default, Clone)]
/// In-memory [`SourceStore`] that records how often it was called.
pub struct MockSourceStore {
    files: Arc<RwLock<HashMap<(String, String), Vec<u8>>>>,
    calls: Arc<AtomicUsize>,
    offline: Arc<AtomicBool>,
}

impl MockSourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, dir: &str, name: &str, data: impl Into<Vec<u8>>) {
        self.files
            .write()
            .insert((dir.to_string(), name.to_string()), data.into());
    }

    pub fn remove(&self, dir: &str, name: &str) -> Option<Vec<u8>> {
        self.files
            .write()
            .remove(&(dir.to_string(), name.to_string()))
    }

    /// Makes every call fail with [`SourceError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Total calls to `find_dir`, `find_file` and `open`.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn reset_calls(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }

    fn record_call(&self) -> SourceResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable("mock store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SourceStore for MockSourceStore {
    fn root_name(&self) -> String {
        "mock".to_string()
    }

    async fn find_dir(&self, name: &str) -> SourceResult<Option<SourceDir>> {
        self.record_call()?;
        let exists = self.files.read().keys().any(|(dir, _)| dir == name);
        Ok(exists.then(|| SourceDir {
            name: name.to_string(),
        }))
    }

    async fn find_file(&self, dir: &SourceDir, name: &str) -> SourceResult<Option<SourceFile>> {
        self.record_call()?;
        let files = self.files.read();
        Ok(files
            .get(&(dir.name.clone(), name.to_string()))
            .map(|data| SourceFile {
                dir: dir.name.clone(),
                name: name.to_string(),
                len: Some(data.len() as u64),
            }))
    }

    async fn open(&self, file: &SourceFile) -> SourceResult<SourceReader> {
        self.record_call()?;
        let data = self
            .files
            .read()
            .get(&(file.dir.clone(), file.name.clone()))
            .cloned()
            .ok_or_else(|| {
                SourceError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} vanished", file.display_path()),
                ))
            })?;
        Ok(Box::new(std::io::Cursor::new(data)))
    }
}
