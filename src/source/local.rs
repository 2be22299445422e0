//! Directory tree on the local filesystem (mounted share, sideloaded SD card, etc.).

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::error::SourceResult;
use super::{SourceDir, SourceFile, SourceReader, SourceStore, validate_segment};

#[derive(Debug, Clone)]
/// [`SourceStore`] over a root directory on disk.
pub struct LocalSourceStore {
    root: PathBuf,
}

impl LocalSourceStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

async fn metadata_if_exists(path: &Path) -> io::Result<Option<std::fs::Metadata>> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[async_trait]
impl SourceStore for LocalSourceStore {
    fn root_name(&self) -> String {
        self.root.display().to_string()
    }

    async fn find_dir(&self, name: &str) -> SourceResult<Option<SourceDir>> {
        validate_segment(name)?;

        let found = metadata_if_exists(&self.root.join(name))
            .await?
            .filter(|meta| meta.is_dir())
            .map(|_| SourceDir {
                name: name.to_string(),
            });
        Ok(found)
    }

    async fn find_file(&self, dir: &SourceDir, name: &str) -> SourceResult<Option<SourceFile>> {
        validate_segment(&dir.name)?;
        validate_segment(name)?;

        let path = self.root.join(&dir.name).join(name);
        let found = metadata_if_exists(&path)
            .await?
            .filter(|meta| meta.is_file())
            .map(|meta| SourceFile {
                dir: dir.name.clone(),
                name: name.to_string(),
                len: Some(meta.len()),
            });
        Ok(found)
    }

    async fn open(&self, file: &SourceFile) -> SourceResult<SourceReader> {
        validate_segment(&file.dir)?;
        validate_segment(&file.name)?;

        let path = self.root.join(&file.dir).join(&file.name);
        let handle = tokio::fs::File::open(path).await?;
        Ok(Box::new(handle))
    }
}
