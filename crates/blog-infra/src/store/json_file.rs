//! Flat-file record store - the whole collection lives in one JSON file.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use blog_core::domain::BlogEntry;
use blog_core::error::RepoError;
use blog_core::ports::EntryRepository;

/// File-backed entry repository.
///
/// Every mutation is a full cycle: read and parse the entire file, mutate the
/// collection in memory, serialize and rewrite the entire file. A per-store
/// mutex serializes each cycle, so concurrent in-process requests cannot race
/// on id assignment or lose each other's writes. Writers in other processes
/// sharing the same file are not coordinated.
pub struct JsonFileEntryRepository {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonFileEntryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection. A file that does not exist yet, or contains
    /// only whitespace, is an empty collection. Anything else that fails to
    /// parse propagates as `RepoError::Malformed`.
    async fn load(&self) -> Result<Vec<BlogEntry>, RepoError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepoError::Io(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| RepoError::Malformed(e.to_string()))
    }

    /// Replace the file contents with the serialized collection.
    async fn save(&self, entries: &[BlogEntry]) -> Result<(), RepoError> {
        let json =
            serde_json::to_string(entries).map_err(|e| RepoError::Malformed(e.to_string()))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| RepoError::Io(e.to_string()))
    }
}

#[async_trait]
impl EntryRepository for JsonFileEntryRepository {
    async fn list(&self) -> Result<Vec<BlogEntry>, RepoError> {
        self.load().await
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<BlogEntry>, RepoError> {
        let entries = self.load().await?;
        Ok(entries.into_iter().find(|e| e.id == id))
    }

    async fn create(&self, mut entry: BlogEntry) -> Result<BlogEntry, RepoError> {
        let _guard = self.write_guard.lock().await;

        let mut entries = self.load().await?;
        entry.id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        entries.push(entry.clone());
        self.save(&entries).await?;

        tracing::debug!(id = entry.id, "Created blog entry");
        Ok(entry)
    }

    async fn update(&self, entry: BlogEntry) -> Result<Option<BlogEntry>, RepoError> {
        let _guard = self.write_guard.lock().await;

        let mut entries = self.load().await?;
        let index = match entries.iter().position(|e| e.id == entry.id) {
            Some(index) => index,
            None => return Ok(None),
        };

        entries[index] = entry.clone();
        self.save(&entries).await?;

        tracing::debug!(id = entry.id, "Updated blog entry");
        Ok(Some(entry))
    }

    async fn delete(&self, id: u64) -> Result<bool, RepoError> {
        let _guard = self.write_guard.lock().await;

        let mut entries = self.load().await?;
        let index = match entries.iter().position(|e| e.id == id) {
            Some(index) => index,
            None => return Ok(false),
        };

        entries.remove(index);
        self.save(&entries).await?;

        tracing::debug!(id, "Deleted blog entry");
        Ok(true)
    }
}
