//! In-memory entry repository - used as fallback when no data file is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::BlogEntry;
use blog_core::error::RepoError;
use blog_core::ports::EntryRepository;

/// In-memory repository over a plain Vec with an async RwLock.
///
/// Same id-assignment and not-found contract as the file-backed store.
/// Note: Data is lost on process restart.
pub struct InMemoryEntryRepository {
    entries: RwLock<Vec<BlogEntry>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn list(&self) -> Result<Vec<BlogEntry>, RepoError> {
        Ok(self.entries.read().await.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<BlogEntry>, RepoError> {
        Ok(self.entries.read().await.iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, mut entry: BlogEntry) -> Result<BlogEntry, RepoError> {
        let mut entries = self.entries.write().await;
        entry.id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, entry: BlogEntry) -> Result<Option<BlogEntry>, RepoError> {
        let mut entries = self.entries.write().await;
        match entries.iter().position(|e| e.id == entry.id) {
            Some(index) => {
                entries[index] = entry.clone();
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: u64) -> Result<bool, RepoError> {
        let mut entries = self.entries.write().await;
        match entries.iter().position(|e| e.id == id) {
            Some(index) => {
                entries.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryEntryRepository::new();
        let created = repo
            .create(BlogEntry::new("hello".to_string(), "Author".to_string()))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryEntryRepository::new();
        repo.create(BlogEntry::new("hello".to_string(), "Author".to_string()))
            .await
            .unwrap();

        assert!(repo.delete(1).await.unwrap());
        assert_eq!(repo.find_by_id(1).await.unwrap(), None);
        assert!(!repo.delete(1).await.unwrap());
    }
}
