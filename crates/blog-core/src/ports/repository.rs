use async_trait::async_trait;

use crate::domain::BlogEntry;
use crate::error::RepoError;

/// Repository port for the blog entry collection.
///
/// Implementations own the whole collection: every mutation is a full
/// read-modify-write cycle, and id assignment happens inside `create`.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Return the full collection in stored (insertion) order.
    /// An empty backing medium is an empty collection, not an error.
    async fn list(&self) -> Result<Vec<BlogEntry>, RepoError>;

    /// Find an entry by its unique id.
    async fn find_by_id(&self, id: u64) -> Result<Option<BlogEntry>, RepoError>;

    /// Store a new entry, assigning it `max(existing ids) + 1` (or `1` when
    /// the collection is empty). Returns the entry with its assigned id.
    async fn create(&self, entry: BlogEntry) -> Result<BlogEntry, RepoError>;

    /// Replace the stored entry whose id matches `entry.id` wholesale.
    /// Returns `None` without writing when no entry matches.
    async fn update(&self, entry: BlogEntry) -> Result<Option<BlogEntry>, RepoError>;

    /// Remove the entry with the given id. Returns `false` without writing
    /// when no entry matches.
    async fn delete(&self, id: u64) -> Result<bool, RepoError>;
}
