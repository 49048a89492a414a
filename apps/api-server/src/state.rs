//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::EntryRepository;
use blog_infra::{InMemoryEntryRepository, JsonFileEntryRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub entries: Arc<dyn EntryRepository>,
    /// Identity stamped as the author of every created entry.
    pub author: String,
}

impl AppState {
    /// Build the application state with the appropriate store implementation.
    pub fn new(config: &AppConfig) -> Self {
        let entries: Arc<dyn EntryRepository> = match &config.data_file {
            Some(path) => {
                tracing::info!(file = %path, "Using file-backed entry store");
                Arc::new(JsonFileEntryRepository::new(path.clone()))
            }
            None => {
                tracing::warn!(
                    "BLOG_DATA_FILE not set. Running without persistence (in-memory mode)."
                );
                Arc::new(InMemoryEntryRepository::new())
            }
        };

        tracing::info!(author = %config.author, "Application state initialized");

        Self {
            entries,
            author: config.author.clone(),
        }
    }
}
