//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path to the flat file backing the entry store.
    pub data_file: Option<String>,
    /// Identity stamped as the author of every created entry.
    pub author: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            data_file: env::var("BLOG_DATA_FILE").ok(),
            author: env::var("BLOG_AUTHOR").unwrap_or_else(|_| "Blog Service".to_string()),
        }
    }
}
