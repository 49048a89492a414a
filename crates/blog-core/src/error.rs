//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Not-found outcomes are not errors at this layer: lookups return `Option`
/// and delete returns `bool`, so the only failures are the backing medium
/// refusing to cooperate.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store I/O failed: {0}")]
    Io(String),

    #[error("Store data is malformed: {0}")]
    Malformed(String),
}
