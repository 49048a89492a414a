//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a new blog entry.
///
/// Id, author, and creation timestamp are assigned server-side, so the body
/// carries only the content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub text: String,
}
