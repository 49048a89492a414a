use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// BlogEntry entity - one blog record.
///
/// Serialized field names match the persisted file layout
/// (`userName`, `dateCreated`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogEntry {
    /// Unique id, assigned by the store on create. `0` means "not yet stored".
    pub id: u64,
    pub text: String,
    pub user_name: String,
    pub date_created: DateTime<Utc>,
}

impl BlogEntry {
    /// Create a new entry stamped with the authoring identity and the current
    /// time. The id is assigned later, by the store.
    pub fn new(text: String, user_name: String) -> Self {
        Self {
            id: 0,
            text,
            user_name,
            date_created: Utc::now(),
        }
    }
}
