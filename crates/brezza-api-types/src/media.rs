use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored upload. Creation goes through the multipart upload endpoint,
/// so there is no JSON request body type for media.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    pub filename: String,
    pub original_filename: String,
    pub filepath: String,
    pub mime_type: String,
    pub size: u64,
    pub uploader_id: i64,
    pub created_at: NaiveDateTime,
}
