/// Data models for album-service
///
/// - Photo: persisted album entry (image reference + metadata)
/// - PhotoResponse: the wire shape the gallery frontend consumes
/// - PhotoUpload: the parsed multipart payload of POST /photos
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder stored when an upload carries no year
pub const SENTINEL_YEAR: &str = "unknown";

/// Photo database entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Photo {
    pub id: Uuid,
    pub image_url: String,
    /// Object key on the image host; kept so delete and compensation can
    /// address the remote object
    pub image_key: String,
    pub year: String,
    pub date: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a photo record before the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub image_url: String,
    pub image_key: String,
    pub year: String,
    pub date: String,
    pub text: String,
}

/// Parsed multipart payload for POST /photos
#[derive(Debug, Default)]
pub struct PhotoUpload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub year: String,
    pub date: String,
    pub text: String,
}

/// Photo response DTO
///
/// Field names are fixed by the gallery client: `_id` plus camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub image_url: String,
    pub year: String,
    pub date: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            image_url: photo.image_url,
            year: photo.year,
            date: photo.date,
            text: photo.text,
            created_at: photo.created_at,
            updated_at: photo.updated_at,
        }
    }
}

/// Login request payload for POST /auth/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub pin: Option<String>,
}

/// Login response payload
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}
