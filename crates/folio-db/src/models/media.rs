//! Media database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for media table
#[derive(Debug, Clone, FromRow)]
pub struct MediaModel {
    pub id: Uuid,
    pub profile_id: Uuid,
    #[sqlx(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}
