//! Link database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct LinkModel {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub label: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
