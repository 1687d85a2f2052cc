//! Social database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct SocialModel {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub platform: String,
    pub handle: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
