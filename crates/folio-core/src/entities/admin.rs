//! Admin entity - grants the review capability to a user

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Row existence is the whole capability; there is no role hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
