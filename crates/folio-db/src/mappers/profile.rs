//! Profile model -> entity mapper

use folio_core::entities::{Profile, ProfileStats};
use folio_core::value_objects::{ApprovalState, Handle};

use crate::models::{ProfileModel, ProfileStatsModel};

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            user_id: model.user_id,
            // The table's CHECK constraint enforces the handle format
            handle: Handle::from_trusted(model.handle),
            headline: model.headline,
            bio: model.bio,
            avatar_url: model.avatar_url,
            is_approved: model.is_approved,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ProfileStatsModel> for ProfileStats {
    fn from(model: ProfileStatsModel) -> Self {
        ProfileStats::new(
            u64::try_from(model.total).unwrap_or_default(),
            u64::try_from(model.approved).unwrap_or_default(),
        )
    }
}

/// Value bound to the nullable `is_approved` filter parameter
pub fn approval_filter(state: Option<ApprovalState>) -> Option<bool> {
    state.map(ApprovalState::is_approved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_filter() {
        assert_eq!(approval_filter(None), None);
        assert_eq!(approval_filter(Some(ApprovalState::Approved)), Some(true));
        assert_eq!(approval_filter(Some(ApprovalState::Pending)), Some(false));
    }

    #[test]
    fn test_stats_from_model() {
        let stats = ProfileStats::from(ProfileStatsModel {
            total: 7,
            approved: 4,
        });
        assert_eq!(stats.pending, 3);
    }
}
