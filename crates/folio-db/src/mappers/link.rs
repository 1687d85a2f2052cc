//! Link model -> entity mapper

use folio_core::entities::Link;

use crate::models::LinkModel;

impl From<LinkModel> for Link {
    fn from(model: LinkModel) -> Self {
        Link {
            id: model.id,
            profile_id: model.profile_id,
            label: model.label,
            url: model.url,
            created_at: model.created_at,
        }
    }
}
