//! Media model -> entity mapper

use folio_core::entities::Media;
use folio_core::error::DomainError;
use folio_core::value_objects::MediaType;

use crate::models::MediaModel;

impl TryFrom<MediaModel> for Media {
    type Error = DomainError;

    fn try_from(model: MediaModel) -> Result<Self, Self::Error> {
        let media_type = MediaType::parse(&model.media_type).ok_or_else(|| {
            DomainError::InternalError(format!("unknown media type {:?}", model.media_type))
        })?;

        Ok(Media {
            id: model.id,
            profile_id: model.profile_id,
            media_type,
            url: model.url,
            title: model.title,
            created_at: model.created_at,
        })
    }
}
