//! Social model -> entity mapper

use folio_core::entities::Social;
use folio_core::error::DomainError;
use folio_core::value_objects::SocialPlatform;

use crate::models::SocialModel;

impl TryFrom<SocialModel> for Social {
    type Error = DomainError;

    fn try_from(model: SocialModel) -> Result<Self, Self::Error> {
        let platform = SocialPlatform::parse(&model.platform).ok_or_else(|| {
            DomainError::InternalError(format!("unknown social platform {:?}", model.platform))
        })?;

        Ok(Social {
            id: model.id,
            profile_id: model.profile_id,
            platform,
            handle: model.handle,
            url: model.url,
            created_at: model.created_at,
        })
    }
}
