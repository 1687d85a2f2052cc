//! Social account handlers

use axum::{extract::State, Json};
use folio_service::{CreateSocialRequest, SocialResponse, SocialService};
use uuid::Uuid;

use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /profiles/{profile_id}/socials
pub async fn list_socials(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> ApiResult<Json<Vec<SocialResponse>>> {
    let service = SocialService::new(state.service_context());
    let socials = service.list(auth.user_id, profile_id).await?;
    Ok(Json(socials))
}

/// POST /profiles/{profile_id}/socials
pub async fn add_social(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(profile_id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateSocialRequest>,
) -> ApiResult<Created<Json<SocialResponse>>> {
    let service = SocialService::new(state.service_context());
    let social = service.add(auth.user_id, profile_id, request).await?;
    Ok(Created(Json(social)))
}

/// DELETE /profiles/{profile_id}/socials/{social_id}
pub async fn remove_social(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath((profile_id, social_id)): ApiPath<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    let service = SocialService::new(state.service_context());
    service.remove(auth.user_id, profile_id, social_id).await?;
    Ok(NoContent)
}
