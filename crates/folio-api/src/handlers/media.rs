//! Media handlers

use axum::{
    extract::{Multipart, State},
    Json,
};
use folio_service::{CreateMediaRequest, MediaResponse, MediaService, UploadResult};
use uuid::Uuid;

use crate::extractors::{read_upload_files, ApiPath, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /profiles/{profile_id}/media
pub async fn list_media(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> ApiResult<Json<Vec<MediaResponse>>> {
    let service = MediaService::new(state.service_context());
    let media = service.list(auth.user_id, profile_id).await?;
    Ok(Json(media))
}

/// Attach media hosted elsewhere
///
/// POST /profiles/{profile_id}/media
pub async fn add_media(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(profile_id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateMediaRequest>,
) -> ApiResult<Created<Json<MediaResponse>>> {
    let service = MediaService::new(state.service_context());
    let media = service.add(auth.user_id, profile_id, request).await?;
    Ok(Created(Json(media)))
}

/// Upload files (multipart). Files succeed or fail individually.
///
/// POST /profiles/{profile_id}/media/upload
pub async fn upload_media(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(profile_id): ApiPath<Uuid>,
    multipart: Multipart,
) -> ApiResult<Json<UploadResult>> {
    let files = read_upload_files(multipart).await?;

    let service = MediaService::new(state.service_context());
    let result = service.upload(auth.user_id, profile_id, files).await?;
    Ok(Json(result))
}

/// DELETE /profiles/{profile_id}/media/{media_id}
pub async fn remove_media(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath((profile_id, media_id)): ApiPath<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    let service = MediaService::new(state.service_context());
    service.remove(auth.user_id, profile_id, media_id).await?;
    Ok(NoContent)
}
