//! Link handlers

use axum::{extract::State, Json};
use folio_service::{CreateLinkRequest, LinkResponse, LinkService};
use uuid::Uuid;

use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /profiles/{profile_id}/links
pub async fn list_links(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> ApiResult<Json<Vec<LinkResponse>>> {
    let service = LinkService::new(state.service_context());
    let links = service.list(auth.user_id, profile_id).await?;
    Ok(Json(links))
}

/// POST /profiles/{profile_id}/links
pub async fn add_link(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(profile_id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateLinkRequest>,
) -> ApiResult<Created<Json<LinkResponse>>> {
    let service = LinkService::new(state.service_context());
    let link = service.add(auth.user_id, profile_id, request).await?;
    Ok(Created(Json(link)))
}

/// DELETE /profiles/{profile_id}/links/{link_id}
pub async fn remove_link(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath((profile_id, link_id)): ApiPath<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    let service = LinkService::new(state.service_context());
    service.remove(auth.user_id, profile_id, link_id).await?;
    Ok(NoContent)
}
