//! Admin review handlers
//!
//! Every endpoint here requires the admin capability.

use axum::{
    extract::{Query, State},
    Json,
};
use folio_service::{
    AdminService, ApprovalService, ListProfilesQuery, ProfileResponse, ProfileStatsResponse,
};
use uuid::Uuid;

use crate::extractors::{ApiPath, AuthUser};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List profiles newest first
///
/// GET /admin/profiles?state=pending|approved
pub async fn list_profiles(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<ListProfilesQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;

    let service = AdminService::new(state.service_context());
    let profiles = service.list_profiles(auth.user_id, query).await?;
    Ok(Json(profiles))
}

/// GET /admin/stats
pub async fn get_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileStatsResponse>> {
    let service = AdminService::new(state.service_context());
    let stats = service.stats(auth.user_id).await?;
    Ok(Json(stats))
}

/// POST /admin/profiles/{profile_id}/approve
pub async fn approve_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ApprovalService::new(state.service_context());
    let profile = service.approve(auth.user_id, profile_id).await?;
    Ok(Json(profile))
}

/// POST /admin/profiles/{profile_id}/revoke
pub async fn revoke_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(profile_id): ApiPath<Uuid>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ApprovalService::new(state.service_context());
    let profile = service.revoke(auth.user_id, profile_id).await?;
    Ok(Json(profile))
}
