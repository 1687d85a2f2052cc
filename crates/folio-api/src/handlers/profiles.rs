//! Profile handlers
//!
//! The caller's own profile, dashboard, QR code and avatar.

use axum::{
    extract::{rejection::JsonRejection, Multipart, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use folio_service::{
    DashboardResponse, MediaService, ProfileResponse, ProfileService, QrQuery, QrService,
    UpsertProfileRequest,
};

use crate::extractors::{read_single_file, AuthUser};
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Get the caller's profile
///
/// GET /profiles/@me
pub async fn get_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.get_own(auth.user_id).await?;
    Ok(Json(profile))
}

/// Create or update the caller's profile
///
/// PUT /profiles/@me
///
/// Responds 201 when the profile was created, 200 when updated.
pub async fn upsert_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<UpsertProfileRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProfileResponse>)> {
    let Json(request) = body.map_err(crate::extractors::json_rejection)?;

    let service = ProfileService::new(state.service_context());
    let (profile, created) = service.upsert(auth.user_id, request).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(profile)))
}

/// Delete the caller's profile and everything attached to it
///
/// DELETE /profiles/@me
pub async fn delete_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    let service = ProfileService::new(state.service_context());
    service.delete(auth.user_id).await?;
    Ok(NoContent)
}

/// GET /profiles/@me/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let service = ProfileService::new(state.service_context());
    let dashboard = service.dashboard(auth.user_id).await?;
    Ok(Json(dashboard))
}

/// QR code of the caller's public page
///
/// GET /profiles/@me/qr?format=png|svg&size=
pub async fn get_qr_code(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<QrQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;

    let service = QrService::new(state.service_context());
    let image = service.profile_code(auth.user_id, query).await?;

    Ok(([(header::CONTENT_TYPE, image.content_type())], image.bytes).into_response())
}

/// Upload a new avatar image (multipart, one file)
///
/// PUT /profiles/@me/avatar
pub async fn upload_avatar(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<Json<ProfileResponse>> {
    let file = read_single_file(multipart).await?;

    let service = MediaService::new(state.service_context());
    let profile = service.upload_avatar(auth.user_id, file).await?;
    Ok(Json(profile))
}
