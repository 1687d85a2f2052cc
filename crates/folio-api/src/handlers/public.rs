//! Public profile page
//!
//! Unauthenticated; only approved profiles resolve.

use axum::{extract::State, Json};
use folio_service::{PublicProfileResponse, PublicService};

use crate::extractors::ApiPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Resolve a public profile by handle
///
/// GET /p/{handle}
pub async fn get_public_profile(
    State(state): State<AppState>,
    ApiPath(handle): ApiPath<String>,
) -> ApiResult<Json<PublicProfileResponse>> {
    let service = PublicService::new(state.service_context());
    let profile = service.resolve(&handle).await?;
    Ok(Json(profile))
}
