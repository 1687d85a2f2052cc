//! User handlers

use axum::{extract::State, Json};
use folio_service::{AdminService, AdminStatusResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Whether the caller holds the admin capability
///
/// GET /users/@me/admin
pub async fn get_admin_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AdminStatusResponse>> {
    let service = AdminService::new(state.service_context());
    let is_admin = service.is_admin(auth.user_id).await?;
    Ok(Json(AdminStatusResponse { is_admin }))
}
