//! Route definitions
//!
//! Owner and admin routes are mounted under /api/v1; the public page and
//! health probes live at the root.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{admin, health, links, media, profiles, public, socials, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
///
/// `upload_limit` applies to the multipart routes only.
pub fn create_router(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/p/:handle", get(public::get_public_profile))
        .nest("/api/v1", api_v1_routes(upload_limit))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(profile_routes(upload_limit))
        .merge(admin_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me/admin", get(users::get_admin_status))
}

/// Profile routes
fn profile_routes(upload_limit: usize) -> Router<AppState> {
    Router::new()
        // Own profile
        .route(
            "/profiles/@me",
            get(profiles::get_own_profile)
                .put(profiles::upsert_own_profile)
                .delete(profiles::delete_own_profile),
        )
        .route("/profiles/@me/dashboard", get(profiles::get_dashboard))
        .route("/profiles/@me/qr", get(profiles::get_qr_code))
        .route(
            "/profiles/@me/avatar",
            put(profiles::upload_avatar).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Media
        .route(
            "/profiles/:profile_id/media",
            get(media::list_media).post(media::add_media),
        )
        .route(
            "/profiles/:profile_id/media/upload",
            post(media::upload_media).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/profiles/:profile_id/media/:media_id",
            delete(media::remove_media),
        )
        // Links
        .route(
            "/profiles/:profile_id/links",
            get(links::list_links).post(links::add_link),
        )
        .route(
            "/profiles/:profile_id/links/:link_id",
            delete(links::remove_link),
        )
        // Socials
        .route(
            "/profiles/:profile_id/socials",
            get(socials::list_socials).post(socials::add_social),
        )
        .route(
            "/profiles/:profile_id/socials/:social_id",
            delete(socials::remove_social),
        )
}

/// Admin review routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/profiles", get(admin::list_profiles))
        .route("/admin/stats", get(admin::get_stats))
        .route("/admin/profiles/:profile_id/approve", post(admin::approve_profile))
        .route("/admin/profiles/:profile_id/revoke", post(admin::revoke_profile))
}
