//! API Integration Tests
//!
//! Every test spawns its own server on the in-memory backend with a local
//! upload directory, so no external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer, TEST_PUBLIC_BASE_URL};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::Value;

async fn start() -> TestServer {
    TestServer::start().await.expect("Failed to start server")
}

/// Create a profile and return it
async fn create_profile(server: &TestServer, token: &str, request: &UpsertProfileRequest) -> ProfileResponse {
    let response = server
        .put_auth("/api/v1/profiles/@me", token, request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn approve(server: &TestServer, profile_id: &str) -> ProfileResponse {
    let response = server
        .post_empty_auth(
            &format!("/api/v1/admin/profiles/{profile_id}/approve"),
            &server.admin_token(),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn revoke(server: &TestServer, profile_id: &str) -> ProfileResponse {
    let response = server
        .post_empty_auth(
            &format!("/api/v1/admin/profiles/{profile_id}/revoke"),
            &server.admin_token(),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

fn file_part(name: &str, content_type: &str, bytes: Vec<u8>) -> Part {
    Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str(content_type)
        .unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = start().await;
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = start().await;
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    server.backend.set_available(false);
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let server = start().await;
    let response = server.get("/api/v1/profiles/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let server = start().await;
    let response = server
        .get_auth("/api/v1/profiles/@me", "not-a-jwt")
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert!(!body.error.retryable);
}

#[tokio::test]
async fn test_admin_status() {
    let server = start().await;

    let response = server
        .get_auth("/api/v1/users/@me/admin", &server.admin_token())
        .await
        .unwrap();
    let status: AdminStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.is_admin);

    let (_, token) = server.new_user();
    let response = server.get_auth("/api/v1/users/@me/admin", &token).await.unwrap();
    let status: AdminStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.is_admin);
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_end_to_end_publication() {
    let server = start().await;
    let (user_id, token) = server.new_user();

    // Create: starts pending
    let profile = create_profile(
        &server,
        &token,
        &UpsertProfileRequest::handle("john-doe").with_headline("Dev"),
    )
    .await;
    assert!(!profile.is_approved);
    assert_eq!(profile.user_id, user_id.to_string());

    let response = server.get("/p/john-doe").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Approve: resolvable with empty children
    approve(&server, &profile.id).await;
    let response = server.get("/p/john-doe").await.unwrap();
    let public: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public["headline"], "Dev");
    assert_eq!(public["media"], serde_json::json!([]));
    assert_eq!(public["links"], serde_json::json!([]));
    assert_eq!(public["socials"], serde_json::json!([]));
    assert!(public.get("user_id").is_none());
    assert!(public.get("is_approved").is_none());

    // Add a link: visible on the next read
    let response = server
        .post_auth(
            &format!("/api/v1/profiles/{}/links", profile.id),
            &token,
            &CreateLinkRequest::new("Site", "https://x.io"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/p/john-doe").await.unwrap();
    let public: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public["links"][0]["label"], "Site");
    assert_eq!(public["links"][0]["url"], "https://x.io");

    // Revoke: gone again
    revoke(&server, &profile.id).await;
    let response = server.get("/p/john-doe").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_not_found_is_indistinguishable() {
    let server = start().await;
    let (_, token) = server.new_user();
    create_profile(&server, &token, &UpsertProfileRequest::handle("pending-one")).await;

    let missing = server.get("/p/never-created").await.unwrap();
    let pending = server.get("/p/pending-one").await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(pending.status(), StatusCode::NOT_FOUND);

    let missing: ErrorEnvelope = missing.json().await.unwrap();
    let pending: ErrorEnvelope = pending.json().await.unwrap();
    assert_eq!(missing.error.code, pending.error.code);
    assert_eq!(missing.error.retryable, pending.error.retryable);
}

#[tokio::test]
async fn test_get_own_profile_before_creation() {
    let server = start().await;
    let (_, token) = server.new_user();

    let response = server.get_auth("/api/v1/profiles/@me", &token).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "PROFILE_NOT_CREATED");
}

#[tokio::test]
async fn test_update_returns_ok_and_keeps_approval() {
    let server = start().await;
    let (_, token) = server.new_user();
    let handle = unique_handle("editor");
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&handle)).await;
    approve(&server, &profile.id).await;

    let response = server
        .put_auth(
            "/api/v1/profiles/@me",
            &token,
            &UpsertProfileRequest::handle(&handle).with_bio("Now with a bio"),
        )
        .await
        .unwrap();
    let updated: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, profile.id);
    assert_eq!(updated.bio.as_deref(), Some("Now with a bio"));
    assert!(updated.is_approved);
}

#[tokio::test]
async fn test_handle_conflict() {
    let server = start().await;
    let (_, first) = server.new_user();
    let (_, second) = server.new_user();
    create_profile(&server, &first, &UpsertProfileRequest::handle("taken")).await;

    let response = server
        .put_auth("/api/v1/profiles/@me", &second, &UpsertProfileRequest::handle("taken"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "HANDLE_TAKEN");
}

#[tokio::test]
async fn test_validation_reports_every_rule() {
    let server = start().await;
    let (_, token) = server.new_user();

    let request = UpsertProfileRequest::handle("a!")
        .with_headline(&"h".repeat(101))
        .with_bio(&"b".repeat(501));
    let response = server.put_auth("/api/v1/profiles/@me", &token, &request).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "VALIDATION_ERROR");
    let details = body.error.details.expect("violations are listed");
    assert_eq!(details.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_length_boundaries() {
    let server = start().await;
    let (_, token) = server.new_user();
    let handle = unique_handle("bounds");

    let ok = UpsertProfileRequest::handle(&handle)
        .with_headline(&"h".repeat(100))
        .with_bio(&"b".repeat(500));
    let response = server.put_auth("/api/v1/profiles/@me", &token, &ok).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let long_headline = UpsertProfileRequest::handle(&handle).with_headline(&"h".repeat(101));
    let response = server
        .put_auth("/api/v1/profiles/@me", &token, &long_headline)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let long_bio = UpsertProfileRequest::handle(&handle).with_bio(&"b".repeat(501));
    let response = server.put_auth("/api/v1/profiles/@me", &token, &long_bio).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_profile_cascades() {
    let server = start().await;
    let (_, token) = server.new_user();
    let handle = unique_handle("leaving");
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&handle)).await;

    server
        .post_auth(
            &format!("/api/v1/profiles/{}/socials", profile.id),
            &token,
            &CreateSocialRequest::github("leaver"),
        )
        .await
        .unwrap();

    let response = server.delete_auth("/api/v1/profiles/@me", &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/v1/profiles/@me", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // The handle is free again
    let (_, other) = server.new_user();
    create_profile(&server, &other, &UpsertProfileRequest::handle(&handle)).await;
}

#[tokio::test]
async fn test_dashboard() {
    let server = start().await;
    let (_, token) = server.new_user();
    let handle = unique_handle("dash");
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&handle)).await;

    server
        .post_auth(
            &format!("/api/v1/profiles/{}/media", profile.id),
            &token,
            &CreateMediaRequest::image("https://cdn.example.com/shot.png"),
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/profiles/@me/dashboard", &token)
        .await
        .unwrap();
    let dashboard: DashboardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(dashboard.profile.id, profile.id);
    assert_eq!(dashboard.approval_state, "pending");
    assert_eq!(dashboard.public_url, format!("{TEST_PUBLIC_BASE_URL}/p/{handle}"));
    assert_eq!(dashboard.media.len(), 1);
    assert!(dashboard.links.is_empty());
}

// ============================================================================
// Children Tests
// ============================================================================

#[tokio::test]
async fn test_child_mutation_requires_owner() {
    let server = start().await;
    let (_, owner) = server.new_user();
    let (_, intruder) = server.new_user();
    let profile = create_profile(&server, &owner, &UpsertProfileRequest::handle(&unique_handle("owned"))).await;

    let response = server
        .post_auth(
            &format!("/api/v1/profiles/{}/links", profile.id),
            &intruder,
            &CreateLinkRequest::new("Spam", "https://spam.example.com"),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_PROFILE_OWNER");

    let response = server
        .get_auth(&format!("/api/v1/profiles/{}/links", profile.id), &owner)
        .await
        .unwrap();
    let links: Vec<LinkResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(links.is_empty());
}

#[tokio::test]
async fn test_remove_missing_child_is_noop() {
    let server = start().await;
    let (_, token) = server.new_user();
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&unique_handle("noop"))).await;

    let response = server
        .delete_auth(
            &format!(
                "/api/v1/profiles/{}/links/{}",
                profile.id,
                uuid::Uuid::new_v4()
            ),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_malformed_ids() {
    let server = start().await;
    let (_, token) = server.new_user();

    let response = server
        .get_auth("/api/v1/profiles/not-a-uuid/links", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/profiles/{}/links", uuid::Uuid::new_v4()),
            &token,
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_PROFILE");
}

#[tokio::test]
async fn test_child_request_validation() {
    let server = start().await;
    let (_, token) = server.new_user();
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&unique_handle("v"))).await;

    let response = server
        .post_auth(
            &format!("/api/v1/profiles/{}/links", profile.id),
            &token,
            &CreateLinkRequest::new("", "not a url"),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_socials_round_trip() {
    let server = start().await;
    let (_, token) = server.new_user();
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&unique_handle("social"))).await;
    let path = format!("/api/v1/profiles/{}/socials", profile.id);

    let response = server
        .post_auth(&path, &token, &CreateSocialRequest::github("johndoe"))
        .await
        .unwrap();
    let social: SocialResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(social.platform, "GITHUB");

    let response = server
        .delete_auth(&format!("{path}/{}", social.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    let socials: Vec<SocialResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(socials.is_empty());
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_batch_and_serve() {
    let server = start().await;
    let (_, token) = server.new_user();
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&unique_handle("up"))).await;

    let form = Form::new()
        .part("files", file_part("shot.png", "image/png", vec![1, 2, 3, 4]))
        .part("files", file_part("notes.txt", "text/plain", b"hello".to_vec()))
        .part("files", file_part("huge.jpg", "image/jpeg", vec![0; 2 * 1024 * 1024]))
        .part("files", file_part("reel.mp4", "video/mp4", vec![5, 6, 7]));

    let response = server
        .post_multipart_auth(
            &format!("/api/v1/profiles/{}/media/upload", profile.id),
            &token,
            form,
        )
        .await
        .unwrap();
    let result: UploadResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(result.uploaded.len(), 2);
    assert_eq!(result.uploaded[0].media_type, "IMAGE");
    assert_eq!(result.uploaded[1].media_type, "VIDEO");
    assert_eq!(result.failed.len(), 2);
    assert_eq!(result.failed[0].filename, "notes.txt");
    assert_eq!(result.failed[0].code, "UNSUPPORTED_MEDIA_TYPE");
    assert_eq!(result.failed[1].code, "FILE_TOO_LARGE");

    // Stored blobs are served from the upload directory
    let url = &result.uploaded[0].url;
    assert!(url.starts_with("/uploads/"));
    let response = server.get(url).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let served = response.bytes().await.unwrap();
    assert_eq!(&served[..], &[1u8, 2, 3, 4][..]);

    // Removing the record deletes the blob
    let response = server
        .delete_auth(
            &format!("/api/v1/profiles/{}/media/{}", profile.id, result.uploaded[0].id),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.get(url).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_avatar() {
    let server = start().await;
    let (_, token) = server.new_user();
    create_profile(&server, &token, &UpsertProfileRequest::handle(&unique_handle("face"))).await;

    let form = Form::new().part("file", file_part("me.png", "image/png", vec![9; 16]));
    let response = server
        .put_multipart_auth("/api/v1/profiles/@me/avatar", &token, form)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let avatar = profile.avatar_url.expect("avatar is set");
    assert!(avatar.starts_with("/uploads/"));

    let form = Form::new().part("file", file_part("clip.mp4", "video/mp4", vec![9; 16]));
    let response = server
        .put_multipart_auth("/api/v1/profiles/@me/avatar", &token, form)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn test_upload_name_cannot_change_served_type() {
    let server = start().await;
    let (_, token) = server.new_user();
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&unique_handle("evil"))).await;

    let form = Form::new().part("files", file_part("evil.html", "image/png", b"<script>".to_vec()));
    let response = server
        .post_multipart_auth(
            &format!("/api/v1/profiles/{}/media/upload", profile.id),
            &token,
            form,
        )
        .await
        .unwrap();
    let result: UploadResult = assert_json(response, StatusCode::OK).await.unwrap();
    let url = &result.uploaded[0].url;
    assert!(url.ends_with(".png"));

    let response = server.get(url).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/png");
}

#[tokio::test]
async fn test_foreign_blob_rejected_as_avatar() {
    let server = start().await;
    let (_, owner) = server.new_user();
    let profile = create_profile(&server, &owner, &UpsertProfileRequest::handle(&unique_handle("owner"))).await;

    let form = Form::new().part("files", file_part("a.png", "image/png", vec![1, 2, 3]));
    let response = server
        .post_multipart_auth(
            &format!("/api/v1/profiles/{}/media/upload", profile.id),
            &owner,
            form,
        )
        .await
        .unwrap();
    let result: UploadResult = assert_json(response, StatusCode::OK).await.unwrap();
    let url = result.uploaded[0].url.clone();

    let (_, other) = server.new_user();
    let mut request = UpsertProfileRequest::handle(&unique_handle("other"));
    request.avatar_url = Some(url.clone());
    let response = server.put_auth("/api/v1/profiles/@me", &other, &request).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let response = server.get(&url).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_json_routes_keep_default_body_limit() {
    let server = start().await;
    let (_, token) = server.new_user();

    let body = serde_json::json!({
        "handle": unique_handle("big"),
        "padding": "x".repeat(3 * 1024 * 1024),
    });
    let response = server.put_auth("/api/v1/profiles/@me", &token, &body).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::PAYLOAD_TOO_LARGE).await.unwrap();
    assert_eq!(body.error.code, "PAYLOAD_TOO_LARGE");

    let response = server.get_auth("/api/v1/profiles/@me", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// QR Tests
// ============================================================================

#[tokio::test]
async fn test_qr_code_formats() {
    let server = start().await;
    let (_, token) = server.new_user();
    create_profile(&server, &token, &UpsertProfileRequest::handle(&unique_handle("qr"))).await;

    let response = server.get_auth("/api/v1/profiles/@me/qr", &token).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/png");
    let bytes = response.bytes().await.unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));

    let response = server
        .get_auth("/api/v1/profiles/@me/qr?format=svg", &token)
        .await
        .unwrap();
    assert_eq!(response.headers()["content-type"], "image/svg+xml");
    assert!(response.text().await.unwrap().contains("<svg"));

    let response = server
        .get_auth("/api/v1/profiles/@me/qr?format=gif", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_non_admin_cannot_approve() {
    let server = start().await;
    let (_, token) = server.new_user();
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&unique_handle("self"))).await;

    let response = server
        .post_empty_auth(&format!("/api/v1/admin/profiles/{}/approve", profile.id), &token)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_ADMIN");

    let response = server.get_auth("/api/v1/profiles/@me", &token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!profile.is_approved);
}

#[tokio::test]
async fn test_approve_is_idempotent() {
    let server = start().await;
    let (_, token) = server.new_user();
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&unique_handle("twice"))).await;

    let first = approve(&server, &profile.id).await;
    let second = approve(&server, &profile.id).await;
    assert!(second.is_approved);
    assert_eq!(first.updated_at, second.updated_at);

    let first = revoke(&server, &profile.id).await;
    let second = revoke(&server, &profile.id).await;
    assert!(!second.is_approved);
    assert_eq!(first.updated_at, second.updated_at);
}

#[tokio::test]
async fn test_approve_unknown_profile() {
    let server = start().await;
    let response = server
        .post_empty_auth(
            &format!("/api/v1/admin/profiles/{}/approve", uuid::Uuid::new_v4()),
            &server.admin_token(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_review_listing_and_stats() {
    let server = start().await;
    let (_, first) = server.new_user();
    let (_, second) = server.new_user();
    create_profile(&server, &first, &UpsertProfileRequest::handle(&unique_handle("a"))).await;
    let approved = create_profile(&server, &second, &UpsertProfileRequest::handle(&unique_handle("b"))).await;
    approve(&server, &approved.id).await;

    let admin = server.admin_token();
    let response = server
        .get_auth("/api/v1/admin/profiles?state=pending", &admin)
        .await
        .unwrap();
    let pending: Vec<ProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].approval_state, "pending");

    let response = server.get_auth("/api/v1/admin/stats", &admin).await.unwrap();
    let stats: ProfileStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((stats.total, stats.approved, stats.pending), (2, 1, 1));

    let response = server.get_auth("/api/v1/admin/stats", &first).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Transient Failure Tests
// ============================================================================

#[tokio::test]
async fn test_backend_outage_is_retryable_and_changes_nothing() {
    let server = start().await;
    let (_, token) = server.new_user();
    let handle = unique_handle("outage");
    let profile = create_profile(&server, &token, &UpsertProfileRequest::handle(&handle)).await;

    server.backend.set_available(false);
    let response = server
        .post_empty_auth(
            &format!("/api/v1/admin/profiles/{}/approve", profile.id),
            &server.admin_token(),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body.error.code, "BACKEND_UNAVAILABLE");
    assert!(body.error.retryable);

    let response = server.get(&format!("/p/{handle}")).await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();

    server.backend.set_available(true);
    let response = server.get(&format!("/p/{handle}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
