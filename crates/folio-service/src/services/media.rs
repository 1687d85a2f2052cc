//! Media service
//!
//! Media records, the per-file upload pipeline and avatar uploads.
//!
//! Uploads write the blob first and the record second. When the record
//! write fails the blob stays behind; the key is logged at `warn`.

use folio_core::entities::{Media, MEDIA_TITLE_MAX_CHARS};
use folio_core::value_objects::MediaType;
use folio_core::DomainError;
use folio_storage::blob_key;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    CreateMediaRequest, MediaResponse, ProfileResponse, UploadFailure, UploadFile, UploadResult,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::profile::ProfileService;

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new MediaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Uuid, profile_id: Uuid) -> ServiceResult<Vec<MediaResponse>> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        let media = self.ctx.media_repo().find_by_profile(profile_id).await?;
        Ok(media.iter().map(MediaResponse::from).collect())
    }

    /// Attach externally hosted media by URL
    #[instrument(skip(self, request))]
    pub async fn add(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        request: CreateMediaRequest,
    ) -> ServiceResult<MediaResponse> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        let media = Media::create(profile_id, request.media_type, request.url, request.title)?;
        self.ctx.media_repo().create(&media).await?;

        info!(media_id = %media.id, profile_id = %profile_id, "Media added");
        Ok(MediaResponse::from(&media))
    }

    /// Remove a media record, then its blob if this service stored it
    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: Uuid, profile_id: Uuid, media_id: Uuid) -> ServiceResult<()> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        match self.ctx.media_repo().delete(profile_id, media_id).await? {
            Some(media) => {
                info!(media_id = %media_id, profile_id = %profile_id, "Media removed");
                discard_blob(self.ctx, profile_id, &media.url).await;
            }
            None => debug!(media_id = %media_id, "Media not present, nothing removed"),
        }
        Ok(())
    }

    /// Store a batch of files. Each file succeeds or fails on its own and
    /// earlier successes are kept.
    #[instrument(skip(self, files), fields(files = files.len()))]
    pub async fn upload(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        files: Vec<UploadFile>,
    ) -> ServiceResult<UploadResult> {
        ProfileService::new(self.ctx)
            .require_owned(user_id, profile_id)
            .await?;

        let mut result = UploadResult::default();
        for file in &files {
            match self.store_file(profile_id, file).await {
                Ok(media) => result.uploaded.push(MediaResponse::from(&media)),
                Err(err) => {
                    debug!(filename = %file.display_name(), error = %err, "Upload rejected");
                    result.failed.push(UploadFailure {
                        filename: file.display_name(),
                        code: err.error_code().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        info!(
            profile_id = %profile_id,
            uploaded = result.uploaded.len(),
            failed = result.failed.len(),
            "Upload batch processed"
        );
        Ok(result)
    }

    /// Upload an image and make it the caller's avatar
    #[instrument(skip(self, file))]
    pub async fn upload_avatar(&self, user_id: Uuid, file: UploadFile) -> ServiceResult<ProfileResponse> {
        let mut profile = ProfileService::new(self.ctx).own_profile(user_id).await?;

        if self.classify(&file)? != MediaType::Image {
            return Err(DomainError::UnsupportedMediaType(file.content_type).into());
        }

        let key = blob_key(profile.id, &file.content_type, file.filename.as_deref());
        let blob = self
            .ctx
            .blob_store()
            .put(&key, &file.bytes, &file.content_type)
            .await?;

        let previous = profile.avatar_url.take();
        profile.set_avatar(blob.url);
        if let Err(err) = self.ctx.profile_repo().update(&profile).await {
            warn!(blob_key = %blob.key, error = %err, "Avatar stored but profile not updated, blob orphaned");
            return Err(err.into());
        }

        info!(profile_id = %profile.id, "Avatar updated");
        if let Some(previous) = previous {
            discard_blob(self.ctx, profile.id, &previous).await;
        }
        Ok(ProfileResponse::from(&profile))
    }

    async fn store_file(&self, profile_id: Uuid, file: &UploadFile) -> ServiceResult<Media> {
        let media_type = self.classify(file)?;

        let key = blob_key(profile_id, &file.content_type, file.filename.as_deref());
        let blob = self
            .ctx
            .blob_store()
            .put(&key, &file.bytes, &file.content_type)
            .await?;

        let media = Media::stored(profile_id, media_type, blob.url, default_title(file));
        if let Err(err) = self.ctx.media_repo().create(&media).await {
            warn!(blob_key = %blob.key, error = %err, "Blob stored but media record failed, blob orphaned");
            return Err(err.into());
        }

        Ok(media)
    }

    /// Content-type and size checks shared by media and avatar uploads
    fn classify(&self, file: &UploadFile) -> ServiceResult<MediaType> {
        let media_type = MediaType::from_content_type(&file.content_type)
            .ok_or_else(|| DomainError::UnsupportedMediaType(file.content_type.clone()))?;

        if file.bytes.is_empty() {
            return Err(ServiceError::validation("file is empty"));
        }

        let max_bytes = self.ctx.settings().max_upload_bytes;
        if file.bytes.len() as u64 > max_bytes {
            return Err(DomainError::FileTooLarge { max_bytes }.into());
        }

        Ok(media_type)
    }
}

/// Filename, cut to the title limit
fn default_title(file: &UploadFile) -> Option<String> {
    file.filename
        .as_deref()
        .map(|name| name.chars().take(MEDIA_TITLE_MAX_CHARS).collect::<String>())
        .filter(|title| !title.is_empty())
}

/// Best-effort removal of a blob stored for `profile_id`.
///
/// External URLs and keys under another profile's prefix are left alone.
pub(crate) async fn discard_blob(ctx: &ServiceContext, profile_id: Uuid, url: &str) {
    let Some(key) = ctx.blob_store().key_for_url(url) else {
        return;
    };
    if !key.starts_with(&format!("{profile_id}/")) {
        warn!(profile_id = %profile_id, blob_key = %key, "Refusing to delete blob owned by another profile");
        return;
    }

    if let Err(err) = ctx.blob_store().delete(&key).await {
        warn!(blob_key = %key, error = %err, "Failed to delete blob");
    }
}
