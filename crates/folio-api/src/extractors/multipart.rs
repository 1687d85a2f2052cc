//! Multipart upload reading

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use folio_service::UploadFile;

use crate::response::{ApiError, ApiResult};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Collect every file part of a multipart body, in order.
///
/// Parts without a filename are treated as plain form fields and skipped.
pub async fn read_upload_files(mut multipart: Multipart) -> ApiResult<Vec<UploadFile>> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        files.push(UploadFile {
            filename: Some(filename),
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Ok(files)
}

fn multipart_error(err: MultipartError) -> ApiError {
    ApiError::body_rejected(err.status(), err.body_text())
}

/// Read exactly one file part
pub async fn read_single_file(multipart: Multipart) -> ApiResult<UploadFile> {
    let mut files = read_upload_files(multipart).await?;
    match files.len() {
        1 => files.pop().ok_or_else(|| ApiError::invalid_body("expected one file")),
        0 => Err(ApiError::invalid_body("no file in request")),
        n => Err(ApiError::invalid_body(format!("expected one file, got {n}"))),
    }
}
