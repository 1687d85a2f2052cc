//! Blob key construction and checking

use uuid::Uuid;

const FALLBACK_EXTENSION: &str = "bin";

/// Build the storage key for a new upload: `{profile_id}/{uuid}.{ext}`
pub fn blob_key(profile_id: Uuid, content_type: &str, filename: Option<&str>) -> String {
    format!(
        "{profile_id}/{}.{}",
        Uuid::new_v4(),
        extension_for(content_type, filename)
    )
}

/// Pick a file extension for the checked content type.
///
/// The file name's own extension is kept only when it belongs to that
/// content type, so blobs are always served with the type they were accepted as.
pub fn extension_for(content_type: &str, filename: Option<&str>) -> String {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let Some(known) = mime_guess::get_mime_extensions_str(&essence) else {
        return FALLBACK_EXTENSION.to_string();
    };

    filename
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| known.contains(&ext.as_str()))
        .or_else(|| known.first().map(|ext| (*ext).to_string()))
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

/// Relative path of safe characters with no `.`/`..` segments
pub fn is_safe_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('/')
        && key
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'))
}
