//! Storage key construction and validation.

use uuid::Uuid;

/// Content types accepted for photo uploads.
pub const ALLOWED_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// File extensions accepted for photo uploads, compared lowercased.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Builds a fresh storage key for a photo of the given season.
///
/// # Arguments
/// - `year` - Season year the photo belongs to
/// - `extension` - Lowercased file extension without the dot
pub fn photo_key(year: i32, extension: &str) -> String {
    format!("drafts/{}/{}.{}", year, Uuid::new_v4(), extension)
}

/// Lowercased extension of `filename`, `None` if it has none.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, extension) = filename.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }

    Some(extension.to_lowercase())
}

pub fn is_allowed_content_type(content_type: &str) -> bool {
    // Ignore parameters such as `; charset=binary`
    let mime = content_type.split(';').next().unwrap_or_default().trim();

    ALLOWED_CONTENT_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(mime))
}

pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension)
}

/// Content type to serve an object with, based on its key's extension.
pub fn content_type_for_key(key: &str) -> Option<&'static str> {
    match file_extension(key)?.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// Whether `key` is a relative path that stays inside the storage root.
pub fn is_safe_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('/')
        && !key.contains('\\')
        && key
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}
