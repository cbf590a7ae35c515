//! Candidate key tables and guarded JSON path lookup.

use serde_json::Value;

/// Checked first when a thumbnail rendition is preferred.
pub const THUMB_KEYS: &[&str] = &["thumbnail_url", "thumbnail.secure_url", "thumbnail.url"];

/// Literal URL fields, in priority order.
pub const URL_KEYS: &[&str] = &[
    "secure_url",
    "url",
    "file",
    "image",
    "src",
    "path",
    "file_url",
    "asset.secure_url",
    "asset.url",
    "file.secure_url",
    "file.url",
];

/// Follows a dotted path (`asset.url`) through nested objects.
///
/// Any non-object along the way ends the lookup with `None`.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}

/// First non-blank string found under `keys`, trimmed.
pub fn first_string<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| lookup_path(value, key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// Literal URL candidate for a reference object, honoring `prefer_thumb`.
pub(crate) fn literal_candidate(value: &Value, prefer_thumb: bool) -> Option<&str> {
    if prefer_thumb {
        if let Some(thumb) = first_string(value, THUMB_KEYS) {
            return Some(thumb);
        }
    }
    first_string(value, URL_KEYS)
}
