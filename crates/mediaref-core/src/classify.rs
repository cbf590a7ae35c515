//! Heuristic media classification.
//!
//! Priority: an explicit `media_type`/`type` field on the reference, then the
//! URL's file extension (or data URI mime type), then CDN path conventions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];

/// Fields that may declare the media type on a reference object.
const TYPE_FIELDS: &[&str] = &["media_type", "type"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Other => "other",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classifies a resolved URL and/or the reference it came from.
pub fn classify(url: Option<&str>, reference: Option<&Value>) -> MediaKind {
    if let Some(kind) = reference.and_then(declared_kind) {
        return kind;
    }
    let url = match url.or_else(|| reference.and_then(Value::as_str)) {
        Some(u) => u.trim(),
        None => return MediaKind::Other,
    };
    if let Some(kind) = data_uri_kind(url) {
        return kind;
    }
    if let Some(kind) = extension(url).and_then(|ext| kind_for_extension(&ext)) {
        return kind;
    }
    let segments = path_segments(url);
    if segments.iter().any(|s| s == "video") {
        return MediaKind::Video;
    }
    if is_cdn_image_upload(&segments) {
        return MediaKind::Image;
    }
    MediaKind::Other
}

/// Strict image test used when filtering galleries.
///
/// Only affirmative URL signals count: a known image extension, an
/// `image/*` data URI, or a CDN image-upload path.
pub fn has_image_signal(url: &str) -> bool {
    let url = url.trim();
    if let Some(kind) = data_uri_kind(url) {
        return kind == MediaKind::Image;
    }
    if extension(url).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str())) {
        return true;
    }
    is_cdn_image_upload(&path_segments(url))
}

fn declared_kind(reference: &Value) -> Option<MediaKind> {
    let obj = reference.as_object()?;
    TYPE_FIELDS
        .iter()
        .filter_map(|field| obj.get(*field).and_then(Value::as_str))
        .find_map(|declared| {
            let declared = declared.trim().to_ascii_lowercase();
            if declared.starts_with("image") {
                Some(MediaKind::Image)
            } else if declared.starts_with("video") {
                Some(MediaKind::Video)
            } else {
                None
            }
        })
}

fn data_uri_kind(url: &str) -> Option<MediaKind> {
    let head = url.get(..5)?;
    if !head.eq_ignore_ascii_case("data:") {
        return None;
    }
    let mime = url[5..].to_ascii_lowercase();
    Some(if mime.starts_with("image/") {
        MediaKind::Image
    } else if mime.starts_with("video/") {
        MediaKind::Video
    } else {
        MediaKind::Other
    })
}

fn kind_for_extension(ext: &str) -> Option<MediaKind> {
    if IMAGE_EXTENSIONS.contains(&ext) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// URL path with query and fragment removed.
fn url_path(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        return parsed.path().to_string();
    }
    let without_query = url.split(['?', '#']).next().unwrap_or_default();
    match without_query.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| rest[i..].to_string()).unwrap_or_default(),
        None => without_query.to_string(),
    }
}

fn path_segments(url: &str) -> Vec<String> {
    url_path(url)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Lowercased extension of the last path segment, if any.
fn extension(url: &str) -> Option<String> {
    let path = url_path(url);
    let last = path.rsplit('/').next()?;
    let (stem, ext) = last.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn is_cdn_image_upload(segments: &[String]) -> bool {
    segments
        .windows(2)
        .any(|pair| pair[0] == "image" && pair[1] == "upload")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn declared_type_wins() {
        let r = json!({"url": "http://cdn/c.png", "media_type": "video"});
        assert_eq!(classify(Some("http://cdn/c.png"), Some(&r)), MediaKind::Video);
        let r = json!({"type": "image/jpeg"});
        assert_eq!(classify(Some("http://cdn/blob"), Some(&r)), MediaKind::Image);
    }

    #[test]
    fn unrecognized_declared_type_falls_through() {
        let r = json!({"type": "document"});
        assert_eq!(classify(Some("http://cdn/a.mp4"), Some(&r)), MediaKind::Video);
    }

    #[test]
    fn extensions() {
        assert_eq!(classify(Some("http://cdn/b.JPG"), None), MediaKind::Image);
        assert_eq!(classify(Some("http://cdn/b.svg?v=3"), None), MediaKind::Image);
        assert_eq!(classify(Some("http://cdn/c.mp4#t=5"), None), MediaKind::Video);
        assert_eq!(classify(Some("http://cdn/c.ogg"), None), MediaKind::Video);
        assert_eq!(classify(Some("http://cdn/terms.docx"), None), MediaKind::Other);
        assert_eq!(classify(Some("http://cdn/x.pdf"), None), MediaKind::Other);
    }

    #[test]
    fn host_is_not_an_extension() {
        assert_eq!(classify(Some("http://images.example.png"), None), MediaKind::Other);
    }

    #[test]
    fn data_uris() {
        assert_eq!(classify(Some("data:image/png;base64,AA"), None), MediaKind::Image);
        assert_eq!(classify(Some("data:video/mp4;base64,AA"), None), MediaKind::Video);
        assert_eq!(classify(Some("data:text/plain,hi"), None), MediaKind::Other);
    }

    #[test]
    fn cdn_paths() {
        assert_eq!(
            classify(Some("https://res.cloudinary.com/demo/video/upload/q_auto,f_auto/clip"), None),
            MediaKind::Video
        );
        assert_eq!(
            classify(Some("https://res.cloudinary.com/demo/image/upload/q_auto,f_auto/pic"), None),
            MediaKind::Image
        );
    }

    #[test]
    fn string_reference_used_when_no_url() {
        assert_eq!(classify(None, Some(&json!("/a/b.webp"))), MediaKind::Image);
        assert_eq!(classify(None, None), MediaKind::Other);
    }

    #[test]
    fn image_signal_is_conservative() {
        assert!(has_image_signal("http://cdn/y.png"));
        assert!(has_image_signal("data:image/gif;base64,R0lG"));
        assert!(has_image_signal("https://res.cloudinary.com/demo/image/upload/c_fill/x"));
        assert!(!has_image_signal("http://cdn/x.pdf"));
        assert!(!has_image_signal("http://cdn/no-extension"));
        assert!(!has_image_signal("http://cdn/c.mp4"));
        assert!(!has_image_signal("data:application/pdf;base64,AA"));
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MediaKind::Video).unwrap(), "\"video\"");
        assert_eq!(MediaKind::Other.to_string(), "other");
    }
}
