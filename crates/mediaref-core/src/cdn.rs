//! CDN URL construction from asset descriptors.
//!
//! Some endpoints return stored media as `{public_id, resource_type?, format?}`
//! instead of a literal URL. When a CDN cloud is configured these descriptors
//! are turned into delivery URLs of the form
//! `https://{host}/{cloud}/{resource_type}/upload/{transform}/{public_id}[.format]`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default CDN delivery host.
pub const DEFAULT_CDN_HOST: &str = "res.cloudinary.com";

/// Crop/fill transform used for list and card previews.
const THUMB_TRANSFORM: &str = "c_fill,w_400,h_300";
/// Start offset (seconds) of the frame used as a video thumbnail.
const VIDEO_THUMB_OFFSET: &str = "so_1";
/// Generic delivery transform for full-size media.
const DELIVERY_TRANSFORM: &str = "q_auto,f_auto";
/// Video thumbnails are still frames.
const VIDEO_THUMB_FORMAT: &str = "jpg";

/// CDN settings (`[cdn]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnConfig {
    /// Cloud identifier. `None` disables descriptor resolution.
    #[serde(default)]
    pub cloud_name: Option<String>,
    /// Delivery host, without scheme.
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    DEFAULT_CDN_HOST.to_string()
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            host: default_host(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Image,
    Video,
}

impl ResourceType {
    /// Anything other than an explicit `"video"` is treated as an image.
    fn from_field(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("video") => ResourceType::Video,
            _ => ResourceType::Image,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
        }
    }
}

/// A CDN asset descriptor borrowed from a JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdnAsset<'a> {
    pub public_id: &'a str,
    pub resource_type: ResourceType,
    pub format: Option<&'a str>,
}

impl<'a> CdnAsset<'a> {
    /// Reads a descriptor from a JSON object. Returns `None` unless the value
    /// is an object with a non-empty string `public_id`.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let obj = value.as_object()?;
        let public_id = obj.get("public_id")?.as_str()?.trim();
        if public_id.is_empty() {
            return None;
        }
        let resource_type = ResourceType::from_field(obj.get("resource_type").and_then(Value::as_str));
        let format = obj
            .get("format")
            .and_then(Value::as_str)
            .map(|f| f.trim().trim_start_matches('.'))
            .filter(|f| !f.is_empty());

        Some(Self {
            public_id,
            resource_type,
            format,
        })
    }
}

impl CdnConfig {
    fn cloud(&self) -> Option<&str> {
        self.cloud_name
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    fn delivery_host(&self) -> &str {
        let host = self
            .host
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        if host.is_empty() {
            DEFAULT_CDN_HOST
        } else {
            host
        }
    }

    /// Builds the delivery URL for `asset`, or `None` when no cloud is configured.
    pub fn build_url(&self, asset: &CdnAsset<'_>, thumb: bool) -> Option<String> {
        let Some(cloud) = self.cloud() else {
            tracing::trace!(
                public_id = asset.public_id,
                "no CDN cloud configured; descriptor left unresolved"
            );
            return None;
        };

        let (transform, format) = match (thumb, asset.resource_type) {
            (false, _) => (DELIVERY_TRANSFORM.to_string(), asset.format),
            (true, ResourceType::Image) => (THUMB_TRANSFORM.to_string(), asset.format),
            (true, ResourceType::Video) => (
                format!("{VIDEO_THUMB_OFFSET},{THUMB_TRANSFORM}"),
                Some(VIDEO_THUMB_FORMAT),
            ),
        };

        let mut url = format!(
            "https://{}/{}/{}/upload/{}/{}",
            self.delivery_host(),
            cloud,
            asset.resource_type.as_str(),
            transform,
            asset.public_id.trim_start_matches('/'),
        );
        if let Some(ext) = format {
            url.push('.');
            url.push_str(ext);
        }
        Some(url)
    }
}

/// Convenience wrapper: parse a descriptor and build its URL in one step.
pub fn build_cdn_url(cdn: &CdnConfig, descriptor: &Value, thumb: bool) -> Option<String> {
    let asset = CdnAsset::from_value(descriptor)?;
    cdn.build_url(&asset, thumb)
}
