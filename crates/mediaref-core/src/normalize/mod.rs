//! Reference normalization: one media reference in, one canonical URL out.
//!
//! A reference is whatever an endpoint put in a media field: a URL or path
//! string, an object carrying the URL under one of many keys (possibly
//! nested), or a CDN asset descriptor. Anything unrecognized resolves to
//! `None`; nothing here panics on odd payload shapes.

mod keys;
mod string;

pub use keys::{first_string, lookup_path, THUMB_KEYS, URL_KEYS};
pub use string::{absolutize, is_absolute};

use serde_json::Value;

use crate::cdn::CdnAsset;
use crate::context::ResolveContext;

/// Resolves a single media reference to an absolute URL or data URI.
///
/// With `prefer_thumb`, object references are checked for thumbnail fields
/// first and CDN descriptors use the thumbnail transform.
pub fn normalize(reference: &Value, prefer_thumb: bool, ctx: &ResolveContext) -> Option<String> {
    match reference {
        Value::String(s) => absolutize(s, ctx),
        Value::Object(_) => {
            if let Some(literal) = keys::literal_candidate(reference, prefer_thumb) {
                return absolutize(literal, ctx);
            }
            let asset = CdnAsset::from_value(reference)?;
            let built = ctx.cdn().build_url(&asset, prefer_thumb)?;
            absolutize(&built, ctx)
        }
        _ => None,
    }
}
