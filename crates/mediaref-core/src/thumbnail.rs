//! Thumbnail selection: one representative URL per entity.
//!
//! Order of preference:
//! 1. primary flat fields
//! 2. alternate flat fields (logo, cover, ...)
//! 3. the `is_primary` image in the generic arrays, else their first image
//! 4. the first resolvable section entry
//! 5. the first resolvable generic array entry of any kind
//!
//! A flat primary field always beats an `is_primary` array entry.

use serde_json::Value;

use crate::classify::{classify, MediaKind};
use crate::context::ResolveContext;
use crate::normalize::normalize;
use crate::rules::ExtractionRules;

const PRIMARY_FLAGS: &[&str] = &["is_primary", "isPrimary"];

/// Picks the best thumbnail URL for an entity, if it has any media at all.
pub fn select_thumbnail(entity: &Value, rules: &ExtractionRules, ctx: &ResolveContext) -> Option<String> {
    let resolve = |reference: &Value| normalize(reference, true, ctx);

    rules
        .primary_refs(entity)
        .find_map(resolve)
        .or_else(|| rules.alternate_refs(entity).find_map(resolve))
        .or_else(|| flagged_or_first_image(entity, rules, ctx))
        .or_else(|| rules.section_refs(entity).find_map(resolve))
        .or_else(|| rules.array_refs(entity).find_map(resolve))
}

fn flagged_or_first_image(entity: &Value, rules: &ExtractionRules, ctx: &ResolveContext) -> Option<String> {
    let mut first_image = None;
    for entry in rules.array_refs(entity) {
        let Some(url) = normalize(entry, true, ctx) else {
            continue;
        };
        if classify(Some(&url), Some(entry)) != MediaKind::Image {
            continue;
        }
        if is_primary(entry) {
            return Some(url);
        }
        if first_image.is_none() {
            first_image = Some(url);
        }
    }
    first_image
}

fn is_primary(entry: &Value) -> bool {
    let Some(obj) = entry.as_object() else {
        return false;
    };
    PRIMARY_FLAGS
        .iter()
        .filter_map(|flag| obj.get(*flag))
        .any(|v| match v {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_i64() == Some(1),
            Value::String(s) => matches!(s.trim(), "true" | "1"),
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdn::CdnConfig;
    use serde_json::json;

    fn ctx() -> ResolveContext {
        ResolveContext::new("https://shop.example.com", CdnConfig::default()).unwrap()
    }

    fn thumb(entity: &Value) -> Option<String> {
        select_thumbnail(entity, &ExtractionRules::default(), &ctx())
    }

    #[test]
    fn flat_primary_beats_flagged_entry() {
        let entity = json!({
            "primary_image": "/img/a.png",
            "media": [{"url": "http://cdn/b.jpg", "is_primary": true}],
        });
        assert_eq!(thumb(&entity).as_deref(), Some("https://shop.example.com/img/a.png"));
    }

    #[test]
    fn primary_field_prefers_thumbnail_rendition() {
        let entity = json!({
            "primary_image": {"url": "http://cdn/big.jpg", "thumbnail_url": "http://cdn/small.jpg"},
        });
        assert_eq!(thumb(&entity).as_deref(), Some("http://cdn/small.jpg"));
    }

    #[test]
    fn alternates_before_arrays() {
        let entity = json!({
            "logo": {"secure_url": "https://cdn/logo.svg"},
            "media": ["http://cdn/m.jpg"],
        });
        assert_eq!(thumb(&entity).as_deref(), Some("https://cdn/logo.svg"));
    }

    #[test]
    fn flagged_image_in_array() {
        let entity = json!({
            "media": [
                {"url": "http://cdn/first.jpg"},
                {"url": "http://cdn/flagged.jpg", "is_primary": "true"},
            ],
        });
        assert_eq!(thumb(&entity).as_deref(), Some("http://cdn/flagged.jpg"));
    }

    #[test]
    fn flagged_video_is_ignored() {
        let entity = json!({
            "media": [
                {"url": "http://cdn/c.mp4", "is_primary": true},
                {"url": "http://cdn/b.jpg"},
            ],
        });
        assert_eq!(thumb(&entity).as_deref(), Some("http://cdn/b.jpg"));
    }

    #[test]
    fn sections_before_non_image_array_entries() {
        let entity = json!({
            "media": [{"url": "http://cdn/c.mp4"}],
            "factory_images": [null, "http://cdn/f.png"],
        });
        assert_eq!(thumb(&entity).as_deref(), Some("http://cdn/f.png"));
    }

    #[test]
    fn falls_back_to_first_array_entry() {
        let entity = json!({"images": [{"url": "http://cdn/c.mp4"}, {"url": "http://cdn/d.webm"}]});
        assert_eq!(thumb(&entity).as_deref(), Some("http://cdn/c.mp4"));
    }

    #[test]
    fn nothing_resolvable() {
        assert_eq!(thumb(&json!({"name": "Acme", "media": [null, {}]})), None);
        assert_eq!(thumb(&json!("not an entity")), None);
    }

    #[test]
    fn primary_flag_variants() {
        assert!(is_primary(&json!({"is_primary": 1})));
        assert!(is_primary(&json!({"isPrimary": true})));
        assert!(!is_primary(&json!({"is_primary": "no"})));
        assert!(!is_primary(&json!("http://cdn/a.png")));
    }
}
