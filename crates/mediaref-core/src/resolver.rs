//! Resolver facade: one context and one rules table behind a single handle.
//!
//! Callers that resolve many payloads build a `MediaResolver` once (usually
//! from config) and share it; every method is a pure function of its input.

use serde_json::Value;

use crate::classify::{classify, MediaKind};
use crate::context::ResolveContext;
use crate::gallery::{collect_gallery, collect_media, ResolvedMedia};
use crate::normalize::normalize;
use crate::rules::ExtractionRules;
use crate::thumbnail::select_thumbnail;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaResolver {
    context: ResolveContext,
    rules: ExtractionRules,
}

impl MediaResolver {
    pub fn new(context: ResolveContext, rules: ExtractionRules) -> Self {
        Self { context, rules }
    }

    pub fn context(&self) -> &ResolveContext {
        &self.context
    }

    pub fn rules(&self) -> &ExtractionRules {
        &self.rules
    }

    /// Full-size URL for one reference.
    pub fn resolve(&self, reference: &Value) -> Option<String> {
        normalize(reference, false, &self.context)
    }

    /// Thumbnail-preferring URL for one reference.
    pub fn resolve_thumb(&self, reference: &Value) -> Option<String> {
        normalize(reference, true, &self.context)
    }

    pub fn classify(&self, reference: &Value) -> MediaKind {
        let url = self.resolve(reference);
        classify(url.as_deref(), Some(reference))
    }

    pub fn gallery(&self, entity: &Value) -> Vec<String> {
        collect_gallery(entity, &self.rules, &self.context)
    }

    pub fn media(&self, entity: &Value) -> Vec<ResolvedMedia> {
        collect_media(entity, &self.rules, &self.context)
    }

    pub fn thumbnail(&self, entity: &Value) -> Option<String> {
        select_thumbnail(entity, &self.rules, &self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn resolver_is_shareable() {
        assert_send_sync::<MediaResolver>();
    }

    #[test]
    fn default_resolver_uses_localhost() {
        let resolver = MediaResolver::default();
        assert_eq!(
            resolver.resolve(&json!("/a.png")).as_deref(),
            Some("http://localhost/a.png")
        );
        assert_eq!(resolver.classify(&json!("/a.png")), MediaKind::Image);
        assert_eq!(resolver.classify(&json!({"name": "x"})), MediaKind::Other);
    }

    #[test]
    fn thumb_and_full_differ_for_descriptors() {
        let resolver = MediaResolver::new(
            ResolveContext::default().with_cdn_cloud("demo"),
            ExtractionRules::default(),
        );
        let descriptor = json!({"public_id": "p"});
        let full = resolver.resolve(&descriptor).unwrap();
        let thumb = resolver.resolve_thumb(&descriptor).unwrap();
        assert!(full.contains("q_auto,f_auto"));
        assert!(thumb.contains("c_fill"));
    }

    #[test]
    fn custom_rules_are_used() {
        let rules = ExtractionRules {
            sections: vec!["brochures".to_string()],
            ..ExtractionRules::default()
        };
        let resolver = MediaResolver::new(ResolveContext::default(), rules);
        let entity = json!({"brochures": ["http://cdn/b.png"], "gallery": ["http://cdn/g.png"]});
        assert_eq!(resolver.gallery(&entity), vec!["http://cdn/b.png"]);
    }
}
