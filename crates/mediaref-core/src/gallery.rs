//! Gallery aggregation over an entity's media-bearing fields.
//!
//! Candidates are gathered in rule order (primary fields, generic arrays,
//! section arrays), resolved, and deduplicated by URL keeping the first
//! occurrence. The image gallery then keeps only entries the classifier calls
//! images and whose URL carries an affirmative image signal, falling back to
//! the whole list when that leaves nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::classify::{classify, has_image_signal, MediaKind};
use crate::context::ResolveContext;
use crate::normalize::normalize;
use crate::rules::ExtractionRules;

/// A resolved media entry with its classified kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMedia {
    pub url: String,
    pub kind: MediaKind,
}

/// Resolved, deduplicated candidates with the reference each came from.
fn candidates<'a>(
    entity: &'a Value,
    rules: &'a ExtractionRules,
    ctx: &ResolveContext,
) -> Vec<(String, &'a Value)> {
    let mut seen = HashSet::new();
    rules
        .primary_refs(entity)
        .chain(rules.array_refs(entity))
        .chain(rules.section_refs(entity))
        .filter_map(|reference| normalize(reference, false, ctx).map(|url| (url, reference)))
        .filter(|(url, _)| seen.insert(url.clone()))
        .collect()
}

/// Ordered, unique image URLs for an entity.
///
/// Never empty when the entity has at least one resolvable reference.
pub fn collect_gallery(entity: &Value, rules: &ExtractionRules, ctx: &ResolveContext) -> Vec<String> {
    let all = candidates(entity, rules, ctx);
    let images: Vec<String> = all
        .iter()
        .filter(|(url, reference)| {
            classify(Some(url.as_str()), Some(*reference)) == MediaKind::Image && has_image_signal(url)
        })
        .map(|(url, _)| url.clone())
        .collect();

    if images.is_empty() && !all.is_empty() {
        tracing::debug!(
            candidates = all.len(),
            "no confirmed images; returning unfiltered gallery"
        );
        return all.into_iter().map(|(url, _)| url).collect();
    }
    images
}

/// Every resolvable media entry for an entity, unfiltered, with kinds.
pub fn collect_media(entity: &Value, rules: &ExtractionRules, ctx: &ResolveContext) -> Vec<ResolvedMedia> {
    candidates(entity, rules, ctx)
        .into_iter()
        .map(|(url, reference)| {
            let kind = classify(Some(&url), Some(reference));
            ResolvedMedia { url, kind }
        })
        .collect()
}
