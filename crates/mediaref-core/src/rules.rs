//! Extraction rules: which entity fields carry media, and in what order.
//!
//! Upstream entities (companies, subsidiaries, products, agents) spell their
//! media fields differently, including legacy camelCase variants. Rather than
//! hard-code those spellings at every call site, the gallery and thumbnail
//! stages walk one ordered table. Each list can be overridden from the
//! `[rules]` section of config.toml.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::lookup_path;

const PRIMARY: &[&str] = &[
    "primary_image",
    "primary_image_url",
    "primaryImage",
    "image_url",
    "imageUrl",
    "image",
    "main_image",
];

const ALTERNATES: &[&str] = &[
    "thumbnail",
    "thumbnail_url",
    "thumbnailUrl",
    "cover_image",
    "coverImage",
    "cover",
    "banner",
    "logo",
    "logo_url",
    "logoUrl",
    "company_logo",
    "photo",
    "avatar",
    "profile_image",
];

const ARRAYS: &[&str] = &["media", "images"];

const SECTIONS: &[&str] = &[
    "description_files",
    "gallery",
    "product_images",
    "factory_images",
    "showroom_images",
    "certificates",
    "attachments",
];

fn owned(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

/// Ordered field paths (dotted paths allowed) used to find media on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    /// Flat primary-image fields.
    pub primary: Vec<String>,
    /// Flat fields only consulted when picking a thumbnail.
    pub alternates: Vec<String>,
    /// Generic media arrays (`media`, `images`).
    pub arrays: Vec<String>,
    /// Named section arrays, evaluated after the generic arrays.
    pub sections: Vec<String>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            primary: owned(PRIMARY),
            alternates: owned(ALTERNATES),
            arrays: owned(ARRAYS),
            sections: owned(SECTIONS),
        }
    }
}

impl ExtractionRules {
    /// Values of the primary fields that are present, in rule order.
    pub fn primary_refs<'a>(&'a self, entity: &'a Value) -> impl Iterator<Item = &'a Value> + 'a {
        flat_refs(entity, &self.primary)
    }

    /// Values of the alternate fields that are present, in rule order.
    pub fn alternate_refs<'a>(&'a self, entity: &'a Value) -> impl Iterator<Item = &'a Value> + 'a {
        flat_refs(entity, &self.alternates)
    }

    /// Every entry of every generic array, in rule then array order.
    pub fn array_refs<'a>(&'a self, entity: &'a Value) -> impl Iterator<Item = &'a Value> + 'a {
        self.arrays.iter().flat_map(move |path| field_entries(entity, path))
    }

    /// Every entry of every section array, in rule then array order.
    pub fn section_refs<'a>(&'a self, entity: &'a Value) -> impl Iterator<Item = &'a Value> + 'a {
        self.sections.iter().flat_map(move |path| field_entries(entity, path))
    }
}

fn flat_refs<'a>(entity: &'a Value, paths: &'a [String]) -> impl Iterator<Item = &'a Value> + 'a {
    paths
        .iter()
        .filter_map(move |path| lookup_path(entity, path))
        .filter(|v| !v.is_null())
}

/// Entries of an array field. A lone string or object counts as a
/// one-element array; anything else yields nothing.
pub fn field_entries<'a>(entity: &'a Value, path: &str) -> &'a [Value] {
    match lookup_path(entity, path) {
        Some(Value::Array(items)) => items,
        Some(v @ (Value::String(_) | Value::Object(_))) => std::slice::from_ref(v),
        _ => &[],
    }
}
