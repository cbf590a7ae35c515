//! `mediaref gallery <path>` – gallery URLs for each entity in a JSON document.

use anyhow::Result;
use mediaref_core::MediaResolver;
use serde_json::Value;

use crate::cli::input::{entities, read_json};

/// Text output: one URL per line (`--all` adds the kind), entities separated
/// by a blank line.
fn render_text(resolver: &MediaResolver, doc: &Value, all: bool) -> String {
    let blocks: Vec<String> = entities(doc)
        .iter()
        .map(|entity| {
            if all {
                resolver
                    .media(entity)
                    .iter()
                    .map(|m| format!("{:<6} {}", m.kind, m.url))
                    .collect::<Vec<_>>()
                    .join("\n")
            } else {
                resolver.gallery(entity).join("\n")
            }
        })
        .collect();
    blocks.join("\n\n")
}

/// JSON output mirrors the input shape: one array per entity, or an array of arrays.
fn render_json(resolver: &MediaResolver, doc: &Value, all: bool) -> Result<String> {
    let per_entity = |entity: &Value| -> Result<Value> {
        Ok(if all {
            serde_json::to_value(resolver.media(entity))?
        } else {
            serde_json::to_value(resolver.gallery(entity))?
        })
    };
    let out = match doc {
        Value::Array(items) => Value::Array(items.iter().map(|e| per_entity(e)).collect::<Result<_>>()?),
        entity => per_entity(entity)?,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn run_gallery(resolver: &MediaResolver, path: &str, all: bool, json: bool) -> Result<()> {
    let doc = read_json(path)?;
    tracing::debug!(entities = entities(&doc).len(), all, "building galleries");
    let out = if json {
        render_json(resolver, &doc, all)?
    } else {
        render_text(resolver, &doc, all)
    };
    println!("{out}");
    Ok(())
}
