//! Reading references and entities from arguments, files, or stdin.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;

/// A reference argument: JSON when it parses as JSON, otherwise a plain string.
///
/// Bare paths like `/img/a.png` are not valid JSON and come through as strings.
pub fn parse_reference(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

/// Reads a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_json(path: &str) -> Result<Value> {
    let data = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read JSON file: {path}"))?
    };
    serde_json::from_str(&data).with_context(|| format!("parse JSON: {path}"))
}

/// A top-level array is a list of entities; anything else is one entity.
pub fn entities(doc: &Value) -> &[Value] {
    match doc {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    }
}
