//! String reference rules: absolute, protocol-relative, or origin-relative.

use crate::context::ResolveContext;

const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "data:"];

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// True for `http://`, `https://` and `data:` references.
pub fn is_absolute(s: &str) -> bool {
    ABSOLUTE_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(s, prefix))
}

/// Turns a raw string reference into a canonical URL.
///
/// - blank → `None`
/// - absolute URL or data URI → unchanged (after trimming)
/// - `//host/path` → current protocol prefixed
/// - anything else → origin plus exactly one `/` plus the path
pub fn absolutize(raw: &str, ctx: &ResolveContext) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if is_absolute(s) {
        return Some(s.to_string());
    }
    if s.starts_with("//") {
        return Some(format!("{}{}", ctx.protocol(), s));
    }
    Some(format!("{}/{}", ctx.origin(), s.trim_start_matches('/')))
}
