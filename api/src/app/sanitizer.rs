//! Config Sanitizer
//!
//! Converts an untrusted, arbitrarily-shaped submission into a valid
//! [`FeedConfig`] before persistence. This is a total function: invalid
//! input never errors, it degrades. Entries without a usable key are
//! dropped, malformed URLs become empty strings, unknown toggle literals
//! coerce to off. Save operations must not hard-fail on partially malformed
//! admin input.
//!
//! The plain-text and key normalization helpers here are shared with the
//! flattener and the slug handling in the feed service.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::domain::entities::{FeedConfig, FieldEntry, ToggleEntry, ToggleState};

/// Markup tags: everything from `<` to the next `>`, or to the end of the
/// input when the tag is unterminated.
fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>?").unwrap())
}

/// Percent-encoded octets (`%hh`)
fn octet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%[0-9a-fA-F]{2}").unwrap())
}

/// Strip markup tags and percent-encoded octets from raw text.
///
/// Octet removal runs to a fixpoint: removing `%61` from `%%6161` exposes a
/// new `%61`, which must not survive either.
fn strip_markup(raw: &str) -> String {
    let mut text = tag_re().replace_all(raw, "").into_owned();
    loop {
        let next = octet_re().replace_all(&text, "");
        if next == text {
            return text;
        }
        text = next.into_owned();
    }
}

/// Normalize a single-line text value: strip markup, control characters and
/// percent-encoded octets, collapse all whitespace to single spaces, trim.
pub fn sanitize_text_field(raw: &str) -> String {
    strip_markup(raw)
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a multi-line text value. Same stripping rules as
/// [`sanitize_text_field`], but newlines are preserved; runs of spaces and
/// tabs collapse within each line, and outer blank space is trimmed.
pub fn sanitize_textarea_field(raw: &str) -> String {
    let cleaned: String = strip_markup(raw)
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();

    cleaned
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Normalize a key or slug: lowercase, keeping only `a-z`, `0-9`, `_`, `-`.
pub fn sanitize_key(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

/// Normalize a media URL. Accepts absolute `http`/`https` URLs with a host
/// and returns them in normalized form; everything else becomes an empty
/// string, never an error and never the raw input.
pub fn sanitize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => url.to_string(),
        _ => String::new(),
    }
}

/// Derive a URL-safe slug from a feed title: lowercase alphanumerics with
/// runs of anything else collapsed to single dashes.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for c in raw.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Entry objects of one category container.
///
/// Form encodings deliver categories as JSON objects keyed by slot index or
/// as plain arrays; both are accepted. Any other container shape, and any
/// entry that is not itself an object, contributes nothing.
pub(crate) fn category_entries(raw: Option<&Value>) -> Vec<&serde_json::Map<String, Value>> {
    match raw {
        Some(Value::Object(map)) => map.values().filter_map(Value::as_object).collect(),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

fn sanitize_fields<F>(raw: Option<&Value>, sanitize_value: F) -> BTreeMap<String, FieldEntry>
where
    F: Fn(&str) -> String,
{
    let mut out = BTreeMap::new();
    for entry in category_entries(raw) {
        let key = sanitize_text_field(entry.get("key").and_then(Value::as_str).unwrap_or_default());
        if key.is_empty() {
            continue;
        }
        let value = sanitize_value(entry.get("value").and_then(Value::as_str).unwrap_or_default());
        out.insert(out.len().to_string(), FieldEntry { key, value });
    }
    out
}

fn sanitize_toggles(raw: Option<&Value>) -> BTreeMap<String, ToggleEntry> {
    let mut out = BTreeMap::new();
    for entry in category_entries(raw) {
        let key = sanitize_text_field(entry.get("key").and_then(Value::as_str).unwrap_or_default());
        if key.is_empty() {
            continue;
        }
        let value =
            ToggleState::from_literal(entry.get("value").and_then(Value::as_str).unwrap_or_default());
        out.insert(out.len().to_string(), ToggleEntry { key, value });
    }
    out
}

/// Sanitize a raw submission into a canonical [`FeedConfig`].
///
/// Slot indices in the output are re-keyed sequentially; input indices are
/// arbitrary and never read back positionally, so nothing depends on them
/// surviving.
pub fn sanitize_config(raw: &Value) -> FeedConfig {
    FeedConfig {
        text_fields: sanitize_fields(raw.get("text_fields"), sanitize_textarea_field),
        media_fields: sanitize_fields(raw.get("media_fields"), sanitize_url),
        toggles: sanitize_toggles(raw.get("toggles")),
    }
}
