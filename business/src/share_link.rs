//! Shareable-link handling for the `content` query parameter.
//!
//! The page mirrors the trimmed input into `?content=...` so links stay
//! shareable. These functions are pure string reconciliation; applying the
//! result to the address bar is the UI's job.

use std::borrow::Cow;

/// Query parameter carrying the shared content.
pub const CONTENT_PARAM: &str = "content";

/// Outcome of reconciling the input buffer against the current query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySync {
    /// The query already reflects the input; leave the address bar alone.
    Unchanged,
    /// Replace the query string with this value (without the leading `?`).
    Replace(String),
}

/// Reads the `content` parameter used to seed the input buffer on load.
///
/// Accepts the raw `location.search` value, with or without the leading `?`.
/// An empty-valued parameter counts as absent.
pub fn content_from_query(query: &str) -> Option<String> {
    parse_pairs(query.strip_prefix('?').unwrap_or(query))
        .into_iter()
        .find(|(key, value)| key == CONTENT_PARAM && !value.is_empty())
        .map(|(_, value)| value)
}

/// Reconciles the trimmed input with the current query string.
///
/// Empty input removes the parameter entirely; a differing value replaces
/// it. Parameters other than `content` are preserved in order.
pub fn sync_query(query: &str, trimmed: &str) -> QuerySync {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut pairs = parse_pairs(query);
    let current = pairs
        .iter()
        .find(|(key, _)| key == CONTENT_PARAM)
        .map(|(_, value)| value.as_str());

    if trimmed.is_empty() {
        if current.is_none() {
            return QuerySync::Unchanged;
        }
        pairs.retain(|(key, _)| key != CONTENT_PARAM);
    } else {
        if current == Some(trimmed) {
            return QuerySync::Unchanged;
        }
        match pairs.iter_mut().find(|(key, _)| key == CONTENT_PARAM) {
            Some(pair) => pair.1 = trimmed.to_owned(),
            None => pairs.push((CONTENT_PARAM.to_owned(), trimmed.to_owned())),
        }
    }

    QuerySync::Replace(encode_pairs(&pairs))
}

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    // Form encoding uses `+` for spaces; percent-decode the rest.
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::warn!("Malformed percent-encoding in query component: {e}");
            raw
        }
    }
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_component(key.as_str()),
                encode_component(value.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}
