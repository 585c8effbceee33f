//! Turns address-bar input into navigable URLs and derives page titles.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::types::settings::SearchEngine;

/// Characters left unescaped in search queries, matching `encodeURIComponent`.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Tab title used while a URL without a parseable host is "loading".
pub const LOADING_TITLE: &str = "Loading...";

/// Browsing-log title for URLs without a parseable host.
pub const UNTITLED_TITLE: &str = "Untitled";

/// Resolves raw address-bar input to a URL.
///
/// Input containing a `.` or starting with `http` is taken as a direct URL
/// (`https://` is prepended when the prefix is missing). Anything else is a
/// search query appended, percent-encoded, to the engine's template.
/// Blank input resolves to `None`.
pub fn resolve_query(query: &str, engine: SearchEngine) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let looks_like_url = query.contains('.') || query.starts_with("http");
    if !looks_like_url {
        let escaped = utf8_percent_encode(query, QUERY_ESCAPE);
        return Some(format!("{}{}", engine.template(), escaped));
    }

    if query.starts_with("http") {
        Some(query.to_string())
    } else {
        Some(format!("https://{}", query))
    }
}

/// Host component of `url`, or `None` when it does not parse or has no host.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .map(str::to_string)
}

/// Title for a tab showing `url`.
pub fn tab_title(url: &str) -> String {
    host_of(url).unwrap_or_else(|| LOADING_TITLE.to_string())
}

/// Title for a browsing-log entry of `url`.
pub fn history_title(url: &str) -> String {
    host_of(url).unwrap_or_else(|| UNTITLED_TITLE.to_string())
}
