//! Prefix/suffix extraction on the raw URL string.
//!
//! Matching is deliberately loose: anything starting with `http` counts as
//! having a scheme, and no URL grammar is enforced.

use regex::Regex;
use std::sync::LazyLock;

/// `http`, optional `s`, optional `:`, then up to two slashes.
static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?:?/{0,2}").expect("scheme pattern compiles"));

/// Returns the scheme prefix exactly as written, or `""` if the URL does not
/// start with `http`.
pub fn extract_scheme(url: &str) -> String {
    SCHEME
        .find(url)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn strip_scheme(url: &str) -> &str {
    match SCHEME.find(url) {
        Some(m) => &url[m.end()..],
        None => url,
    }
}

/// Everything between the scheme and the first `/`.
pub fn extract_host(url: &str) -> String {
    let rest = strip_scheme(url);
    match rest.find('/') {
        Some(i) => rest[..i].to_string(),
        None => rest.to_string(),
    }
}

/// Everything from the first `/` after the scheme, inclusive.
pub fn extract_path(url: &str) -> String {
    let rest = strip_scheme(url);
    rest.find('/')
        .map(|i| rest[i..].to_string())
        .unwrap_or_default()
}
