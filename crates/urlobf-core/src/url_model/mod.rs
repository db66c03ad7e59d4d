//! URL decomposition into scheme, host and path.
//!
//! The split is pattern based rather than grammar based, so malformed input
//! is accepted silently and carried through to the output.

mod extract;

pub use extract::{extract_host, extract_path, extract_scheme};

/// Scheme used when the input has no `http`/`https` prefix.
pub const DEFAULT_SCHEME: &str = "https://";

/// The three pieces of an input URL the obfuscator works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    /// Starts with `/` when non-empty.
    pub path: String,
}

impl UrlParts {
    /// Splits `url`, substituting [`DEFAULT_SCHEME`] when no scheme prefix is
    /// present.
    ///
    /// # Examples
    ///
    /// - `split("http://example.com/x=1")` → `http://`, `example.com`, `/x=1`
    /// - `split("example.com")` → `https://`, `example.com`, `""`
    pub fn split(url: &str) -> Self {
        let scheme = match extract_scheme(url) {
            s if s.is_empty() => DEFAULT_SCHEME.to_string(),
            s => s,
        };
        Self {
            scheme,
            host: extract_host(url),
            path: extract_path(url),
        }
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}
