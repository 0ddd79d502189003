// ABOUTME: Cookie storage capability for reading the anti-forgery token at bootstrap.
// ABOUTME: Production impl parses a document.cookie-style header string once.

use std::collections::HashMap;

/// Read access to the client-side cookie jar. The shell reads the
/// anti-forgery cookie exactly once at construction; a missing cookie is
/// legal and results in the header being omitted, not a failure.
pub trait CookieStore: Send + Sync {
    /// Look up a cookie value by name.
    fn get(&self, name: &str) -> Option<String>;
}

/// A cookie store parsed from a `name=value; name2=value2` header string,
/// the form exposed by `document.cookie`. Later duplicates win.
#[derive(Debug, Clone, Default)]
pub struct HeaderCookies {
    values: HashMap<String, String>,
}

impl HeaderCookies {
    /// Parse a cookie header string. Malformed pairs (no `=`) are skipped.
    pub fn parse(header: &str) -> Self {
        let values = header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.trim().to_string()))
            })
            .collect();
        Self { values }
    }

    /// An empty jar, for sessions with no cookies at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl CookieStore for HeaderCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
