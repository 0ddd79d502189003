// ABOUTME: Path pattern parsing and structural matching for route registration.
// ABOUTME: Patterns are literal segments or :placeholder segments; matching captures placeholders.

use std::collections::HashMap;

use serde::Serialize;

/// One segment of a parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    Literal(String),
    /// A `:name` placeholder. Matches any single non-empty segment and
    /// captures its value under `name`.
    Placeholder(String),
}

/// A parsed URL path pattern.
///
/// Matching is structural: segment counts must agree, literals must compare
/// equal, and the trailing-slash form of the pattern must match the request
/// path. There is no specificity ranking; callers decide precedence by
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

/// Placeholder values captured by a successful match.
pub type PathParams = HashMap<String, String>;

impl PathPattern {
    /// Parse a pattern such as `/allocation/client/` or `/components/:id/`.
    ///
    /// Parsing is total: every string yields a pattern. A segment starting
    /// with `:` and carrying at least one more character is a placeholder;
    /// a bare `:` is treated as a literal.
    pub fn parse(pattern: &str) -> Self {
        let trimmed = pattern.trim_start_matches('/');
        let trailing_slash = trimmed.ends_with('/') || trimmed.is_empty();
        let segments = trimmed
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Placeholder(name.to_string()),
                _ => Segment::Literal(s.to_string()),
            })
            .collect();

        Self {
            raw: pattern.to_string(),
            segments,
            trailing_slash,
        }
    }

    /// The pattern as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern contains no placeholders.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Match a request path against this pattern, capturing placeholder
    /// values. Returns None when the path does not match.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let trimmed = path.trim_start_matches('/');
        let trailing_slash = trimmed.ends_with('/') || trimmed.is_empty();
        if trailing_slash != self.trailing_slash {
            return None;
        }

        let parts: Vec<&str> = trimmed
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Placeholder(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }
        Some(params)
    }
}
