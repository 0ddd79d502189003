// ABOUTME: Route table with ordered first-match dispatch and a single validated fallback.
// ABOUTME: Resolution is total; unmatched paths follow the fallback redirect, never an error.

use serde::Serialize;
use thiserror::Error;

use crate::pattern::{PathParams, PathPattern};

/// Errors that can occur while building a route table.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("fallback redirect target {0:?} does not match any registered route")]
    UnreachableFallback(String),
}

/// One registered route: a path pattern bound to a view template and a
/// controller identifier.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub pattern: PathPattern,
    /// Template path relative to the static URL, e.g. `partials/components.html`.
    pub template: String,
    pub controller: String,
}

impl RouteEntry {
    /// The template's full URL under the given static prefix.
    pub fn template_url(&self, static_url: &str) -> String {
        format!("{}{}", static_url, self.template)
    }
}

/// The ordered route table. First matching entry wins; paths that match no
/// entry redirect to the fallback target, which is guaranteed at construction
/// time to match a registered entry.
#[derive(Debug, Clone, Serialize)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback_to: String,
}

/// The outcome of resolving a path. Always refers to a registered entry;
/// `redirected_from` records the original path when the fallback fired.
#[derive(Debug)]
pub struct Resolved<'a> {
    pub entry: &'a RouteEntry,
    pub params: PathParams,
    pub redirected_from: Option<String>,
}

impl RouteTable {
    /// Start building a table. Entries match in the order they are added.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder {
            entries: Vec::new(),
        }
    }

    /// The registered entries, in declaration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// The path unmatched requests redirect to.
    pub fn fallback_to(&self) -> &str {
        &self.fallback_to
    }

    /// Raw first-match lookup with no fallback.
    pub fn match_entry(&self, path: &str) -> Option<(&RouteEntry, PathParams)> {
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.matches(path).map(|params| (entry, params)))
    }

    /// Resolve a path to its route. Total: unmatched paths take the single
    /// fallback hop, which cannot miss because the target was validated when
    /// the table was built.
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        if let Some((entry, params)) = self.match_entry(path) {
            return Resolved {
                entry,
                params,
                redirected_from: None,
            };
        }

        tracing::debug!(path, fallback = %self.fallback_to, "unmatched path, taking fallback");
        let (entry, params) = self
            .match_entry(&self.fallback_to)
            .unwrap_or_else(|| unreachable!("fallback target validated at build time"));
        Resolved {
            entry,
            params,
            redirected_from: Some(path.to_string()),
        }
    }
}

/// Builder for [`RouteTable`]. Sealed by [`RouteTableBuilder::otherwise`],
/// which supplies the mandatory fallback.
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    /// Register a route. Declaration order is match order.
    pub fn when(mut self, pattern: &str, template: &str, controller: &str) -> Self {
        self.entries.push(RouteEntry {
            pattern: PathPattern::parse(pattern),
            template: template.to_string(),
            controller: controller.to_string(),
        });
        self
    }

    /// Seal the table with the fallback redirect target. Fails if the target
    /// would not itself match a registered entry, since resolution could then
    /// never terminate.
    pub fn otherwise(self, redirect_to: &str) -> Result<RouteTable, RouteError> {
        let table = RouteTable {
            entries: self.entries,
            fallback_to: redirect_to.to_string(),
        };
        if table.match_entry(redirect_to).is_none() {
            return Err(RouteError::UnreachableFallback(redirect_to.to_string()));
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::builder()
            .when("/components/", "partials/components.html", "componentsCtrl")
            .when(
                "/allocation/client/",
                "partials/allocationclient.html",
                "allocationClientCtrl",
            )
            .otherwise("/components/")
            .unwrap()
    }

    #[test]
    fn registered_path_resolves_to_its_entry() {
        let table = table();

        let resolved = table.resolve("/allocation/client/");
        assert_eq!(resolved.entry.controller, "allocationClientCtrl");
        assert_eq!(resolved.entry.template, "partials/allocationclient.html");
        assert!(resolved.redirected_from.is_none());
    }

    #[test]
    fn unmatched_path_takes_fallback() {
        let table = table();

        let resolved = table.resolve("/unknown/path/");
        assert_eq!(resolved.entry.controller, "componentsCtrl");
        assert_eq!(
            resolved.redirected_from.as_deref(),
            Some("/unknown/path/")
        );
    }

    #[test]
    fn first_matching_entry_wins() {
        let table = RouteTable::builder()
            .when("/report/:kind/", "partials/first.html", "firstCtrl")
            .when("/report/monthly/", "partials/second.html", "secondCtrl")
            .otherwise("/report/monthly/")
            .unwrap();

        // The placeholder entry is declared first, so it shadows the literal.
        let resolved = table.resolve("/report/monthly/");
        assert_eq!(resolved.entry.controller, "firstCtrl");
        assert_eq!(
            resolved.params.get("kind").map(String::as_str),
            Some("monthly")
        );
    }

    #[test]
    fn fallback_must_match_a_registered_route() {
        let result = RouteTable::builder()
            .when("/components/", "partials/components.html", "componentsCtrl")
            .otherwise("/missing/");

        assert!(matches!(result, Err(RouteError::UnreachableFallback(t)) if t == "/missing/"));
    }

    #[test]
    fn template_url_joins_static_prefix() {
        let table = table();
        let entry = &table.entries()[0];

        assert_eq!(
            entry.template_url("/static/"),
            "/static/partials/components.html"
        );
    }
}
