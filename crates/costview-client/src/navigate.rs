// ABOUTME: Navigation capability used by the auth-redirect interceptor.
// ABOUTME: replace() is a history-replacing full navigation, fire-and-forget.

/// Control over the client's location. `replace` swaps the current history
/// entry for the new location, so the failed page cannot be reached with
/// back-navigation. Implementations must be stateless with respect to
/// requests: the interceptor may call `replace` from concurrently completing
/// responses.
pub trait Navigator: Send + Sync {
    /// Navigate to `location`, replacing the current history entry.
    fn replace(&self, location: &str);
}

/// A navigator that only records the navigation in the log. Host embeddings
/// that own a real window supply their own implementation; the standalone
/// binary uses this one.
#[derive(Debug, Clone, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn replace(&self, location: &str) {
        tracing::info!(location, "navigation requested (history replace)");
    }
}
