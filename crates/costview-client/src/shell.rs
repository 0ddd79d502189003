// ABOUTME: The composed costview shell: route table plus the layered outbound HTTP service.
// ABOUTME: Built once by an explicit constructor from config and capability implementations.

use std::sync::Arc;

use http::header::{HeaderName, HeaderValue};
use http::{Request, Response};
use tower::util::BoxCloneService;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::set_header::SetRequestHeaderLayer;

use costview_core::{catalog, Resolved, RouteEntry, RouteTable};

use crate::config::ShellConfig;
use crate::cookies::CookieStore;
use crate::intercept::AuthRedirectLayer;
use crate::navigate::Navigator;
use crate::session::{csrf_token_from, CsrfHeaderLayer};
use crate::transport::{Transport, TransportError, TransportService};

/// Every request the shell sends identifies itself as an XHR call.
const REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// The client application shell. Owns the route table for the configured
/// build variant and the outbound HTTP stack with session headers and the
/// auth-redirect interceptor already applied.
pub struct Shell {
    routes: RouteTable,
    static_url: String,
    http: BoxCloneService<Request<Vec<u8>>, Response<Vec<u8>>, TransportError>,
}

impl Shell {
    /// Compose the shell. Reads the anti-forgery cookie once; the resulting
    /// header set is fixed for the shell's lifetime.
    pub fn new(
        config: &ShellConfig,
        cookies: &dyn CookieStore,
        navigator: Arc<dyn Navigator>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let routes = if config.admin_views {
            catalog::full()
        } else {
            catalog::standard()
        };

        let csrf_token = csrf_token_from(cookies, &config.csrf_cookie);
        let svc = ServiceBuilder::new()
            .layer(AuthRedirectLayer::new(navigator, &config.login_path))
            .layer(SetRequestHeaderLayer::overriding(
                REQUESTED_WITH,
                HeaderValue::from_static("XMLHttpRequest"),
            ))
            .layer(CsrfHeaderLayer::new(csrf_token))
            .service(TransportService::new(transport));

        Self {
            routes,
            static_url: config.static_url.clone(),
            http: BoxCloneService::new(svc),
        }
    }

    /// The active route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Resolve a navigation path to its route. Total; unregistered paths
    /// land on the fallback view.
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        let resolved = self.routes.resolve(path);
        tracing::debug!(
            path,
            controller = %resolved.entry.controller,
            "resolved route"
        );
        resolved
    }

    /// The full template URL for a route entry under the configured static
    /// prefix.
    pub fn template_url(&self, entry: &RouteEntry) -> String {
        entry.template_url(&self.static_url)
    }

    /// Send a request through the shell's HTTP stack.
    pub async fn send(
        &self,
        req: Request<Vec<u8>>,
    ) -> Result<Response<Vec<u8>>, TransportError> {
        self.http.clone().oneshot(req).await
    }
}
