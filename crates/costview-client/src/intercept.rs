// ABOUTME: Auth-failure interceptor for the outbound HTTP stack.
// ABOUTME: On a 401/403 response, navigates to the login path and propagates the failure unchanged.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use http::{Request, Response, StatusCode};
use tower::{Layer, Service};

use crate::navigate::Navigator;

/// A tower Layer that watches every response for an authorization failure.
#[derive(Clone)]
pub struct AuthRedirectLayer {
    navigator: Arc<dyn Navigator>,
    login_path: Arc<str>,
}

impl AuthRedirectLayer {
    /// Create a layer that redirects to `login_path` via `navigator` when
    /// the backend answers 401 or 403.
    pub fn new(navigator: Arc<dyn Navigator>, login_path: &str) -> Self {
        Self {
            navigator,
            login_path: Arc::from(login_path),
        }
    }
}

impl<S> Layer<S> for AuthRedirectLayer {
    type Service = AuthRedirect<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthRedirect {
            inner,
            navigator: Arc::clone(&self.navigator),
            login_path: Arc::clone(&self.login_path),
        }
    }
}

/// The middleware service. Holds only shared immutable configuration, so
/// concurrently completing responses are handled independently; each 401/403
/// response triggers exactly one navigation.
#[derive(Clone)]
pub struct AuthRedirect<S> {
    inner: S,
    navigator: Arc<dyn Navigator>,
    login_path: Arc<str>,
}

impl<S, ReqB, ResB> Service<Request<ReqB>> for AuthRedirect<S>
where
    S: Service<Request<ReqB>, Response = Response<ResB>> + Send + 'static,
    S::Future: Send + 'static,
    ReqB: Send + 'static,
    ResB: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqB>) -> Self::Future {
        let navigator = Arc::clone(&self.navigator);
        let login_path = Arc::clone(&self.login_path);
        let future = self.inner.call(req);

        Box::pin(async move {
            let result = future.await;
            if let Ok(resp) = &result {
                let status = resp.status();
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                    tracing::warn!(%status, login = %login_path, "session rejected, redirecting to login");
                    navigator.replace(&login_path);
                }
            }
            // The failed response still reaches the caller so its own error
            // handling runs after the redirect is issued.
            result
        })
    }
}
