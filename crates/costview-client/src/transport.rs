// ABOUTME: Transport seam for outbound HTTP, with a reqwest-backed production impl.
// ABOUTME: TransportService adapts the trait object into a tower Service for layering.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use http::{Request, Response};
use thiserror::Error;
use tower::Service;

/// Errors surfaced by the transport. Non-2xx statuses are responses, not
/// errors; only failures to produce a response at all land here.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Sends one HTTP request and returns the response. The shell's middleware
/// stack wraps this; implementations carry no per-request state and may be
/// driven concurrently.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, req: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, TransportError>;
}

/// The production transport. Relative request paths resolve against the
/// configured backend origin, mirroring how the in-page client issues
/// same-origin requests.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl ReqwestTransport {
    /// Create a transport whose relative paths resolve against `base`.
    pub fn new(base: reqwest::Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn resolve_url(&self, uri: &http::Uri) -> Result<reqwest::Url, TransportError> {
        if uri.scheme().is_some() {
            return reqwest::Url::parse(&uri.to_string())
                .map_err(|_| TransportError::InvalidUrl(uri.to_string()));
        }
        let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        self.base
            .join(path)
            .map_err(|_| TransportError::InvalidUrl(uri.to_string()))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, req: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, TransportError> {
        let (parts, body) = req.into_parts();
        let url = self.resolve_url(&parts.uri)?;

        let mut request = reqwest::Request::new(parts.method, url);
        *request.headers_mut() = parts.headers;
        *request.body_mut() = Some(reqwest::Body::from(body));

        let resp = self.client.execute(request).await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = resp.bytes().await?;

        let mut response = Response::new(bytes.to_vec());
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// Adapts an `Arc<dyn Transport>` into a tower [`Service`] so the session
/// header and auth-redirect layers can stack on top of it.
#[derive(Clone)]
pub struct TransportService {
    transport: Arc<dyn Transport>,
}

impl TransportService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

impl Service<Request<Vec<u8>>> for TransportService {
    type Response = Response<Vec<u8>>;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Vec<u8>>) -> Self::Future {
        let transport = Arc::clone(&self.transport);
        Box::pin(async move { transport.send(req).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticTransport;
    use http::StatusCode;
    use tower::ServiceExt;

    #[test]
    fn relative_paths_resolve_against_base() {
        let base = reqwest::Url::parse("http://127.0.0.1:8000").unwrap();
        let transport = ReqwestTransport::new(base);

        let url = transport
            .resolve_url(&"/allocation/client/".parse().unwrap())
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/allocation/client/");
    }

    #[test]
    fn query_strings_survive_resolution() {
        let base = reqwest::Url::parse("http://127.0.0.1:8000").unwrap();
        let transport = ReqwestTransport::new(base);

        let url = transport
            .resolve_url(&"/components/?month=3".parse().unwrap())
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/components/?month=3");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let base = reqwest::Url::parse("http://127.0.0.1:8000").unwrap();
        let transport = ReqwestTransport::new(base);

        let url = transport
            .resolve_url(&"https://other.example.com/api/".parse().unwrap())
            .unwrap();
        assert_eq!(url.as_str(), "https://other.example.com/api/");
    }

    #[tokio::test]
    async fn transport_service_delegates_to_transport() {
        let svc = TransportService::new(Arc::new(StaticTransport::new(StatusCode::OK)));

        let resp = svc
            .oneshot(Request::get("/components/").body(Vec::new()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
