// ABOUTME: Session credential attachment: the anti-forgery token header layer.
// ABOUTME: The token is read from cookies once at bootstrap and is immutable for the session.

use http::header::{HeaderName, HeaderValue};
use http::Request;
use tower::{Layer, Service};

use crate::cookies::CookieStore;

/// Header carrying the anti-forgery token, matching the backend's CSRF check.
pub const CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrftoken");

/// Read the anti-forgery token from the cookie jar once. A missing cookie
/// yields None and the header is omitted for the whole session. A cookie
/// value that cannot be carried in a header is treated the same way.
pub fn csrf_token_from(cookies: &dyn CookieStore, cookie_name: &str) -> Option<HeaderValue> {
    let token = cookies.get(cookie_name)?;
    match HeaderValue::from_str(&token) {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(cookie = cookie_name, "anti-forgery cookie is not a valid header value, omitting header");
            None
        }
    }
}

/// A tower Layer that attaches the session's anti-forgery token, when one
/// was present at bootstrap, to every outbound request.
#[derive(Clone)]
pub struct CsrfHeaderLayer {
    token: Option<HeaderValue>,
}

impl CsrfHeaderLayer {
    pub fn new(token: Option<HeaderValue>) -> Self {
        Self { token }
    }
}

impl<S> Layer<S> for CsrfHeaderLayer {
    type Service = CsrfHeader<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CsrfHeader {
            inner,
            token: self.token.clone(),
        }
    }
}

/// The middleware service. Pure request decoration; response and error pass
/// through untouched.
#[derive(Clone)]
pub struct CsrfHeader<S> {
    inner: S,
    token: Option<HeaderValue>,
}

impl<S, B> Service<Request<B>> for CsrfHeader<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        if let Some(token) = &self.token {
            req.headers_mut().insert(CSRF_HEADER, token.clone());
        }
        self.inner.call(req)
    }
}
