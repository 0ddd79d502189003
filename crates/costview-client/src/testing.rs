// ABOUTME: Test utilities for costview-client: stub transports and a recording navigator.
// ABOUTME: Used in unit and smoke tests to drive the shell without a real backend or window.

use std::sync::Mutex;

use async_trait::async_trait;
use http::{Request, Response, StatusCode};

use crate::navigate::Navigator;
use crate::transport::{Transport, TransportError};

/// A navigator that records every `replace` call instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    replacements: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// The locations passed to `replace`, in call order.
    pub fn replacements(&self) -> Vec<String> {
        self.replacements.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, location: &str) {
        self.replacements.lock().unwrap().push(location.to_string());
    }
}

/// A transport that answers every request with a canned status and empty body.
#[derive(Debug, Clone)]
pub struct StaticTransport {
    status: StatusCode,
}

impl StaticTransport {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn send(&self, _req: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, TransportError> {
        let mut response = Response::new(Vec::new());
        *response.status_mut() = self.status;
        Ok(response)
    }
}

/// A transport that records each outgoing request's method, path, and headers
/// before answering 200. Lets tests assert on what the middleware stack
/// actually sent.
#[derive(Debug, Default)]
pub struct CaptureTransport {
    requests: Mutex<Vec<CapturedRequest>>,
}

/// The parts of a request worth asserting on in tests.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: http::Method,
    pub path: String,
    pub headers: http::HeaderMap,
}

impl CaptureTransport {
    /// The requests seen so far, in send order.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for CaptureTransport {
    async fn send(&self, req: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, TransportError> {
        self.requests.lock().unwrap().push(CapturedRequest {
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            headers: req.headers().clone(),
        });
        Ok(Response::new(Vec::new()))
    }
}
