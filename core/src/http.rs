//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and transport outcomes are plain data. The core builds
//! `HttpRequest` values and interprets `TransportOutcome` values; executing
//! the request is the job of a [`Transport`].
//!
//! `TransportOutcome` keeps the three independent pieces a network call can
//! yield (body bytes, response metadata, error) as separate options instead
//! of collapsing them into a `Result`. The interpreters in
//! [`crate::response`] depend on seeing every combination, including a body
//! that arrived alongside an error.

use std::future::Future;

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is the exact string the builder produced. It has been checked to
/// parse as an absolute URL but is never normalized or re-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value, ignoring ASCII case in the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status line and headers of a received response, without the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl ResponseMeta {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Everything a transport observed while executing one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOutcome {
    pub body: Option<Vec<u8>>,
    pub response: Option<ResponseMeta>,
    pub error: Option<TransportError>,
}

impl TransportOutcome {
    /// A response arrived and its body was read in full.
    pub fn completed(response: ResponseMeta, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: Some(body.into()),
            response: Some(response),
            error: None,
        }
    }

    /// The request failed before any response was observed.
    pub fn failed(error: TransportError) -> Self {
        Self {
            body: None,
            response: None,
            error: Some(error),
        }
    }
}

/// Executes one `HttpRequest` and reports what happened.
///
/// Implementations resolve exactly once per call and never retry. Dropping
/// the returned future is the only form of cancellation.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = TransportOutcome> + Send;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = TransportOutcome> + Send {
        (**self).execute(request)
    }
}
