//! HTTP messages as plain data.
//!
//! # Design
//! The client core builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network — a `Transport` executes the
//! actual round-trip. Keeping the messages as plain owned data makes every
//! request shape assertable in unit tests without a server.

/// HTTP method for a request. Only the methods the board API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `BoardClient::build_*` methods and handed to a `Transport` for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then passed
/// to `BoardClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
