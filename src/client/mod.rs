//! Client layer for the shortening backend
//!
//! Views never talk HTTP themselves; they call [`LinkClient`], which speaks
//! the backend's REST contract through an injected [`HttpTransport`].
//!
//! # Architecture
//!
//! ```text
//! View → LinkClient ──→ HttpTransport ──→ UreqTransport (production)
//!                                     └→ MockTransport (tests)
//! ```
//!
//! # Error Policy
//!
//! - No response at all → `ClientError::Transport`
//! - Non-2xx response → `ClientError::Api`, carrying the body's `error` field if any
//! - 2xx with an unexpected body → `ClientError::Decode`
//!
//! Views only ever display [`ClientError::user_message`].

mod link_client;
mod mock;
mod transport;

pub use link_client::{LinkClient, PAGE_SIZE};
pub use mock::MockTransport;
pub use transport::UreqTransport;

use std::fmt;

use async_trait::async_trait;

// ============ ClientError ============

/// Errors from the client layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout, ...)
    Transport(String),
    /// Server answered with a non-2xx status
    Api { status: u16, message: Option<String> },
    /// Server answered 2xx but the body did not match the contract
    Decode(String),
    /// The blocking worker running the request failed
    Runtime(String),
}

impl ClientError {
    /// Server-provided message, if the failure came with one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// The string a view shows: the server's `error` verbatim, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "Transport error: {}", e),
            ClientError::Api {
                status,
                message: Some(message),
            } => write!(f, "HTTP {}: {}", status, message),
            ClientError::Api {
                status,
                message: None,
            } => write!(f, "HTTP {}", status),
            ClientError::Decode(e) => write!(f, "Unexpected response body: {}", e),
            ClientError::Runtime(e) => write!(f, "Request worker failed: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

// ============ Transport abstraction ============

/// HTTP methods used by the backend contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path, already percent-encoded (e.g. `/api/urls/abc123`)
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Path plus encoded query string
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

/// A raw response: status plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the backend.
///
/// A transport only reports failure when no response was obtained; non-2xx
/// statuses come back as ordinary [`ApiResponse`]s.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Join a base URL and a path-and-query without doubling slashes
pub(crate) fn join_url(base_url: &str, path_and_query: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path_and_query.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_error() {
        let err = ClientError::Api {
            status: 404,
            message: Some("Not found".into()),
        };
        assert_eq!(err.user_message("Failed to load URL data"), "Not found");
    }

    #[test]
    fn test_user_message_fallback_without_error_field() {
        let err = ClientError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
    }

    #[test]
    fn test_user_message_fallback_on_empty_error_field() {
        let err = ClientError::Api {
            status: 422,
            message: Some(String::new()),
        };
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
    }

    #[test]
    fn test_user_message_fallback_on_transport_error() {
        let err = ClientError::Transport("connection refused".into());
        assert_eq!(err.user_message("Failed to load URLs"), "Failed to load URLs");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_client_error_display() {
        let err = ClientError::Api {
            status: 404,
            message: Some("Not found".into()),
        };
        assert_eq!(format!("{}", err), "HTTP 404: Not found");
        assert_eq!(
            format!("{}", ClientError::Api { status: 502, message: None }),
            "HTTP 502"
        );
    }

    #[test]
    fn test_path_and_query() {
        let req = ApiRequest::get("/api/urls")
            .with_query("page", 2)
            .with_query("per_page", 10);
        assert_eq!(req.path_and_query(), "/api/urls?page=2&per_page=10");
        assert_eq!(ApiRequest::get("/api/urls/x").path_and_query(), "/api/urls/x");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000/", "/api/urls"),
            "http://localhost:3000/api/urls"
        );
        assert_eq!(
            join_url("http://localhost:3000", "api/urls?page=1"),
            "http://localhost:3000/api/urls?page=1"
        );
        assert_eq!(
            join_url("https://host/prefix", "/api/urls"),
            "https://host/prefix/api/urls"
        );
    }

    #[test]
    fn test_response_success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(301, "").is_success());
        assert!(!ApiResponse::new(404, "").is_success());
    }
}
