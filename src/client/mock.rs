//! Scripted transport for tests
//!
//! Responses are served in FIFO order and every request is recorded, so a
//! test can assert both what a view rendered and exactly which calls it made.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse, ClientError, HttpTransport};

#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ClientError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a JSON body
    pub fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push_response(ApiResponse::new(status, body.to_string()))
    }

    /// Queue a response with a raw body
    pub fn push_raw(&self, status: u16, body: &str) -> &Self {
        self.push_response(ApiResponse::new(status, body))
    }

    pub fn push_response(&self, response: ApiResponse) -> &Self {
        self.lock_responses().push_back(Ok(response));
        self
    }

    /// Queue a failure with no response (connection refused etc.)
    pub fn push_error(&self, error: ClientError) -> &Self {
        self.lock_responses().push_back(Err(error));
        self
    }

    /// All requests sent so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    /// Scripted responses not consumed yet
    pub fn pending(&self) -> usize {
        self.lock_responses().len()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<ApiResponse, ClientError>>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let description = format!("{} {}", request.method, request.path_and_query());
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
        self.lock_responses().pop_front().unwrap_or_else(|| {
            Err(ClientError::Transport(format!(
                "no scripted response for {}",
                description
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_in_order_and_records() {
        let mock = MockTransport::new();
        mock.push_raw(200, "first").push_raw(404, "second");

        let a = mock.send(ApiRequest::get("/a")).await.unwrap();
        let b = mock.send(ApiRequest::delete("/b")).await.unwrap();

        assert_eq!(a.body, "first");
        assert_eq!(b.status, 404);
        assert_eq!(mock.request_count(), 2);
        assert_eq!(mock.last_request().unwrap().path, "/b");
        assert_eq!(mock.pending(), 0);
    }

    #[tokio::test]
    async fn test_unscripted_request_is_transport_error() {
        let mock = MockTransport::new();
        let result = mock.send(ApiRequest::get("/api/urls")).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
        assert_eq!(mock.request_count(), 1);
    }
}
