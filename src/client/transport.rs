//! Production transport backed by a ureq agent
//!
//! ureq is blocking; every request is run on tokio's blocking pool so the UI
//! task only ever awaits.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use ureq::{Agent, RequestBuilder};

use super::{ApiRequest, ApiResponse, ClientError, HttpTransport, Method, join_url};
use crate::config::ApiConfig;

/// HTTP transport using a shared ureq [`Agent`]
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
    base_url: String,
    headers: Vec<(String, String)>,
}

impl UreqTransport {
    pub fn new(config: &ApiConfig) -> Self {
        // 非 2xx 也要读取响应体（{ error: ... }）
        let mut builder = Agent::config_builder().http_status_as_error(false);
        if let Some(secs) = config.timeout_secs.filter(|s| *s > 0) {
            builder = builder.timeout_global(Some(Duration::from_secs(secs)));
        }

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        headers.extend(
            config
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        Self {
            agent: builder.build().into(),
            base_url: config.base_url.clone(),
            headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn apply_headers<B>(&self, mut builder: RequestBuilder<B>) -> RequestBuilder<B> {
        for (key, value) in &self.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder
    }

    /// Run one request synchronously (call from `spawn_blocking`)
    fn execute_sync(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = join_url(&self.base_url, &request.path_and_query());

        let result = match request.method {
            Method::Get => self.apply_headers(self.agent.get(&url)).call(),
            Method::Delete => self.apply_headers(self.agent.delete(&url)).call(),
            Method::Post => {
                let builder = self.apply_headers(self.agent.post(&url));
                match &request.body {
                    Some(body) => builder.send_json(body),
                    None => builder.send_empty(),
                }
            }
        };

        let response = result.map_err(|e| {
            warn!("{} {} failed: {}", request.method, url, e);
            ClientError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| ClientError::Transport(format!("failed to read body: {}", e)))?;

        debug!("{} {} -> {}", request.method, url, status);
        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for UreqTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let transport = self.clone();
        tokio::task::spawn_blocking(move || transport.execute_sync(request))
            .await
            .unwrap_or_else(|e| {
                warn!("API request worker failed: {}", e);
                Err(ClientError::Runtime(e.to_string()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_default_accept_header_comes_first() {
        let mut cfg = config("http://127.0.0.1:3000");
        cfg.headers
            .insert("Authorization".to_string(), "Bearer t".to_string());
        let transport = UreqTransport::new(&cfg);
        assert_eq!(transport.headers[0].0, "Accept");
        assert!(
            transport
                .headers
                .iter()
                .any(|(k, v)| k == "Authorization" && v == "Bearer t")
        );
    }

    /// Nothing listens on a TEST-NET address; the call must fail with a
    /// transport error rather than panic
    #[tokio::test]
    #[ignore]
    async fn test_unreachable_backend_is_transport_error() {
        let mut cfg = config("http://192.0.2.1");
        cfg.timeout_secs = Some(1);
        let transport = UreqTransport::new(&cfg);
        let result = transport.send(ApiRequest::get("/api/urls")).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
