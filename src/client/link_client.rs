//! Short link API client

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{ApiRequest, ApiResponse, ClientError, HttpTransport, UreqTransport};
use crate::config::ApiConfig;
use crate::models::{CreateLinkRequest, CreateLinkResponse, CreatedLink, ErrorBody, LinkPage, ShortLink};

/// Fixed page size of the list endpoint
pub const PAGE_SIZE: u32 = 10;

const URLS_PATH: &str = "/api/urls";

/// Link operations client.
///
/// Cheap to clone; all clones share one transport.
#[derive(Clone)]
pub struct LinkClient {
    transport: Arc<dyn HttpTransport>,
}

impl LinkClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Client over the production transport
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(Arc::new(UreqTransport::new(config)))
    }

    /// `POST /api/urls`
    pub async fn create_link(&self, original_url: &str) -> Result<CreatedLink, ClientError> {
        let body = serde_json::to_value(CreateLinkRequest::new(original_url))?;
        let response = self.call(ApiRequest::post(URLS_PATH, body)).await?;
        let raw: CreateLinkResponse = decode(&response)?;
        raw.into_created().ok_or_else(|| {
            ClientError::Decode("create response carries neither short_url nor shortened_link".into())
        })
    }

    /// `GET /api/urls?page=N&per_page=10`
    pub async fn list_links(&self, page: u32) -> Result<LinkPage, ClientError> {
        let request = ApiRequest::get(URLS_PATH)
            .with_query("page", page)
            .with_query("per_page", PAGE_SIZE);
        let response = self.call(request).await?;
        decode(&response)
    }

    /// `GET /api/urls/:slug`
    pub async fn get_link(&self, slug: &str) -> Result<ShortLink, ClientError> {
        let response = self.call(ApiRequest::get(link_path(slug))).await?;
        decode(&response)
    }

    /// `DELETE /api/urls/:slug`
    pub async fn delete_link(&self, slug: &str) -> Result<(), ClientError> {
        self.call(ApiRequest::delete(link_path(slug))).await?;
        Ok(())
    }

    /// Send a request and turn non-2xx statuses into [`ClientError::Api`]
    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let label = format!("{} {}", request.method, request.path_and_query());
        debug!("Sending {}", label);
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|b| b.error);
        warn!("{} returned {} ({:?})", label, response.status, message);
        Err(ClientError::Api {
            status: response.status,
            message,
        })
    }
}

fn link_path(slug: &str) -> String {
    format!("{}/{}", URLS_PATH, urlencoding::encode(slug))
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ClientError> {
    Ok(serde_json::from_str(&response.body)?)
}
