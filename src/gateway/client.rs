//! HTTP client for the catalog service.
//!
//! The gateway talks to the catalog through the [`CatalogApi`] seam so the
//! proxy and HTML handlers can be exercised against a mock. The real
//! implementation is a thin reqwest wrapper that relays the upstream status
//! and raw JSON body without interpretation.

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;

/// Response relayed from the catalog service
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Human-readable detail extracted from a catalog error body
    pub fn detail(&self) -> String {
        match self.body.get("detail") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "Unknown catalog error".to_string(),
        }
    }
}

/// The catalog service could not be reached at all
#[derive(Debug, Clone, thiserror::Error)]
#[error("catalog service unreachable: {0}")]
pub struct CatalogUnreachable(pub String);

impl From<reqwest::Error> for CatalogUnreachable {
    fn from(e: reqwest::Error) -> Self {
        Self(e.to_string())
    }
}

/// Seam between the gateway and the catalog service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_books(&self) -> Result<UpstreamResponse, CatalogUnreachable>;
    async fn get_book(&self, id: i64) -> Result<UpstreamResponse, CatalogUnreachable>;
    async fn create_book(&self, payload: &Value) -> Result<UpstreamResponse, CatalogUnreachable>;
    async fn update_book(&self, id: i64, payload: &Value)
        -> Result<UpstreamResponse, CatalogUnreachable>;
    async fn delete_book(&self, id: i64) -> Result<UpstreamResponse, CatalogUnreachable>;
}

/// reqwest-backed catalog client
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Capture status and body as-is. A body that is not JSON (or is empty)
    /// relays as null rather than being misreported as a connection failure.
    async fn relay(response: reqwest::Response) -> UpstreamResponse {
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        UpstreamResponse { status, body }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_books(&self) -> Result<UpstreamResponse, CatalogUnreachable> {
        let response = self
            .client
            .get(format!("{}/books", self.base_url))
            .send()
            .await?;
        Ok(Self::relay(response).await)
    }

    async fn get_book(&self, id: i64) -> Result<UpstreamResponse, CatalogUnreachable> {
        let response = self
            .client
            .get(format!("{}/books/{}", self.base_url, id))
            .send()
            .await?;
        Ok(Self::relay(response).await)
    }

    async fn create_book(&self, payload: &Value) -> Result<UpstreamResponse, CatalogUnreachable> {
        let response = self
            .client
            .post(format!("{}/books", self.base_url))
            .json(payload)
            .send()
            .await?;
        Ok(Self::relay(response).await)
    }

    async fn update_book(
        &self,
        id: i64,
        payload: &Value,
    ) -> Result<UpstreamResponse, CatalogUnreachable> {
        let response = self
            .client
            .put(format!("{}/books/{}", self.base_url, id))
            .json(payload)
            .send()
            .await?;
        Ok(Self::relay(response).await)
    }

    async fn delete_book(&self, id: i64) -> Result<UpstreamResponse, CatalogUnreachable> {
        let response = self
            .client
            .delete(format!("{}/books/{}", self.base_url, id))
            .send()
            .await?;
        Ok(Self::relay(response).await)
    }
}
