use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::error::{FetchError, OctofitResult};
use crate::models::{Endpoint, RawResponse};

/// Issues the GET for one fetch cycle. No retries and no auth headers.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> OctofitResult<Self> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> OctofitResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    pub async fn fetch_collection(&self, endpoint: &Endpoint) -> Result<RawResponse, FetchError> {
        tracing::info!(%endpoint, "fetching collection");

        let response = self
            .client
            .get(endpoint.as_str())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%endpoint, error = %e, "request failed");
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%endpoint, status = status.as_u16(), "non-success status");
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(%endpoint, error = %e, "failed to read response body");
            FetchError::Network(e.to_string())
        })?;

        let raw = RawResponse::from_slice(&body).map_err(|e| {
            tracing::error!(%endpoint, error = %e, "response body is not valid JSON");
            FetchError::Decode
        })?;

        tracing::debug!(%endpoint, shape = raw.shape(), "decoded response");
        Ok(raw)
    }
}
