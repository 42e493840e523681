use crate::domain::model::RawApod;
use crate::domain::ports::{ApodSource, ConfigProvider};
use crate::utils::error::{Result, UpstreamError};
use async_trait::async_trait;
use reqwest::Client;

/// HTTP client for the APOD REST endpoint. Not `Debug`: it holds the API key.
#[derive(Clone)]
pub struct NasaClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl NasaClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(UpstreamError::from)?;

        Ok(Self {
            client,
            endpoint: config.upstream_endpoint().to_string(),
            api_key: config.api_key().to_string(),
        })
    }
}

#[async_trait]
impl ApodSource for NasaClient {
    async fn fetch_apod(&self) -> Result<RawApod> {
        tracing::debug!("Making APOD request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = response.status();
        tracing::debug!("APOD response status: {}", status);
        if !status.is_success() {
            return Err(UpstreamError::Status { status }.into());
        }

        let body = response.text().await.map_err(UpstreamError::from)?;
        let raw = serde_json::from_str(&body).map_err(UpstreamError::from)?;
        Ok(raw)
    }
}
