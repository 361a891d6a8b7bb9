use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::core::config::UpstreamConfig;
use crate::features::countries::clients::{CountrySource, UpstreamError};
use crate::features::countries::models::{UpstreamCountry, UpstreamCountryDetail};

/// Client for the REST Countries API.
///
/// One pooled `reqwest::Client` is shared by every request; connections are
/// kept alive between requests.
pub struct RestCountriesClient {
    config: UpstreamConfig,
    http_client: reqwest::Client,
}

impl RestCountriesClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .tcp_keepalive(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| UpstreamError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        tracing::debug!("Fetching from upstream: {}", url);

        let response = self.http_client.get(url).send().await.map_err(|e| {
            tracing::error!("Upstream request failed: {}", e);
            UpstreamError::Request(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Upstream API error: HTTP {} - {}", status, body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse upstream response: {}", e);
            UpstreamError::Decode(e.to_string())
        })?;

        tracing::debug!("Upstream response received from {}", url);

        Ok(payload)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<UpstreamCountry>, UpstreamError> {
        self.get_json(&self.config.all_countries_url()).await
    }

    async fn fetch_by_code(&self, code: &str) -> Result<UpstreamCountryDetail, UpstreamError> {
        self.get_json(&self.config.country_by_code_url(code)).await
    }
}
