use crate::features::browser::clients::BrowserError;
use crate::features::countries::dtos::{CountryDetailDto, CountrySummaryDto};

/// Client for this service's own countries endpoints
pub struct CountriesApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl CountriesApiClient {
    /// `backend_url` is the server root, e.g. `http://localhost:3001`
    pub fn new(backend_url: &str) -> Self {
        Self {
            base_url: format!("{}/countries", backend_url.trim_end_matches('/')),
            http_client: reqwest::Client::new(),
        }
    }

    /// One page of country summaries
    pub async fn fetch_page(
        &self,
        page: usize,
        limit: usize,
    ) -> Result<Vec<CountrySummaryDto>, BrowserError> {
        tracing::debug!("Fetching countries page {} (limit {})", page, limit);

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("_page", page), ("_limit", limit)])
            .send()
            .await
            .map_err(|e| BrowserError::Request(e.to_string()))?;

        Self::decode(response).await
    }

    pub async fn fetch_country(&self, code: &str) -> Result<CountryDetailDto, BrowserError> {
        let url = format!("{}/{}", self.base_url, urlencoding::encode(code));
        tracing::debug!("Fetching country details: {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| BrowserError::Request(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BrowserError> {
        if !response.status().is_success() {
            return Err(BrowserError::Status(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| BrowserError::Decode(e.to_string()))
    }
}
