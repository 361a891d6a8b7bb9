//! Upstream countries API access.

mod rest_countries;

use async_trait::async_trait;

use crate::features::countries::models::{UpstreamCountry, UpstreamCountryDetail};

pub use rest_countries::RestCountriesClient;

/// Anything that can answer the two upstream queries the service needs
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Every country, in the flat list shape
    async fn fetch_all(&self) -> Result<Vec<UpstreamCountry>, UpstreamError>;

    /// One country by alpha-2 code, in the nested-name shape
    async fn fetch_by_code(&self, code: &str) -> Result<UpstreamCountryDetail, UpstreamError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Failed to reach upstream: {0}")]
    Request(String),

    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}
