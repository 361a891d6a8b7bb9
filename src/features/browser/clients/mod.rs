mod countries_api;

pub use countries_api::CountriesApiClient;

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Failed to reach backend: {0}")]
    Request(String),

    #[error("Backend returned HTTP {0}")]
    Status(u16),

    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}
