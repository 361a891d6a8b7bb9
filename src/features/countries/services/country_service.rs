use std::sync::Arc;

use crate::core::error::Result;
use crate::features::countries::clients::CountrySource;
use crate::features::countries::dtos::{CountryDetailDto, CountrySummaryDto};
use crate::features::countries::filter::CountryFilter;
use crate::features::countries::models::UpstreamCountry;
use crate::shared::types::PaginationQuery;

/// Composes the upstream source with projection, filtering and paging.
///
/// Holds no state of its own: every call fetches fresh data.
pub struct CountryService {
    source: Arc<dyn CountrySource>,
}

impl CountryService {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self { source }
    }

    /// One page of projected country summaries
    pub async fn list_countries(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<Vec<CountrySummaryDto>> {
        tracing::info!("Fetching all countries...");
        let countries = self.source.fetch_all().await?;
        tracing::info!("API response received ({} countries)", countries.len());

        Ok(pagination
            .paginate(countries)
            .iter()
            .map(CountrySummaryDto::from)
            .collect())
    }

    /// Detail projection of a single country
    pub async fn get_country_by_code(&self, code: &str) -> Result<CountryDetailDto> {
        tracing::info!("Fetching country by code {}...", code);
        let country = self.source.fetch_by_code(code).await?;
        tracing::info!("API response received for {}", code);

        Ok(country.into())
    }

    /// Raw upstream records whose region equals `region` exactly
    pub async fn filter_by_region(&self, region: &str) -> Result<Vec<UpstreamCountry>> {
        tracing::info!("Fetching countries by region {}...", region);
        let countries = self.source.fetch_all().await?;

        Ok(CountryFilter::by_region(region).apply(countries))
    }

    /// Raw upstream records matching every predicate in `filter`
    pub async fn search_countries(&self, filter: &CountryFilter) -> Result<Vec<UpstreamCountry>> {
        tracing::info!("Searching for countries: {:?}", filter);
        let countries = self.source.fetch_all().await?;

        let matches = filter.apply(countries);
        tracing::debug!("Search matched {} countries", matches.len());
        Ok(matches)
    }
}
