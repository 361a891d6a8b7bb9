use crate::features::browser::cache::PageCache;
use crate::features::browser::clients::{BrowserError, CountriesApiClient};
use crate::features::browser::view::BrowserFilter;
use crate::features::countries::dtos::{CountryDetailDto, CountrySummaryDto};

/// Incremental country list: fetch the next page on demand, filter locally
pub struct CountryBrowser {
    client: CountriesApiClient,
    cache: PageCache,
}

impl CountryBrowser {
    pub fn new(client: CountriesApiClient) -> Self {
        Self::with_cache(client, PageCache::default())
    }

    pub fn with_cache(client: CountriesApiClient, cache: PageCache) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    /// Fetch the next page if there is one. Returns how many countries it added.
    pub async fn load_more(&mut self) -> Result<usize, BrowserError> {
        if !self.cache.has_more() {
            return Ok(0);
        }

        let page = self.cache.next_page();
        let countries = self.client.fetch_page(page, self.cache.page_size()).await?;
        let added = countries.len();
        self.cache.insert(page, countries);

        tracing::debug!(
            "Loaded page {} ({} countries, {} cached)",
            page,
            added,
            self.cache.len()
        );
        Ok(added)
    }

    /// Load up to `pages` more pages, stopping early once the list is exhausted
    pub async fn load_pages(&mut self, pages: usize) -> Result<(), BrowserError> {
        for _ in 0..pages {
            if !self.cache.has_more() {
                break;
            }
            self.load_more().await?;
        }
        Ok(())
    }

    pub fn visible(&self, filter: &BrowserFilter) -> Vec<&CountrySummaryDto> {
        filter.visible(&self.cache.countries())
    }

    pub async fn country(&self, code: &str) -> Result<CountryDetailDto, BrowserError> {
        self.client.fetch_country(code).await
    }
}
