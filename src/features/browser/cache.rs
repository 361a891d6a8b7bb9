use std::collections::BTreeMap;

use crate::features::countries::dtos::CountrySummaryDto;

/// Page size the browser requests
pub const BROWSER_PAGE_SIZE: usize = 40;

/// Append-only cache of fetched pages, keyed by page number.
///
/// Paging stops for good once a page comes back shorter than the page size.
#[derive(Debug, Clone)]
pub struct PageCache {
    page_size: usize,
    pages: BTreeMap<usize, Vec<CountrySummaryDto>>,
    has_more: bool,
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(BROWSER_PAGE_SIZE)
    }
}

impl PageCache {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages: BTreeMap::new(),
            has_more: true,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Next page to request (1-based)
    pub fn next_page(&self) -> usize {
        self.pages.keys().next_back().map_or(1, |last| last + 1)
    }

    /// Store a fetched page. Returns `false` when the page was already cached.
    pub fn insert(&mut self, page: usize, countries: Vec<CountrySummaryDto>) -> bool {
        if self.pages.contains_key(&page) {
            return false;
        }
        if countries.len() < self.page_size {
            self.has_more = false;
        }
        self.pages.insert(page, countries);
        true
    }

    pub fn loaded_pages(&self) -> usize {
        self.pages.len()
    }

    /// Every cached country, in page order
    pub fn countries(&self) -> Vec<&CountrySummaryDto> {
        self.pages.values().flatten().collect()
    }

    pub fn len(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(prefix: &str, count: usize) -> Vec<CountrySummaryDto> {
        (0..count)
            .map(|i| {
                serde_json::from_value(serde_json::json!({"name": format!("{}{}", prefix, i)}))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_full_pages_keep_paging() {
        let mut cache = PageCache::new(2);
        assert_eq!(cache.next_page(), 1);
        assert!(cache.is_empty());

        assert!(cache.insert(1, summaries("a", 2)));
        assert!(cache.has_more());
        assert_eq!(cache.next_page(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_short_page_stops_paging() {
        let mut cache = PageCache::new(2);
        cache.insert(1, summaries("a", 2));
        cache.insert(2, summaries("b", 1));

        assert!(!cache.has_more());
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.loaded_pages(), 2);
    }

    #[test]
    fn test_duplicate_page_is_ignored() {
        let mut cache = PageCache::new(2);
        cache.insert(1, summaries("a", 2));

        assert!(!cache.insert(1, summaries("x", 2)));
        assert_eq!(cache.len(), 2);
        assert_eq!(
            serde_json::to_value(cache.countries()[0]).unwrap()["name"],
            "a0"
        );
    }

    #[test]
    fn test_countries_come_back_in_page_order() {
        let mut cache = PageCache::new(1);
        cache.insert(2, summaries("second", 1));
        cache.insert(1, summaries("first", 1));

        let names: Vec<String> = cache
            .countries()
            .into_iter()
            .map(|c| serde_json::to_value(c).unwrap()["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["first0", "second0"]);
    }

    #[test]
    fn test_default_page_size() {
        assert_eq!(PageCache::default().page_size(), 40);
    }
}
