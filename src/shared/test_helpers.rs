#[cfg(test)]
use crate::features::countries::clients::{CountrySource, UpstreamError};

#[cfg(test)]
use crate::features::countries::models::{UpstreamCountry, UpstreamCountryDetail};

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Two countries in the flat list shape, as the "all countries" endpoint sends them
#[cfg(test)]
pub fn sample_countries() -> Vec<UpstreamCountry> {
    serde_json::from_value(serde_json::json!([
        {
            "name": "India",
            "flag": "🇮🇳",
            "region": "Asia",
            "alpha2Code": "IN",
            "capital": ["New Delhi"],
            "timezones": ["UTC+05:30"],
            "population": 1400000000,
            "languages": ["Hindi", "English"],
            "currencies": ["INR"]
        },
        {
            "name": "France",
            "flag": "🇫🇷",
            "region": "Europe",
            "alpha2Code": "FR",
            "capital": ["Paris"],
            "timezones": ["UTC+01:00"],
            "population": 67000000,
            "languages": ["French"],
            "currencies": ["EUR"]
        }
    ]))
    .unwrap()
}

/// India in the nested-name shape, as the by-code endpoint sends it
#[cfg(test)]
pub fn sample_country_detail() -> UpstreamCountryDetail {
    serde_json::from_value(serde_json::json!({
        "name": {"common": "India"},
        "flag": "🇮🇳",
        "population": 1400000000,
        "languages": ["Hindi", "English"],
        "region": "Asia",
        "currencies": ["INR"],
        "timezones": ["UTC+05:30"],
        "capital": ["New Delhi"]
    }))
    .unwrap()
}

/// In-memory `CountrySource` that answers with canned data or always fails
#[cfg(test)]
#[derive(Default)]
pub struct StubCountrySource {
    countries: Vec<UpstreamCountry>,
    detail: UpstreamCountryDetail,
    fail: bool,
    calls: AtomicUsize,
}

#[cfg(test)]
impl StubCountrySource {
    pub fn with_countries(countries: Vec<UpstreamCountry>) -> Self {
        Self {
            countries,
            ..Self::default()
        }
    }

    pub fn with_detail(detail: UpstreamCountryDetail) -> Self {
        Self {
            detail,
            ..Self::default()
        }
    }

    /// Every call fails as if the upstream were down
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of upstream calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(UpstreamError::Request("API down".to_string()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl CountrySource for StubCountrySource {
    async fn fetch_all(&self) -> Result<Vec<UpstreamCountry>, UpstreamError> {
        self.record_call()?;
        Ok(self.countries.clone())
    }

    async fn fetch_by_code(&self, _code: &str) -> Result<UpstreamCountryDetail, UpstreamError> {
        self.record_call()?;
        Ok(self.detail.clone())
    }
}
