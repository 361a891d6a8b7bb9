use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::features::countries::filter::CountryFilter;
use crate::features::countries::models::{
    lenient, Capital, CountryName, UpstreamCountry, UpstreamCountryDetail,
};

/// Query parameters for searching countries
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchCountriesQuery {
    /// Name contains (case-insensitive)
    #[param(example = "india")]
    pub name: Option<String>,
    /// First capital contains (case-insensitive)
    #[param(example = "Paris")]
    pub capital: Option<String>,
    /// Region equals (case-sensitive)
    #[param(example = "Europe")]
    pub region: Option<String>,
    /// Timezone list contains this exact value
    #[param(example = "UTC+01:00")]
    pub timezone: Option<String>,
}

impl From<SearchCountriesQuery> for CountryFilter {
    fn from(query: SearchCountriesQuery) -> Self {
        CountryFilter::new(query.name, query.capital, query.region, query.timezone)
    }
}

/// Country as listed by `GET /`
///
/// Fields of an unexpected shape decode as absent rather than failing the
/// whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountrySummaryDto {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "India")]
    pub name: Option<CountryName>,
    /// Emoji or image URL
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2 code
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    #[schema(example = "IN")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<String>>)]
    pub capital: Option<Capital>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,
}

impl From<&UpstreamCountry> for CountrySummaryDto {
    fn from(country: &UpstreamCountry) -> Self {
        Self {
            name: country.name(),
            flag: country.flag().map(str::to_string),
            region: country.region().map(str::to_string),
            code: country.alpha2_code().map(str::to_string),
            capital: country.capital(),
            timezones: country.timezones(),
        }
    }
}

/// Country as returned by `GET /{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetailDto {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    #[schema(example = "India")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    /// Copied as-is from the upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>, example = 1400000000)]
    pub population: Option<Value>,
    /// Upstream language objects (`{name, ...}`), copied as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub languages: Option<Value>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Upstream currency objects (`{name, symbol, ...}`), copied as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub currency: Option<Value>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<String>>)]
    pub capital: Option<Capital>,
}

impl From<UpstreamCountryDetail> for CountryDetailDto {
    fn from(country: UpstreamCountryDetail) -> Self {
        Self {
            name: country
                .name
                .as_ref()
                .and_then(CountryName::common)
                .map(str::to_string),
            flag: country.flag,
            population: country.population,
            languages: country.languages,
            region: country.region,
            currency: country.currencies,
            time_zone: country.timezones,
            capital: country.capital,
        }
    }
}
