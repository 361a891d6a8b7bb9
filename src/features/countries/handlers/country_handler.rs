use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::LenientQuery;
use crate::features::countries::dtos::{CountryDetailDto, CountrySummaryDto, SearchCountriesQuery};
use crate::features::countries::models::UpstreamCountry;
use crate::features::countries::services::CountryService;
use crate::shared::types::{ErrorResponse, PaginationQuery};

/// List countries, one page at a time
#[utoipa::path(
    get,
    path = "/countries",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of countries", body = Vec<CountrySummaryDto>),
        (status = 500, description = "Upstream unavailable", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn list_countries(
    State(service): State<Arc<CountryService>>,
    LenientQuery(pagination): LenientQuery<PaginationQuery>,
) -> Result<Json<Vec<CountrySummaryDto>>> {
    let countries = service.list_countries(&pagination).await?;
    Ok(Json(countries))
}

/// Get a country by its alpha-2 code
#[utoipa::path(
    get,
    path = "/countries/{code}",
    params(
        ("code" = String, Path, description = "ISO 3166-1 alpha-2 code", example = "IN")
    ),
    responses(
        (status = 200, description = "Country details", body = CountryDetailDto),
        (status = 500, description = "Upstream unavailable", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn get_country_by_code(
    State(service): State<Arc<CountryService>>,
    Path(code): Path<String>,
) -> Result<Json<CountryDetailDto>> {
    let country = service.get_country_by_code(&code).await?;
    Ok(Json(country))
}

/// Raw upstream records in a region (exact, case-sensitive)
#[utoipa::path(
    get,
    path = "/countries/region/{region}",
    params(
        ("region" = String, Path, description = "Region name", example = "Europe")
    ),
    responses(
        (status = 200, description = "Upstream records in the region", body = Vec<serde_json::Value>),
        (status = 500, description = "Upstream unavailable", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn filter_countries_by_region(
    State(service): State<Arc<CountryService>>,
    Path(region): Path<String>,
) -> Result<Json<Vec<UpstreamCountry>>> {
    let countries = service.filter_by_region(&region).await?;
    Ok(Json(countries))
}

/// Search raw upstream records by name, capital, region and timezone
#[utoipa::path(
    get,
    path = "/countries/search",
    params(SearchCountriesQuery),
    responses(
        (status = 200, description = "Upstream records matching every given filter", body = Vec<serde_json::Value>),
        (status = 500, description = "Upstream unavailable", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn search_countries(
    State(service): State<Arc<CountryService>>,
    LenientQuery(query): LenientQuery<SearchCountriesQuery>,
) -> Result<Json<Vec<UpstreamCountry>>> {
    let countries = service.search_countries(&query.into()).await?;
    Ok(Json(countries))
}

#[cfg(test)]
mod tests {
    use crate::features::countries::models::{UpstreamCountry, UpstreamCountryDetail};
    use crate::features::countries::routes;
    use crate::features::countries::services::CountryService;
    use crate::shared::test_helpers::{
        sample_countries, sample_country_detail, StubCountrySource,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn server_with(source: StubCountrySource) -> (TestServer, Arc<StubCountrySource>) {
        let source = Arc::new(source);
        let service = Arc::new(CountryService::new(source.clone()));
        let app = routes::routes(service, "/countries");
        (TestServer::new(app).unwrap(), source)
    }

    fn names(body: &Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_list_returns_paginated_countries() {
        let (server, source) = server_with(StubCountrySource::with_countries(sample_countries()));

        let response = server
            .get("/countries")
            .add_query_param("_page", 1)
            .add_query_param("_limit", 1)
            .await;

        response.assert_status_ok();
        response.assert_json(&json!([{
            "name": "India",
            "flag": "🇮🇳",
            "region": "Asia",
            "code": "IN",
            "capital": ["New Delhi"],
            "timezones": ["UTC+05:30"]
        }]));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_list_defaults_and_ignores_bad_pagination() {
        let (server, _) = server_with(StubCountrySource::with_countries(sample_countries()));

        let response = server
            .get("/countries")
            .add_query_param("_page", "abc")
            .add_query_param("_limit", "zero")
            .await;

        response.assert_status_ok();
        assert_eq!(names(&response.json::<Value>()), vec!["India", "France"]);
    }

    #[tokio::test]
    async fn test_list_past_the_end_is_empty() {
        let (server, _) = server_with(StubCountrySource::with_countries(sample_countries()));

        let response = server
            .get("/countries")
            .add_query_param("_page", 3)
            .add_query_param("_limit", 1)
            .await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_get_by_code_maps_nested_name() {
        let (server, source) = server_with(StubCountrySource::with_detail(sample_country_detail()));

        let response = server.get("/countries/IN").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "name": "India",
            "flag": "🇮🇳",
            "population": 1400000000,
            "languages": ["Hindi", "English"],
            "region": "Asia",
            "currency": ["INR"],
            "timeZone": ["UTC+05:30"],
            "capital": ["New Delhi"]
        }));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_region_returns_only_exact_matches_as_raw_records() {
        let (server, _) = server_with(StubCountrySource::with_countries(sample_countries()));

        let response = server.get("/countries/region/Europe").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(names(&body), vec!["France"]);
        assert_eq!(body[0]["region"], "Europe");
        // Raw records, not projections
        assert_eq!(body[0]["alpha2Code"], "FR");
        assert_eq!(body[0]["population"], 67000000);

        let response = server.get("/countries/region/europe").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_search_by_name_is_case_insensitive() {
        let (server, _) = server_with(StubCountrySource::with_countries(sample_countries()));

        let response = server
            .get("/countries/search")
            .add_query_param("name", "india")
            .await;

        response.assert_status_ok();
        assert_eq!(names(&response.json::<Value>()), vec!["India"]);
    }

    #[tokio::test]
    async fn test_search_by_capital() {
        let (server, _) = server_with(StubCountrySource::with_countries(sample_countries()));

        let response = server
            .get("/countries/search")
            .add_query_param("capital", "Paris")
            .await;

        response.assert_status_ok();
        assert_eq!(names(&response.json::<Value>()), vec!["France"]);
    }

    #[tokio::test]
    async fn test_search_filters_are_anded() {
        let (server, _) = server_with(StubCountrySource::with_countries(sample_countries()));

        let response = server
            .get("/countries/search")
            .add_query_param("name", "a")
            .add_query_param("region", "Europe")
            .await;
        response.assert_status_ok();
        assert_eq!(names(&response.json::<Value>()), vec!["France"]);

        let response = server
            .get("/countries/search")
            .add_query_param("name", "india")
            .add_query_param("timezone", "UTC+01:00")
            .await;
        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_search_without_parameters_returns_everything() {
        let (server, _) = server_with(StubCountrySource::with_countries(sample_countries()));

        let response = server.get("/countries/search").await;

        response.assert_status_ok();
        assert_eq!(names(&response.json::<Value>()), vec!["India", "France"]);
    }

    fn odd_countries() -> Vec<UpstreamCountry> {
        serde_json::from_value(json!([
            {"name": "India", "region": "Asia", "alpha2Code": "IN"},
            {"name": "Odd", "region": "Asia", "capital": [null], "timezones": "UTC", "flag": null}
        ]))
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_by_code_passes_map_shaped_fields_through() {
        let detail: UpstreamCountryDetail = serde_json::from_value(json!({
            "name": {"common": "India"},
            "languages": {"hin": "Hindi", "eng": "English"},
            "currencies": {"INR": {"name": "Indian rupee", "symbol": "₹"}},
            "population": 1.4e9,
            "capital": [null]
        }))
        .unwrap();
        let (server, _) = server_with(StubCountrySource::with_detail(detail));

        let response = server.get("/countries/IN").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "name": "India",
            "population": 1.4e9,
            "languages": {"hin": "Hindi", "eng": "English"},
            "currency": {"INR": {"name": "Indian rupee", "symbol": "₹"}}
        }));
    }

    #[tokio::test]
    async fn test_list_keeps_records_with_badly_typed_fields() {
        let (server, _) = server_with(StubCountrySource::with_countries(odd_countries()));

        let response = server.get("/countries").await;

        response.assert_status_ok();
        response.assert_json(&json!([
            {"name": "India", "region": "Asia", "code": "IN"},
            {"name": "Odd", "region": "Asia"}
        ]));
    }

    #[tokio::test]
    async fn test_region_and_search_return_records_exactly_as_received() {
        let (server, _) = server_with(StubCountrySource::with_countries(odd_countries()));

        let response = server.get("/countries/region/Asia").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()[1],
            json!({"name": "Odd", "region": "Asia", "capital": [null], "timezones": "UTC", "flag": null})
        );

        let response = server
            .get("/countries/search")
            .add_query_param("name", "odd")
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()[0]["flag"], Value::Null);
        assert_eq!(response.json::<Value>()[0]["capital"], json!([null]));
    }

    #[tokio::test]
    async fn test_every_endpoint_maps_upstream_failure_to_500() {
        let (server, source) = server_with(StubCountrySource::failing());
        let expected = json!({"error": "Failed to fetch countries, please try again later"});

        for path in [
            "/countries",
            "/countries/IN",
            "/countries/region/Europe",
            "/countries/search?name=india",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            response.assert_json(&expected);
        }
        assert_eq!(source.calls(), 4);
    }
}
