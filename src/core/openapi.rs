use utoipa::{Modify, OpenApi};

use crate::features::countries::{dtos as countries_dtos, handlers as countries_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        countries_handlers::list_countries,
        countries_handlers::get_country_by_code,
        countries_handlers::filter_countries_by_region,
        countries_handlers::search_countries,
    ),
    components(
        schemas(
            ErrorResponse,
            countries_dtos::CountrySummaryDto,
            countries_dtos::CountryDetailDto,
        )
    ),
    tags(
        (name = "countries", description = "Countries proxied from the upstream REST Countries API"),
    ),
    info(
        title = "Country Data API",
        version = "0.1.0",
        description = "Countries listing, detail, region filter and search",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_country_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/countries",
            "/countries/{code}",
            "/countries/region/{region}",
            "/countries/search",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Overridden".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Overridden"));
    }
}
