use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::countries::handlers;
use crate::features::countries::services::CountryService;

/// Create routes for the countries feature, mounted under `base_path`
/// (`""` mounts them at the root)
pub fn routes(service: Arc<CountryService>, base_path: &str) -> Router {
    let mut router = Router::new().route(
        &format!("{}/", base_path),
        get(handlers::list_countries),
    );
    if !base_path.is_empty() {
        router = router.route(base_path, get(handlers::list_countries));
    }

    router
        // Static segments take precedence over {code}
        .route(&format!("{}/search", base_path), get(handlers::search_countries))
        .route(
            &format!("{}/region/{{region}}", base_path),
            get(handlers::filter_countries_by_region),
        )
        .route(
            &format!("{}/{{code}}", base_path),
            get(handlers::get_country_by_code),
        )
        .with_state(service)
}
