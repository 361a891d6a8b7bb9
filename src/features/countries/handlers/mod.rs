pub mod country_handler;

pub use country_handler::{
    __path_filter_countries_by_region, __path_get_country_by_code, __path_list_countries,
    __path_search_countries, filter_countries_by_region, get_country_by_code, list_countries,
    search_countries,
};
