/// Default page number for the country list
pub const DEFAULT_PAGE: usize = 1;

/// Default page size for the country list
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// The only error message the country endpoints ever return
pub const COUNTRIES_UNAVAILABLE_MESSAGE: &str =
    "Failed to fetch countries, please try again later";
