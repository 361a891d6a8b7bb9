//! Countries feature: a reshaping proxy over the upstream countries API.
//!
//! Nothing is cached; every request fetches from upstream, then projects,
//! filters or pages the result in memory. Any failure becomes the same 500.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/countries?_page&_limit` | Page of country summaries |
//! | GET | `/countries/{code}` | Country detail by alpha-2 code |
//! | GET | `/countries/region/{region}` | Raw upstream records in a region |
//! | GET | `/countries/search?name&capital&region&timezone` | Raw upstream records matching all filters |

pub mod clients;
pub mod dtos;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::{CountrySource, RestCountriesClient};
pub use services::CountryService;
