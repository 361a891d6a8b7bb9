//! Text-mode country browser.
//!
//! Pages through the countries list endpoint 40 at a time, keeps every
//! page it has seen, and filters the accumulated set locally by a search
//! term and a region. Also renders the country detail view.

pub mod cache;
pub mod clients;
pub mod session;
pub mod view;

pub use cache::{PageCache, BROWSER_PAGE_SIZE};
pub use clients::{BrowserError, CountriesApiClient};
pub use session::CountryBrowser;
pub use view::{BrowserFilter, RegionSelection};
