mod country;

pub(crate) use country::lenient;
pub use country::{Capital, CountryName, NestedName, UpstreamCountry, UpstreamCountryDetail};
