pub mod browser;
pub mod countries;
