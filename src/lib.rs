//! Country data service.
//!
//! A thin proxy over an upstream countries REST API: it projects upstream
//! records into public shapes, filters them in memory and pages them by
//! offset. The `browser` feature is the client side of the same API.

pub mod core;
pub mod features;
pub mod shared;
