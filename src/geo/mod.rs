mod client;
mod error;
mod types;

pub use client::{DEFAULT_PROVIDERS, GeoClient};
pub use types::LocationResult;
