pub mod client;
pub mod http_client;
pub mod message;
pub mod types;

pub use client::{ClientConfig, CountryClient};
pub use message::get_total;

/// Endpoints exposed by the country-lookup service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Full country list
    All,
    /// Lookup by ISO 3166-1 alpha-2 code
    ByAlpha2,
    /// Lookup by ISO 3166-1 alpha-3 code
    ByAlpha3,
    /// Free-text search
    Search,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ByAlpha2 => "iso2code",
            Self::ByAlpha3 => "iso3code",
            Self::Search => "search",
        }
    }

    /// Path under the base host. Code lookups append `/{code}`; search
    /// carries its query string separately.
    pub fn path(&self) -> &'static str {
        match self {
            Self::All => "/country/get/all",
            Self::ByAlpha2 => "/country/get/iso2code",
            Self::ByAlpha3 => "/country/get/iso3code",
            Self::Search => "/country/search",
        }
    }
}
