use serde::Deserialize;

/// A single country record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    /// Display name
    pub name: String,
    /// ISO 3166-1 alpha-2 code
    pub alpha2_code: String,
    /// ISO 3166-1 alpha-3 code
    pub alpha3_code: String,
}

/// Envelope body shared by the single-entity endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRestResponse {
    /// Status messages, e.g. `"Country found matching code [IN]."`
    #[serde(default)]
    pub messages: Vec<String>,
    pub result: Country,
}

/// Response of `/country/get/iso2code/{code}` and `/country/get/iso3code/{code}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryResponse {
    #[serde(rename = "RestResponse")]
    pub rest_response: CountryRestResponse,
}

/// Envelope body shared by the list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountriesRestResponse {
    /// Status messages, e.g. `"Total [249] records found."`
    #[serde(default)]
    pub messages: Vec<String>,
    /// Zero results decode to an empty vec, not a failure
    pub result: Vec<Country>,
}

/// Response of `/country/get/all` and `/country/search`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountriesResponse {
    #[serde(rename = "RestResponse")]
    pub rest_response: CountriesRestResponse,
}

/// Pairs the HTTP status code of a round trip with its decoded envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub body: T,
}
