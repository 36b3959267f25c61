use log::{debug, info};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::http_client::build_client;
use super::types::{ApiResponse, CountriesResponse, CountryResponse};
use super::Endpoint;
use crate::error::Result;

const DEFAULT_BASE_URL: &str = "http://services.groupkt.com";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base host of the country service; overridable so tests can point at
    /// a local mock server
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: 30,
            user_agent: format!("restcountries-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Country-lookup service client. Synchronous; one outbound GET per call,
/// no retries, no caching.
pub struct CountryClient {
    config: ClientConfig,
    http_client: Client,
}

impl CountryClient {
    /// Create a new client holding a reusable HTTP connection
    pub fn new(config: ClientConfig) -> Self {
        let http_client = build_client(config.timeout, &config.user_agent);
        Self {
            config,
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch the full country list
    pub fn get_all_countries(&self) -> Result<ApiResponse<CountriesResponse>> {
        let url = format!("{}{}", self.config.base_url, Endpoint::All.path());
        debug!("GET {}", url);
        let response: ApiResponse<CountriesResponse> =
            self.execute(Endpoint::All, self.http_client.get(&url))?;
        info!(
            "all: {} countries returned",
            response.body.rest_response.result.len()
        );
        Ok(response)
    }

    /// Look up a single country by its ISO 3166-1 alpha-2 code
    pub fn get_country_by_alpha2(&self, code: &str) -> Result<ApiResponse<CountryResponse>> {
        self.get_by_code(Endpoint::ByAlpha2, code)
    }

    /// Look up a single country by its ISO 3166-1 alpha-3 code
    pub fn get_country_by_alpha3(&self, code: &str) -> Result<ApiResponse<CountryResponse>> {
        self.get_by_code(Endpoint::ByAlpha3, code)
    }

    /// Free-text search over the country list
    pub fn search_countries(&self, text: &str) -> Result<ApiResponse<CountriesResponse>> {
        let url = format!("{}{}", self.config.base_url, Endpoint::Search.path());
        debug!("GET {}?text={}", url, text);
        let response: ApiResponse<CountriesResponse> = self.execute(
            Endpoint::Search,
            self.http_client.get(&url).query(&[("text", text)]),
        )?;
        info!(
            "search: {} countries matched",
            response.body.rest_response.result.len()
        );
        Ok(response)
    }

    fn get_by_code(&self, endpoint: Endpoint, code: &str) -> Result<ApiResponse<CountryResponse>> {
        let url = format!("{}{}/{}", self.config.base_url, endpoint.path(), code);
        debug!("GET {}", url);
        let response: ApiResponse<CountryResponse> =
            self.execute(endpoint, self.http_client.get(&url))?;
        info!(
            "{}: resolved {} to {}",
            endpoint.as_str(),
            code,
            response.body.rest_response.result.name
        );
        Ok(response)
    }

    /// One GET round trip plus an all-or-nothing JSON decode. The status
    /// code is recorded, not acted on: a non-2xx response with a decodable
    /// body is returned to the caller as-is.
    fn execute<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        let response = request.send()?;
        let status_code = response.status().as_u16();
        debug!("{} responded with status {}", endpoint.as_str(), status_code);

        let body = response.text()?;
        let body = serde_json::from_str(&body)?;

        Ok(ApiResponse { status_code, body })
    }
}
