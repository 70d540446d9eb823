//! source::restcountries
//!
//! HTTP source backed by the REST Countries API.
//!
//! # Design
//!
//! One `GET {endpoint}?fields=name,flags,capital,languages,continents`.
//! Only the fields the normalizer reads are requested, which keeps the
//! payload small.
//!
//! There is no retry and no caching. Any failure is returned as a
//! `FetchError` and the caller decides what "no data" means for it.
//!
//! # Example
//!
//! ```ignore
//! use country_directory::source::{CountrySource, RestCountries};
//!
//! let source = RestCountries::new();
//! let entries = source.fetch().await?;
//! println!("{} countries", entries.len());
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::raw::RawCountryEntry;
use super::traits::{CountrySource, FetchError};

/// Default catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Fields requested from the API.
pub const REQUESTED_FIELDS: &str = "name,flags,capital,languages,continents";

/// Default User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = "country-directory";

/// REST Countries source.
#[derive(Debug, Clone)]
pub struct RestCountries {
    /// HTTP client for making requests
    client: Client,
    /// Catalog endpoint, without query string
    endpoint: String,
    /// User-Agent sent with the request
    user_agent: String,
    /// Per-request timeout
    timeout: Option<Duration>,
}

impl RestCountries {
    /// Create a source pointing at the public API.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a source pointing at a custom endpoint.
    ///
    /// Useful for mirrors and for tests against a local server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }

    /// Set a request timeout. Without one, the transport default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Get the configured request timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Get the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request URL, including the field selection.
    pub fn request_url(&self) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| FetchError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair("fields", REQUESTED_FIELDS);
        Ok(url)
    }

    /// Build common headers for the request.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let agent = HeaderValue::from_str(&self.user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(USER_AGENT, agent);
        headers
    }

    /// Map the response to entries or an error.
    async fn handle_response(response: Response) -> Result<Vec<RawCountryEntry>, FetchError> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_status(response, status).await);
        }

        let values: Vec<Value> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(values.into_iter().map(RawCountryEntry::from_value).collect())
    }

    /// Build a `FetchError` for a non-success response.
    async fn error_from_status(response: Response, status: StatusCode) -> FetchError {
        let message = match response.json::<ApiErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        FetchError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

impl Default for RestCountries {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CountrySource for RestCountries {
    fn name(&self) -> &'static str {
        "restcountries"
    }

    async fn fetch(&self) -> Result<Vec<RawCountryEntry>, FetchError> {
        let url = self.request_url()?;
        tracing::debug!(%url, "fetching country catalog");

        let mut request = self.client.get(url).headers(self.headers());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        tracing::debug!(status = response.status().as_u16(), "catalog response received");

        let entries = Self::handle_response(response).await?;
        tracing::debug!(count = entries.len(), "catalog decoded");
        Ok(entries)
    }
}

/// Error body returned by the API, e.g. `{"status":404,"message":"Not Found"}`.
#[derive(Deserialize)]
struct ApiErrorResponse {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoint() {
        let source = RestCountries::new();
        assert_eq!(source.name(), "restcountries");
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(source.request_timeout(), None);
    }

    #[test]
    fn timeout_is_kept_on_the_source() {
        let source = RestCountries::new()
            .user_agent("countries-test/1.0")
            .timeout(Duration::from_secs(7));
        assert_eq!(source.request_timeout(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn request_url_selects_fields() {
        let source = RestCountries::new();
        let url = source.request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/all?fields=name%2Cflags%2Ccapital%2Clanguages%2Ccontinents"
        );
    }

    #[test]
    fn request_url_keeps_existing_query() {
        let source = RestCountries::with_endpoint("http://localhost:8080/all?lang=en");
        let url = source.request_url().unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("lang".to_string(), "en".to_string()),
                ("fields".to_string(), REQUESTED_FIELDS.to_string()),
            ]
        );
    }

    #[test]
    fn request_url_rejects_relative_endpoint() {
        let source = RestCountries::with_endpoint("v3.1/all");
        let err = source.request_url().unwrap_err();
        assert!(matches!(err, FetchError::InvalidEndpoint { .. }));
    }

    #[test]
    fn invalid_user_agent_falls_back() {
        let source = RestCountries::new().user_agent("bad\nagent");
        let headers = source.headers();
        assert_eq!(headers.get(USER_AGENT).unwrap(), DEFAULT_USER_AGENT);
    }

    #[tokio::test]
    async fn fetch_with_invalid_endpoint_fails_without_network() {
        let source = RestCountries::with_endpoint("not a url");
        let result = source.fetch().await;
        assert!(matches!(result, Err(FetchError::InvalidEndpoint { .. })));
    }
}
