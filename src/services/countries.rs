//! Country data loader.
//!
//! Issues the one-time request to the REST Countries API for the list of
//! independent, sovereign states. There is no retry, timeout, or caching
//! policy here: the fetch either yields the full dataset or an error the
//! caller logs and swallows.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::domain::Country;

/// Endpoint returning all independent countries.
const ENDPOINT: &str = "https://restcountries.com/v3.1/independent?status=true";

/// Errors from the country data loader.
#[derive(Debug, Error)]
pub enum CountriesError {
    /// The HTTP request failed or returned a non-success status.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint URL did not parse. Only reachable if the compiled-in
    /// constant is edited into something invalid.
    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The fetch task was torn down before completing.
    #[error("fetch task aborted: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}

/// Source of country data.
///
/// The one production implementation is [`RestCountriesClient`]; tests
/// substitute canned datasets.
#[async_trait]
pub trait CountriesApi: Send + Sync {
    /// Fetches all independent countries.
    async fn fetch_independent(&self) -> Result<Vec<Country>, CountriesError>;
}

/// HTTP client for the REST Countries API.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl RestCountriesClient {
    /// Creates a client against the production endpoint.
    pub fn new() -> Result<Self, CountriesError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: Url::parse(ENDPOINT)?,
        })
    }

    /// Creates a client against a custom endpoint.
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CountriesApi for RestCountriesClient {
    async fn fetch_independent(&self) -> Result<Vec<Country>, CountriesError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching countries");

        let countries: Vec<Country> = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!(count = countries.len(), "fetched countries");
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_endpoint_parses() {
        let client = RestCountriesClient::new().unwrap();
        assert_eq!(client.endpoint().host_str(), Some("restcountries.com"));
        assert_eq!(client.endpoint().path(), "/v3.1/independent");
        assert_eq!(client.endpoint().query(), Some("status=true"));
    }

    #[test]
    fn custom_endpoint_is_kept() {
        let url = Url::parse("http://localhost:8080/countries").unwrap();
        let client = RestCountriesClient::with_endpoint(url.clone());
        assert_eq!(client.endpoint(), &url);
    }

    #[test]
    fn payload_shape_deserializes() {
        // Trimmed from a live response.
        let json = r#"[
            {
                "name": { "common": "Iceland", "official": "Iceland" },
                "flags": { "png": "https://flagcdn.com/w320/is.png" },
                "region": "Europe"
            },
            {
                "name": { "common": "Chile", "official": "Republic of Chile" },
                "flags": { "png": "https://flagcdn.com/w320/cl.png" },
                "region": "Americas"
            }
        ]"#;

        let countries: Vec<Country> = serde_json::from_str(json).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].display_name(), Some("Iceland"));
        assert_eq!(countries[1].region(), "Americas");
    }
}
