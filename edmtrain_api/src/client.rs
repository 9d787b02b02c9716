//! HTTP client for the EDMTrain API.

use std::fmt;

use url::Url;

use crate::{
    mapper::{self, Envelope},
    query::{EventQuery, LocationQuery, Query},
    Error,
};

/// Production endpoint of the EDMTrain API.
pub const DEFAULT_BASE_URL: &str = "https://edmtrain.com/api";

/// Client for the EDMTrain API.
///
/// Holds the client token that is appended to every request and hands out
/// fresh query builders. Each executed query opens its own connection and
/// releases it before returning.
pub struct Client {
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    token: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Client {
    /// Creates a client for the production API with the given token.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::builder().token(token).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Starts a new event query with no parameters set.
    pub fn query_for_events(&self) -> EventQuery<'_> {
        EventQuery::new(self)
    }

    /// Starts a new location query with no parameters set.
    pub fn query_for_locations(&self) -> LocationQuery<'_> {
        LocationQuery::new(self)
    }

    pub(crate) async fn get<Q: Query>(&self, query: &Q) -> Result<Envelope, Error> {
        let url = query.url()?;
        tracing::debug!(
            "GET {}/{} with {} parameters",
            self.base_api_url,
            query.endpoint(),
            query.args().len()
        );

        // Dropped at the end of this call, taking its connection pool with it.
        let client = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Connection(e)
        })?;
        let resp = client.get(url).send().await.map_err(|e| {
            // The URL carries the token.
            let e = e.without_url();
            tracing::error!("Failed to get resource: {}", e);
            Error::Connection(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Connection(e)
        })?;

        // The service reports most failures inside the envelope, whatever the status.
        match mapper::decode_envelope(&body) {
            Ok(envelope) => Ok(envelope),
            Err(e) if !status.is_success() => {
                let snippet = truncate_body(&body);
                tracing::error!("Request failed with status {}: {} ({})", status, snippet, e);
                Err(Error::HttpStatus {
                    status: status.as_u16(),
                    body: snippet,
                })
            }
            Err(e) => {
                tracing::error!(
                    "Failed to parse resource: {} | body: {}",
                    e,
                    truncate_body(&body)
                );
                Err(e.into())
            }
        }
    }
}

/// Builder for [`Client`]. A token is required.
#[derive(Default)]
pub struct ClientBuilder {
    token: Option<String>,
    base_url: Option<String>,
}

impl ClientBuilder {
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Points the client somewhere other than [`DEFAULT_BASE_URL`]. Used for testing with wiremock.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let token = match self.token {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Err(Error::MissingToken),
        };
        let base_api_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Url::parse(&base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_api_url, e);
            Error::InvalidUrl(e)
        })?;

        Ok(Client {
            base_api_url,
            token,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}
