//! Error types for the API client.

/// Errors that can occur when building or executing a query.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The service answered with `success: false`. Carries the service's message verbatim.
    #[error("API error: {0}")]
    Api(String),
    /// The request never produced a response (DNS, socket, TLS, timeout).
    #[error("Something went wrong getting a connection to the api: {0}")]
    Connection(#[source] reqwest::Error),
    /// The response was not shaped like the requested resource.
    #[error("Something went wrong parsing the result: {0}")]
    Mapping(#[from] MappingError),
    /// The service returned a non-success status and no envelope.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The base URL and query parameters did not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The client was built without a token.
    #[error("A client token is required")]
    MissingToken,
}

/// Structural problems found while mapping a response body.
#[derive(thiserror::Error, Debug)]
pub enum MappingError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid {field} `{value}`: {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
