use http::StatusCode;
use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the Listmonk API client.
#[derive(Error, Debug)]
pub enum ListmonkError {
    /// Invalid client configuration, detected while building the client.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    /// HTTP transport failed (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// The API endpoint/path string is invalid.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A successful response carried a body that did not match the expected
    /// envelope.
    #[error("Failed to decode response body (status {status}): {source}")]
    DecodeError {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// Error serializing a request body.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The API answered with a non-success status.
    ///
    /// Only produced by [`Reply::into_result`](crate::Reply::into_result) and
    /// friends; request methods hand non-success responses back as a
    /// [`Reply`](crate::Reply).
    #[error("API error ({status}): {message}")]
    ApiError { status: StatusCode, message: String },

    /// A transactional message is missing required parts.
    #[error("Invalid transactional message: {0}")]
    InvalidMessage(String),
}

/// Result type for Listmonk API operations.
pub type ListmonkResult<T> = Result<T, ListmonkError>;
