//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! map each failure class onto a stable wire-level code and message.

use thiserror::Error;

use crate::types::PathType;

/// Failure classes for path extraction.
///
/// Each variant corresponds to one parser error code; the `Display`
/// strings are part of the wire contract and must stay stable.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A path segment or key did not resolve against the document.
    #[error("Path error, please enter a valid Path value for the type '{path_type}'")]
    PathNotFound { path_type: PathType },

    /// Any other failure while evaluating the path expression.
    #[error("There was an error with your Path and Path Type combo: {0}")]
    Evaluation(String),

    /// The fetched document could not be parsed as XML.
    #[error("Error parsing XML data. Are you sure the data is valid XML?")]
    XmlParse,
}

impl ExtractError {
    /// Wire-level parser error code. Code 0 is reserved for success.
    pub fn code(&self) -> u8 {
        match self {
            ExtractError::PathNotFound { .. } => 1,
            ExtractError::Evaluation(_) => 2,
            ExtractError::XmlParse => 3,
        }
    }
}

/// Errors raised by the document fetcher.
///
/// Non-2xx HTTP statuses are not errors at this layer; they travel with
/// the fetch result. Only transport-level failures land here.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL did not parse even after scheme normalization.
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// The outbound request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for extraction operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
