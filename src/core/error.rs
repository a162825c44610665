//! Error taxonomy for the fetch path and for search input validation.

use thiserror::Error;

/// Anything that can go wrong between issuing a request and holding a
/// decoded [`WordDetail`](super::model::WordDetail).
///
/// Callers are free to collapse every variant into one failure branch; the
/// split only exists so the log line says what actually happened.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not decode response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid request url: {0}")]
    Url(String),
}

/// Rejected search input. Surfaced to the user as a prompt, never logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a word in the text field first to retrieve definitions")]
    MissingWord,
}
