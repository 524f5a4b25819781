use reqwest::StatusCode;
use thiserror::Error;

/// Error surfaced by a search provider.
///
/// The display text is what the user sees in the error banner.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport failure, including timeouts.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("Error in the API call! ({0})")]
    Status(StatusCode),
    /// The response body was not the expected JSON.
    #[error("Unexpected response from the movie service: {0}")]
    Decode(String),
    #[error("No API token configured; set TMDB_API_TOKEN or pass --offline")]
    MissingCredentials,
    #[error("API token contains characters that cannot be sent in a header")]
    InvalidToken,
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
