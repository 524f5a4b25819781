//! Movie search provider clients.
//!
//! The autocomplete core treats search as an external collaborator: one
//! asynchronous round trip per query returning ordered titles or an error.
//! This crate provides that collaborator:
//!
//! - [`SearchProvider`]: the async seam the runtime calls through
//! - [`TmdbClient`]: HTTP client for The Movie Database search endpoint
//! - [`CatalogProvider`]: in-memory titles for offline use and tests
//!
//! # Example
//!
//! ```ignore
//! use moviesearch_api::{SearchProvider, TmdbClient};
//!
//! let client = TmdbClient::new("https://api.themoviedb.org/3", Some(token), timeout)?;
//! let titles = client.search("bat").await?;
//! ```

mod catalog;
mod client;
mod error;

use async_trait::async_trait;
use moviesearch_types::{SearchOutcome, SearchRequest};
use tracing::warn;

pub use catalog::CatalogProvider;
pub use client::{DEFAULT_API_BASE, TmdbClient};
pub use error::SearchError;

/// Message shown when a failure carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// A source of movie titles for a free-text query.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Return matching titles in provider order.
    async fn search(&self, query: &str) -> Result<Vec<String>, SearchError>;
}

/// Keep titles that contain `query`, ignoring case, preserving order.
pub fn filter_titles<I, S>(titles: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let needle = query.to_lowercase();
    titles
        .into_iter()
        .map(Into::into)
        .filter(|title: &String| title.to_lowercase().contains(&needle))
        .collect()
}

/// Flatten a provider result into the shape the UI consumes.
pub fn outcome_from_result(result: Result<Vec<String>, SearchError>) -> SearchOutcome {
    match result {
        Ok(titles) => SearchOutcome::ok(titles),
        Err(error) => {
            let message = error.to_string();
            if message.trim().is_empty() {
                SearchOutcome::failed(FALLBACK_ERROR_MESSAGE)
            } else {
                SearchOutcome::failed(message)
            }
        }
    }
}

/// Execute `request` against `provider`, never failing.
pub async fn run_search(provider: &dyn SearchProvider, request: &SearchRequest) -> SearchOutcome {
    let result = provider.search(&request.query).await;
    if let Err(error) = &result {
        warn!(ticket = request.ticket.0, query = %request.query, %error, "search failed");
    }
    outcome_from_result(result)
}
