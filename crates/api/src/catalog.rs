//! In-memory provider backed by a fixed list of titles.

use std::time::Duration;

use async_trait::async_trait;

use crate::{SearchError, SearchProvider, filter_titles};

/// A handful of well-known titles used by `--offline`.
const BUILTIN_TITLES: &[&str] = &[
    "Alien",
    "Aliens",
    "Amélie",
    "Back to the Future",
    "Batman",
    "Batman Begins",
    "Batman Returns",
    "Blade Runner",
    "Casablanca",
    "Combat Shock",
    "Heat",
    "Inception",
    "Interstellar",
    "Jaws",
    "Mad Max: Fury Road",
    "Spirited Away",
    "Star Wars",
    "The Batman",
    "The Dark Knight",
    "The Godfather",
    "The Matrix",
    "The Shining",
    "Up",
    "WALL·E",
];

/// Serves titles from memory, optionally after an artificial delay to mimic
/// network latency.
#[derive(Debug, Clone, Default)]
pub struct CatalogProvider {
    titles: Vec<String>,
    latency: Option<Duration>,
}

impl CatalogProvider {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            latency: None,
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_TITLES.iter().copied())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl SearchProvider for CatalogProvider {
    async fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(filter_titles(self.titles.iter().cloned(), query))
    }
}
