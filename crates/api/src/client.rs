//! HTTP client for The Movie Database search endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use serde::Deserialize;
use tracing::debug;

use crate::{SearchError, SearchProvider, filter_titles};

/// Public TMDB v3 API root.
pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
/// Hostnames allowed for local development regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<MovieResult>,
}

#[derive(Debug, Deserialize)]
struct MovieResult {
    #[serde(default)]
    title: String,
}

/// Thin wrapper around a configured `reqwest::Client` for TMDB search.
///
/// Default headers carry the bearer token and JSON accept type. Every
/// request shares one client-wide timeout, so a hung call resolves as an
/// error instead of leaving the UI loading forever.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    base_url: Url,
    http: Client,
}

impl TmdbClient {
    /// Build a client for `base_url`.
    ///
    /// Fails if no token is given, the URL is malformed, or a non-local host
    /// is not using HTTPS.
    pub fn new(base_url: &str, api_token: Option<&str>, timeout: Duration) -> Result<Self, SearchError> {
        let api_token = api_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(SearchError::MissingCredentials)?;
        let base_url = validate_base_url(base_url)?;

        let mut default_headers = header::HeaderMap::new();
        let mut authorization = header::HeaderValue::from_str(&format!("Bearer {api_token}"))
            .map_err(|_| SearchError::InvalidToken)?;
        authorization.set_sensitive(true);
        default_headers.insert(header::AUTHORIZATION, authorization);
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(default_headers)
            .user_agent(format!("moviesearch/{}; {}", env!("CARGO_PKG_VERSION"), std::env::consts::OS))
            .timeout(timeout);
        if is_local(&base_url) {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/search/movie", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchProvider for TmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let url = self.search_url();
        let lowered = query.to_lowercase();
        debug!(%url, query = %lowered, "requesting movie search");

        let response = self.http.get(&url).query(&[("query", lowered.as_str())]).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }
        let body = response.text().await?;
        titles_from_body(&body, query)
    }
}

/// Decode a search response body into filtered titles.
fn titles_from_body(body: &str, query: &str) -> Result<Vec<String>, SearchError> {
    let parsed: SearchResponse = serde_json::from_str(body).map_err(|error| SearchError::Decode(error.to_string()))?;
    Ok(filter_titles(parsed.results.into_iter().map(|movie| movie.title), query))
}

fn is_local(url: &Url) -> bool {
    url.host_str()
        .is_some_and(|host| LOCALHOST_DOMAINS.iter().any(|allowed| host.eq_ignore_ascii_case(allowed)))
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
fn validate_base_url(base: &str) -> Result<Url, SearchError> {
    let invalid = |reason: String| SearchError::InvalidBaseUrl {
        url: base.to_string(),
        reason,
    };
    let parsed = Url::parse(base).map_err(|error| invalid(error.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".into()));
    }

    if is_local(&parsed) {
        return Ok(parsed);
    }
    if parsed.scheme() != "https" {
        return Err(invalid(format!("non-localhost hosts must use https, got '{}://'", parsed.scheme())));
    }
    Ok(parsed)
}
