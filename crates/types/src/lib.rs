//! Shared value types for the movie search widget.
//!
//! These types cross crate boundaries: the engine produces [`SearchRequest`]s,
//! the runtime executes them against a provider and feeds the resulting
//! [`SearchOutcome`] back through [`Msg::SearchCompleted`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum number of suggestions displayed and reachable by keyboard.
pub const DEFAULT_SUGGESTIONS_LIMIT: usize = 20;
/// Default quiet period before a typed query is sent to the provider.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 300;
/// Default upper bound on a single provider round trip.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
/// Default time an error banner stays visible.
pub const DEFAULT_SNACKBAR_DURATION_MS: u64 = 5_000;

/// What Enter does when no suggestion is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnterPolicy {
    /// Enter is ignored unless a suggestion is highlighted.
    RequireActive,
    /// Enter commits whatever the user typed.
    #[default]
    CommitTypedText,
}

impl FromStr for EnterPolicy {
    type Err = ParseEnterPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "require-active" | "require_active" => Ok(Self::RequireActive),
            "commit-typed-text" | "commit_typed_text" => Ok(Self::CommitTypedText),
            other => Err(ParseEnterPolicyError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid enter policy '{0}'; expected 'require-active' or 'commit-typed-text'")]
pub struct ParseEnterPolicyError(pub String);

/// Tunables consumed by the autocomplete core and its rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Max displayed/navigable candidates. Must be greater than zero.
    pub suggestions_limit: usize,
    /// Quiet period in milliseconds before a query is dispatched.
    pub debounce_delay_ms: u64,
    /// Whether the input starts focused.
    pub autofocus: bool,
    pub enter_policy: EnterPolicy,
    /// Client-wide timeout for provider calls.
    pub request_timeout_ms: u64,
    pub snackbar_duration_ms: u64,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            suggestions_limit: DEFAULT_SUGGESTIONS_LIMIT,
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            autofocus: true,
            enter_policy: EnterPolicy::default(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            snackbar_duration_ms: DEFAULT_SNACKBAR_DURATION_MS,
        }
    }
}

/// Monotonic marker identifying one dispatched request.
///
/// Tickets are compared only against the most recently issued ticket; they
/// carry no wall-clock meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestTicket(pub u64);

/// A query that the runtime should send to the search provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: RequestTicket,
    pub query: String,
}

/// Result of one provider round trip, already flattened for the UI.
///
/// On failure `titles` is empty and `error` carries the user-facing message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub titles: Vec<String>,
    pub error: Option<String>,
}

impl SearchOutcome {
    pub fn ok(titles: Vec<String>) -> Self {
        Self { titles, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            titles: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic UI tick (spinner frames, banner expiry)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// A provider call finished
    SearchCompleted { ticket: RequestTicket, outcome: SearchOutcome },
}

/// Side effects requested by the application for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a provider search in the background
    Search(SearchRequest),
}
