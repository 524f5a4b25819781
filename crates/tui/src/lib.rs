//! # Movie Search TUI
//!
//! Terminal front end for the movie search autocomplete. A single input
//! queries a [`SearchProvider`] as you type (debounced), shows matching
//! titles with the query highlighted, and lets you pick one with the
//! keyboard or the mouse.
//!
//! ## Architecture
//!
//! - `app`: state container wrapping the `moviesearch_engine::Autocomplete`
//!   controller plus presentational state
//! - `cmd`: turns search effects into spawned provider calls
//! - `ui`: components, theme and the async event loop

mod app;
mod cmd;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use moviesearch_api::SearchProvider;
use moviesearch_types::AutocompleteConfig;

/// Runs the TUI until the user quits with Ctrl+C.
///
/// # Errors
///
/// Terminal setup, drawing, or teardown failures. Provider errors never end
/// the loop; they surface in the error banner.
pub async fn run(config: AutocompleteConfig, provider: Arc<dyn SearchProvider>) -> Result<()> {
    ui::runtime::run_app(config, provider).await
}
