//! Application state for the movie search TUI.
//!
//! `App` owns the autocomplete controller plus the purely presentational
//! state around it (banner, list viewport, hit-test areas). Components
//! mutate it in response to terminal events; the runtime feeds it ticks and
//! completed searches.

use std::time::Instant;

use moviesearch_engine::Autocomplete;
use moviesearch_types::{AutocompleteConfig, Effect, Msg};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::ui::components::snackbar::SnackbarState;
use crate::ui::theme::Theme;

/// Spinner frames shown while a search is loading.
pub const THROBBER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Screen areas captured during the last render, used for mouse hit-testing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutCache {
    /// Whole autocomplete widget (input plus list).
    pub widget_area: Rect,
    pub input_area: Rect,
    /// Rows of the suggestion list, excluding borders.
    pub list_rows_area: Rect,
}

#[derive(Debug)]
pub struct App {
    pub autocomplete: Autocomplete,
    pub snackbar: SnackbarState,
    pub theme: Box<dyn Theme>,
    /// Viewport over the displayed suggestions; keeps the active row visible.
    pub list_state: ListState,
    pub layout: LayoutCache,
    pub throbber_idx: usize,
}

impl App {
    pub fn new(config: &AutocompleteConfig, theme: Box<dyn Theme>) -> Self {
        Self {
            autocomplete: Autocomplete::new(config),
            snackbar: SnackbarState::new(config.snackbar_duration_ms),
            theme,
            list_state: ListState::default(),
            layout: LayoutCache::default(),
            throbber_idx: 0,
        }
    }

    /// Apply an application message. Returns whether a redraw is needed.
    pub fn update(&mut self, msg: &Msg, now: Instant) -> bool {
        match msg {
            Msg::Tick => {
                let mut changed = self.snackbar.tick(now);
                if self.autocomplete.is_loading() {
                    self.throbber_idx = (self.throbber_idx + 1) % THROBBER_FRAMES.len();
                    changed = true;
                }
                changed
            }
            Msg::Resize(..) => true,
            Msg::SearchCompleted { ticket, outcome } => {
                let applied = self.autocomplete.on_query_resolved(*ticket, outcome.clone());
                self.sync(now);
                applied
            }
        }
    }

    /// Collect searches whose debounce window has elapsed.
    pub fn poll_effects(&mut self, now: Instant) -> Vec<Effect> {
        self.autocomplete.poll_due(now).map(Effect::Search).into_iter().collect()
    }

    /// Re-derive presentational state after the controller changed.
    pub fn sync(&mut self, now: Instant) {
        self.snackbar.observe(self.autocomplete.error(), now);
        self.list_state.select(self.autocomplete.active_index());
        if self.autocomplete.active_index().is_none() {
            *self.list_state.offset_mut() = 0;
        }
    }

    /// Whether the runtime should tick quickly.
    pub fn needs_animation(&self) -> bool {
        self.autocomplete.is_loading() || self.snackbar.is_visible()
    }

    pub fn throbber(&self) -> &'static str {
        THROBBER_FRAMES[self.throbber_idx % THROBBER_FRAMES.len()]
    }
}
