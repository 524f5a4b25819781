//! Autocomplete controller: owns the query, loading and error state, and
//! orchestrates dispatch, response application and selection.
//!
//! The controller never touches the network or the terminal. The runtime
//! asks it for due requests via [`Autocomplete::poll_due`], executes them,
//! and hands the outcome back through [`Autocomplete::on_query_resolved`].
//!
//! Flow per keystroke:
//! - text changes, cursor resets, Loading set, Error cleared
//! - debouncer (re)scheduled with the new text
//! - on fire, the stale guard issues a ticket and a [`SearchRequest`] leaves
//! - only the response carrying the latest ticket mutates candidates/error

use std::time::{Duration, Instant};

use moviesearch_types::{AutocompleteConfig, EnterPolicy, RequestTicket, SearchOutcome, SearchRequest};
use tracing::debug;

use crate::debounce::Debouncer;
use crate::highlight::{Segment, highlight};
use crate::stale_guard::StaleGuard;
use crate::suggestions::{ListPhase, NavKey, SuggestionList};
use crate::text_input::TextInputState;

/// What a navigation key did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Ignored,
    Moved,
    Committed(String),
    Cancelled,
}

#[derive(Debug)]
pub struct Autocomplete {
    enter_policy: EnterPolicy,
    input: TextInputState,
    list: SuggestionList,
    debouncer: Debouncer<String>,
    guard: StaleGuard,
    loading: bool,
    error: Option<String>,
    selection: Option<String>,
    focused: bool,
}

impl Autocomplete {
    pub fn new(config: &AutocompleteConfig) -> Self {
        let mut list = SuggestionList::new(config.suggestions_limit);
        if config.autofocus {
            list.open();
        }
        Self {
            enter_policy: config.enter_policy,
            input: TextInputState::new(),
            list,
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_delay_ms)),
            guard: StaleGuard::new(),
            loading: false,
            error: None,
            selection: None,
            focused: config.autofocus,
        }
    }

    // ===== SELECTORS =====

    pub fn query(&self) -> &str {
        self.input.input()
    }

    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn displayed(&self) -> &[String] {
        self.list.displayed()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.list.active_index()
    }

    pub fn list(&self) -> &SuggestionList {
        &self.list
    }

    pub fn phase(&self) -> ListPhase {
        if !self.list.is_open() {
            return ListPhase::Closed;
        }
        if self.loading {
            return ListPhase::Loading;
        }
        match (self.list.displayed().is_empty(), self.input.is_blank()) {
            (false, _) => ListPhase::Results,
            (true, false) => ListPhase::Empty,
            (true, true) => ListPhase::Closed,
        }
    }

    /// Highlight spans for a displayed row against the current query.
    pub fn highlighted(&self, index: usize) -> Vec<Segment<'_>> {
        match self.list.item(index) {
            Some(item) => highlight(item, self.input.input()),
            None => Vec::new(),
        }
    }

    /// When the runtime must next call [`Autocomplete::poll_due`].
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    // ===== TEXT EVENTS =====

    /// Replace the whole query.
    pub fn on_text_change(&mut self, text: impl Into<String>, now: Instant) {
        self.input.set_input(text);
        self.apply_query_change(now);
    }

    pub fn insert_char(&mut self, c: char, now: Instant) {
        self.input.insert_char(c);
        self.apply_query_change(now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.input.backspace() {
            self.apply_query_change(now);
        }
    }

    pub fn delete(&mut self, now: Instant) {
        if self.input.delete() {
            self.apply_query_change(now);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.input.move_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.input.move_right();
    }

    pub fn move_cursor_home(&mut self) {
        self.input.move_home();
    }

    pub fn move_cursor_end(&mut self) {
        self.input.move_end();
    }

    fn apply_query_change(&mut self, now: Instant) {
        self.focus();
        self.list.reset_active();
        self.error = None;

        if self.input.is_blank() {
            // Nothing to search for: retire pending and in-flight work.
            self.debouncer.cancel();
            self.guard.invalidate();
            self.list.replace(Vec::new());
            self.loading = false;
            return;
        }

        self.loading = true;
        self.debouncer.call(self.input.input().to_string(), now);
    }

    // ===== DISPATCH / RESOLUTION =====

    /// Fire the debounced fetch if its quiet period has elapsed.
    pub fn poll_due(&mut self, now: Instant) -> Option<SearchRequest> {
        let query = self.debouncer.fire_if_due(now)?;
        let ticket = self.guard.dispatch();
        debug!(ticket = ticket.0, %query, "dispatching search");
        Some(SearchRequest { ticket, query })
    }

    /// Apply a provider outcome unless a newer request has been dispatched.
    ///
    /// Returns whether the outcome was applied.
    pub fn on_query_resolved(&mut self, ticket: RequestTicket, outcome: SearchOutcome) -> bool {
        if !self.guard.is_current(ticket) {
            debug!(
                ticket = ticket.0,
                latest = self.guard.last_dispatched().0,
                "discarding stale search response"
            );
            return false;
        }
        debug!(ticket = ticket.0, count = outcome.titles.len(), "applying search response");
        self.list.replace(outcome.titles);
        self.error = outcome.error.filter(|message| !message.is_empty());
        self.loading = false;
        true
    }

    // ===== SELECTION =====

    /// Commit `value` as the selection; closes the list and blurs the input.
    pub fn on_commit(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.input.set_input(value.clone());
        self.selection = Some(value);
        self.list.close();
        self.focused = false;
    }

    /// Commit an empty selection: clear the query and close the list.
    pub fn on_cancel(&mut self) {
        self.input.clear();
        self.selection = None;
        self.debouncer.cancel();
        self.guard.invalidate();
        self.list.replace(Vec::new());
        self.list.close();
        self.loading = false;
        self.focused = false;
    }

    // ===== FOCUS / POINTER =====

    pub fn on_focus(&mut self) {
        self.focus();
    }

    /// Blur or outside click.
    pub fn on_blur(&mut self) {
        self.focused = false;
        self.list.close();
    }

    fn focus(&mut self) {
        self.focused = true;
        self.list.open();
    }

    /// Mouse entered a displayed row.
    pub fn on_hover(&mut self, index: usize) -> bool {
        self.phase() == ListPhase::Results && self.list.hover(index)
    }

    /// Mouse clicked a displayed row.
    pub fn on_click(&mut self, index: usize) -> Option<String> {
        if self.phase() != ListPhase::Results {
            return None;
        }
        let value = self.list.item(index)?.to_string();
        self.on_commit(value.clone());
        Some(value)
    }

    // ===== KEYBOARD =====

    pub fn handle_nav(&mut self, key: NavKey) -> NavOutcome {
        if !self.focused {
            return NavOutcome::Ignored;
        }
        match key {
            NavKey::Down | NavKey::Up if self.phase() == ListPhase::Results => {
                if key == NavKey::Down {
                    self.list.move_down();
                } else {
                    self.list.move_up();
                }
                NavOutcome::Moved
            }
            NavKey::Down | NavKey::Up => NavOutcome::Ignored,
            NavKey::Enter => self.commit_from_enter(),
            NavKey::Escape => {
                self.on_cancel();
                NavOutcome::Cancelled
            }
        }
    }

    fn commit_from_enter(&mut self) -> NavOutcome {
        let active = if self.phase() == ListPhase::Results {
            self.list.active_item().map(str::to_string)
        } else {
            None
        };
        let value = match (active, self.enter_policy) {
            (Some(value), _) => value,
            (None, EnterPolicy::CommitTypedText) if !self.input.is_blank() => self.input.input().to_string(),
            (None, _) => return NavOutcome::Ignored,
        };
        self.on_commit(value.clone());
        NavOutcome::Committed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(limit: usize, policy: EnterPolicy) -> AutocompleteConfig {
        AutocompleteConfig {
            suggestions_limit: limit,
            enter_policy: policy,
            ..AutocompleteConfig::default()
        }
    }

    fn titles(items: &[&str]) -> SearchOutcome {
        SearchOutcome::ok(items.iter().map(|item| item.to_string()).collect())
    }

    /// Type `text`, let the debounce window elapse and return the request.
    fn type_and_dispatch(ac: &mut Autocomplete, text: &str, now: Instant) -> SearchRequest {
        ac.on_text_change(text, now);
        ac.poll_due(now + Duration::from_secs(1)).expect("request due")
    }

    #[test]
    fn batman_scenario_commits_second_row() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&config(2, EnterPolicy::CommitTypedText));
        let request = type_and_dispatch(&mut ac, "bat", now);
        assert_eq!(request.query, "bat");
        assert!(ac.on_query_resolved(request.ticket, titles(&["Batman", "The Batman Returns", "Combat"])));
        assert_eq!(ac.displayed(), ["Batman", "The Batman Returns"]);

        assert_eq!(ac.handle_nav(NavKey::Down), NavOutcome::Moved);
        assert_eq!(ac.handle_nav(NavKey::Down), NavOutcome::Moved);
        assert_eq!(
            ac.handle_nav(NavKey::Enter),
            NavOutcome::Committed("The Batman Returns".into())
        );
        assert_eq!(ac.selection(), Some("The Batman Returns"));
        assert_eq!(ac.query(), "The Batman Returns");
        assert_eq!(ac.phase(), ListPhase::Closed);
        assert!(!ac.is_focused());
    }

    #[test]
    fn rapid_typing_dispatches_once_for_last_text() {
        let start = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        let mut requests = Vec::new();
        for (offset, text) in [(0, "b"), (50, "ba"), (100, "bat")] {
            let now = start + Duration::from_millis(offset);
            ac.on_text_change(text, now);
            requests.extend(ac.poll_due(now));
        }
        for offset in (100..1000).step_by(50) {
            requests.extend(ac.poll_due(start + Duration::from_millis(offset)));
        }
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "bat");
    }

    #[test]
    fn out_of_order_response_is_dropped() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        let slow = type_and_dispatch(&mut ac, "ba", now);
        let fast = type_and_dispatch(&mut ac, "bat", now + Duration::from_secs(2));

        assert!(ac.on_query_resolved(fast.ticket, titles(&["Batman"])));
        assert!(!ac.on_query_resolved(slow.ticket, titles(&["Babe", "Barbie"])));
        assert_eq!(ac.displayed(), ["Batman"]);
        assert!(!ac.is_loading());
    }

    #[test]
    fn earlier_response_cannot_clear_loading_for_newer_request() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        let first = type_and_dispatch(&mut ac, "ba", now);
        let _second = type_and_dispatch(&mut ac, "bat", now + Duration::from_secs(2));
        assert!(!ac.on_query_resolved(first.ticket, titles(&["Babe"])));
        assert!(ac.is_loading());
        assert_eq!(ac.phase(), ListPhase::Loading);
    }

    #[test]
    fn text_change_sets_loading_and_clears_error() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        let request = type_and_dispatch(&mut ac, "bat", now);
        ac.on_query_resolved(request.ticket, SearchOutcome::failed("Error in the API call!"));
        assert_eq!(ac.error(), Some("Error in the API call!"));
        assert!(ac.displayed().is_empty());
        assert_eq!(ac.phase(), ListPhase::Empty);

        ac.insert_char('m', now);
        assert!(ac.is_loading());
        assert_eq!(ac.error(), None);
        assert_eq!(ac.phase(), ListPhase::Loading);
    }

    #[test]
    fn empty_query_dispatches_nothing_and_closes() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        let in_flight = type_and_dispatch(&mut ac, "b", now);
        ac.on_text_change("", now);
        assert!(!ac.is_loading());
        assert_eq!(ac.next_deadline(), None);
        assert_eq!(ac.poll_due(now + Duration::from_secs(5)), None);
        assert!(!ac.on_query_resolved(in_flight.ticket, titles(&["Batman"])));
        assert_eq!(ac.phase(), ListPhase::Closed);
        assert!(ac.highlighted(0).is_empty());
    }

    #[test]
    fn whitespace_query_is_treated_as_empty() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        ac.on_text_change("   ", now);
        assert_eq!(ac.poll_due(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn enter_without_active_row_follows_policy() {
        let now = Instant::now();
        let mut strict = Autocomplete::new(&config(5, EnterPolicy::RequireActive));
        let request = type_and_dispatch(&mut strict, "bat", now);
        strict.on_query_resolved(request.ticket, titles(&["Batman"]));
        assert_eq!(strict.handle_nav(NavKey::Enter), NavOutcome::Ignored);
        assert_eq!(strict.selection(), None);
        assert_eq!(strict.phase(), ListPhase::Results);

        let mut lenient = Autocomplete::new(&config(5, EnterPolicy::CommitTypedText));
        let request = type_and_dispatch(&mut lenient, "bat", now);
        lenient.on_query_resolved(request.ticket, titles(&["Batman"]));
        assert_eq!(lenient.handle_nav(NavKey::Enter), NavOutcome::Committed("bat".into()));
        assert_eq!(lenient.selection(), Some("bat"));
    }

    #[test]
    fn enter_on_blank_query_commits_nothing() {
        let mut ac = Autocomplete::new(&config(5, EnterPolicy::CommitTypedText));
        assert_eq!(ac.handle_nav(NavKey::Enter), NavOutcome::Ignored);
        ac.on_text_change("  ", Instant::now());
        assert_eq!(ac.handle_nav(NavKey::Enter), NavOutcome::Ignored);
        assert_eq!(ac.selection(), None);
        assert!(ac.is_focused());
    }

    #[test]
    fn editing_the_query_clears_the_active_row() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        let resolve_and_activate = |ac: &mut Autocomplete, text: &str| {
            let request = type_and_dispatch(ac, text, now);
            assert!(ac.on_query_resolved(request.ticket, titles(&["Batman", "Batman Begins"])));
            ac.handle_nav(NavKey::Down);
            ac.handle_nav(NavKey::Down);
            assert_eq!(ac.active_index(), Some(1));
        };

        resolve_and_activate(&mut ac, "bat");
        ac.insert_char('m', now);
        assert_eq!(ac.active_index(), None);

        resolve_and_activate(&mut ac, "batm");
        ac.backspace(now);
        assert_eq!(ac.active_index(), None);

        resolve_and_activate(&mut ac, "bat");
        ac.move_cursor_home();
        ac.delete(now);
        assert_eq!(ac.query(), "at");
        assert_eq!(ac.active_index(), None);

        resolve_and_activate(&mut ac, "bat");
        ac.on_text_change("batman", now);
        assert_eq!(ac.active_index(), None);
    }

    #[test]
    fn escape_clears_text_and_selection() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        ac.on_commit("Batman");
        ac.on_focus();
        ac.on_text_change("bat", now);
        assert_eq!(ac.handle_nav(NavKey::Escape), NavOutcome::Cancelled);
        assert_eq!(ac.query(), "");
        assert_eq!(ac.selection(), None);
        assert_eq!(ac.phase(), ListPhase::Closed);
        assert_eq!(ac.poll_due(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn hover_and_keyboard_share_one_cursor() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        let request = type_and_dispatch(&mut ac, "a", now);
        ac.on_query_resolved(request.ticket, titles(&["a1", "a2", "a3"]));
        assert!(ac.on_hover(2));
        ac.handle_nav(NavKey::Up);
        assert_eq!(ac.active_index(), Some(1));
        assert!(!ac.on_hover(7));
        assert_eq!(ac.on_click(0), Some("a1".into()));
        assert_eq!(ac.selection(), Some("a1"));
    }

    #[test]
    fn blur_closes_and_focus_reopens_results() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        let request = type_and_dispatch(&mut ac, "a", now);
        ac.on_query_resolved(request.ticket, titles(&["a1"]));
        ac.handle_nav(NavKey::Down);
        ac.on_blur();
        assert_eq!(ac.phase(), ListPhase::Closed);
        assert_eq!(ac.active_index(), None);
        assert_eq!(ac.handle_nav(NavKey::Down), NavOutcome::Ignored);
        ac.on_focus();
        assert_eq!(ac.phase(), ListPhase::Results);
    }

    #[test]
    fn no_autofocus_starts_closed_until_typing() {
        let config = AutocompleteConfig {
            autofocus: false,
            ..AutocompleteConfig::default()
        };
        let mut ac = Autocomplete::new(&config);
        assert!(!ac.is_focused());
        assert_eq!(ac.handle_nav(NavKey::Enter), NavOutcome::Ignored);
        ac.insert_char('x', Instant::now());
        assert!(ac.is_focused());
        assert_eq!(ac.phase(), ListPhase::Loading);
    }

    #[test]
    fn navigation_is_ignored_while_loading() {
        let now = Instant::now();
        let mut ac = Autocomplete::new(&AutocompleteConfig::default());
        let request = type_and_dispatch(&mut ac, "a", now);
        ac.on_query_resolved(request.ticket, titles(&["a1"]));
        ac.insert_char('b', now);
        assert_eq!(ac.handle_nav(NavKey::Down), NavOutcome::Ignored);
        assert_eq!(ac.active_index(), None);
    }

    #[test]
    fn active_index_stays_in_window_under_arbitrary_events() {
        let start = Instant::now();
        let mut ac = Autocomplete::new(&config(3, EnterPolicy::RequireActive));
        let pools: [&[&str]; 4] = [&[], &["a"], &["a", "b", "c", "d", "e"], &["a", "b"]];
        let mut seed: u64 = 0x5eed;
        let mut pending: Vec<SearchRequest> = Vec::new();

        for step in 0..2000u64 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let now = start + Duration::from_millis(step * 40);
            match (seed >> 33) % 6 {
                0 => ac.insert_char('a', now),
                1 => ac.backspace(now),
                2 => {
                    ac.handle_nav(NavKey::Down);
                }
                3 => {
                    ac.handle_nav(NavKey::Up);
                }
                4 => {
                    if !pending.is_empty() {
                        let index = (seed as usize) % pending.len();
                        let request = pending.swap_remove(index);
                        let pool = pools[(seed >> 7) as usize % pools.len()];
                        ac.on_query_resolved(request.ticket, titles(pool));
                    }
                }
                _ => {
                    ac.on_hover((seed >> 11) as usize % 6);
                }
            }
            pending.extend(ac.poll_due(now));

            let window = ac.displayed().len().min(ac.list().limit());
            if let Some(index) = ac.active_index() {
                assert!(index < window, "step {step}: index {index} outside window {window}");
            }
        }
    }
}
