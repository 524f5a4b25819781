//! Suggestion list state: visibility, the candidate window and the shared
//! keyboard/mouse cursor.
//!
//! Only the first `limit` candidates are ever displayed or reachable. The
//! active index always points inside that window or is `None` (nothing
//! highlighted).

/// Visible state of the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Closed,
    Loading,
    Empty,
    Results,
}

/// Navigation keys understood by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

#[derive(Debug, Clone)]
pub struct SuggestionList {
    limit: usize,
    candidates: Vec<String>,
    active: Option<usize>,
    open: bool,
}

impl SuggestionList {
    /// A zero limit is treated as one.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            candidates: Vec::new(),
            active: None,
            open: false,
        }
    }

    // ===== SELECTORS =====

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The limit-bounded window actually shown to the user.
    pub fn displayed(&self) -> &[String] {
        let end = self.candidates.len().min(self.limit);
        &self.candidates[..end]
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<&str> {
        self.active.and_then(|index| self.displayed().get(index)).map(String::as_str)
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.displayed().get(index).map(String::as_str)
    }

    // ===== REDUCERS =====

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the list and drop the cursor.
    pub fn close(&mut self) {
        self.open = false;
        self.active = None;
    }

    pub fn reset_active(&mut self) {
        self.active = None;
    }

    /// Swap in a new candidate list wholesale.
    pub fn replace(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
        self.active = None;
    }

    /// Move the cursor down one row, stopping at the last displayed row.
    pub fn move_down(&mut self) {
        let len = self.displayed().len();
        if len == 0 {
            return;
        }
        self.active = Some(match self.active {
            None => 0,
            Some(index) => (index + 1).min(len - 1),
        });
    }

    /// Move the cursor up one row, stopping at the first row. No-op when
    /// nothing is active.
    pub fn move_up(&mut self) {
        if let Some(index) = self.active {
            self.active = Some(index.saturating_sub(1));
        }
    }

    /// Point the cursor at a hovered row. Returns `false` if the row is not
    /// displayed.
    pub fn hover(&mut self, index: usize) -> bool {
        if index < self.displayed().len() {
            self.active = Some(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(limit: usize, items: &[&str]) -> SuggestionList {
        let mut list = SuggestionList::new(limit);
        list.open();
        list.replace(items.iter().map(|item| item.to_string()).collect());
        list
    }

    #[test]
    fn displayed_window_respects_limit() {
        let list = list_with(2, &["Batman", "The Batman Returns", "Combat"]);
        assert_eq!(list.displayed(), ["Batman", "The Batman Returns"]);
    }

    #[test]
    fn arrow_down_clamps_at_last_displayed_row() {
        let mut list = list_with(2, &["a", "b", "c"]);
        list.move_down();
        list.move_down();
        list.move_down();
        assert_eq!(list.active_index(), Some(1));
        assert_eq!(list.active_item(), Some("b"));
    }

    #[test]
    fn arrow_up_stops_at_first_row_and_ignores_none() {
        let mut list = list_with(5, &["a", "b"]);
        list.move_up();
        assert_eq!(list.active_index(), None);
        list.move_down();
        list.move_up();
        list.move_up();
        assert_eq!(list.active_index(), Some(0));
    }

    #[test]
    fn navigation_on_empty_list_is_noop() {
        let mut list = list_with(3, &[]);
        list.move_down();
        assert_eq!(list.active_index(), None);
    }

    #[test]
    fn hover_outside_window_is_rejected() {
        let mut list = list_with(1, &["a", "b"]);
        assert!(!list.hover(1));
        assert!(list.hover(0));
        assert_eq!(list.active_index(), Some(0));
    }

    #[test]
    fn close_and_replace_reset_cursor() {
        let mut list = list_with(3, &["a", "b"]);
        list.move_down();
        list.close();
        assert_eq!(list.active_index(), None);
        assert!(!list.is_open());
        list.open();
        list.move_down();
        list.replace(vec!["z".into()]);
        assert_eq!(list.active_index(), None);
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        assert_eq!(SuggestionList::new(0).limit(), 1);
    }
}
