//! Widgets for the input line and the suggestion dropdown.
//!
//! Pure builders over [`App`] state; the component decides where they go.

use moviesearch_engine::{ListPhase, Segment};
use ratatui::prelude::*;
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::theme::helpers as th;

pub const PLACEHOLDER: &str = "Please type something...";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No results...";
pub const HIGHLIGHT_SYMBOL: &str = "› ";

/// Input box: current query or placeholder, spinner while loading.
pub fn input_paragraph<'a>(app: &'a App) -> Paragraph<'a> {
    let theme = &*app.theme;
    let autocomplete = &app.autocomplete;
    let mut block = th::block(theme, Some(" Movie "), autocomplete.is_focused());
    if autocomplete.is_loading() {
        block = block.title_top(Line::from(format!(" {} ", app.throbber())).style(theme.accent_primary_style()).right_aligned());
    }

    let line = if autocomplete.query().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, theme.text_muted_style()))
    } else {
        Line::from(Span::styled(autocomplete.query(), theme.text_primary_style()))
    };
    Paragraph::new(line).block(block)
}

/// Rows needed by the dropdown for the current phase, borders included.
pub fn dropdown_height(app: &App) -> u16 {
    match app.autocomplete.phase() {
        ListPhase::Closed => 0,
        ListPhase::Loading | ListPhase::Empty => 3,
        ListPhase::Results => u16::try_from(app.autocomplete.displayed().len())
            .unwrap_or(u16::MAX)
            .saturating_add(2),
    }
}

/// Single-line notice shown instead of results.
pub fn notice<'a>(theme: &dyn Theme, text: &'a str) -> Paragraph<'a> {
    Paragraph::new(Span::styled(text, theme.text_muted_style().italic())).block(dropdown_block(theme))
}

/// Suggestion list with query matches emphasized.
pub fn suggestion_list<'a>(app: &'a App) -> List<'a> {
    let theme = &*app.theme;
    let items: Vec<ListItem> = (0..app.autocomplete.displayed().len())
        .map(|index| ListItem::new(highlighted_line(theme, app.autocomplete.highlighted(index))))
        .collect();

    List::new(items)
        .block(dropdown_block(theme))
        .highlight_style(theme.selection_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL)
}

pub fn dropdown_block(theme: &dyn Theme) -> Block<'static> {
    th::block(theme, None, false)
}

fn highlighted_line<'a>(theme: &dyn Theme, segments: Vec<Segment<'a>>) -> Line<'a> {
    let spans: Vec<Span> = segments
        .into_iter()
        .map(|segment| {
            let style = if segment.is_match {
                theme.search_highlight_style()
            } else {
                theme.text_primary_style()
            };
            Span::styled(segment.text, style)
        })
        .collect();
    Line::from(spans)
}
