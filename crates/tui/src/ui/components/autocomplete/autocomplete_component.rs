//! Autocomplete widget: the query input and its suggestion dropdown.
//!
//! Keyboard
//! - printable characters, Backspace, Delete edit the query
//! - Left/Right/Home/End move the cursor
//! - Up/Down move the active suggestion
//! - Enter commits, Esc cancels
//! - Tab focuses the input
//!
//! Mouse
//! - hovering a row makes it active, clicking it commits
//! - clicking the input focuses it, clicking outside the widget blurs it

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use moviesearch_engine::{ListPhase, NavKey, NavOutcome};
use ratatui::prelude::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use super::suggestions_view as view;
use crate::app::App;
use crate::ui::components::component::Component;

const INPUT_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct AutocompleteComponent;

impl AutocompleteComponent {
    pub fn new() -> Self {
        Self
    }

    fn navigate(app: &mut App, key: NavKey) {
        match app.autocomplete.handle_nav(key) {
            NavOutcome::Committed(value) => info!(selection = %value, "selection committed"),
            NavOutcome::Cancelled => info!("selection cleared"),
            NavOutcome::Moved | NavOutcome::Ignored => {}
        }
    }

    /// Displayed-row index under a screen position, if any.
    fn row_at(app: &App, position: Position) -> Option<usize> {
        let rows = app.layout.list_rows_area;
        if app.autocomplete.phase() != ListPhase::Results || !rows.contains(position) {
            return None;
        }
        let index = app.list_state.offset() + usize::from(position.y - rows.y);
        (index < app.autocomplete.displayed().len()).then_some(index)
    }
}

impl Component for AutocompleteComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) {
        let now = Instant::now();
        match key.code {
            KeyCode::Up => Self::navigate(app, NavKey::Up),
            KeyCode::Down => Self::navigate(app, NavKey::Down),
            KeyCode::Enter => Self::navigate(app, NavKey::Enter),
            KeyCode::Esc => Self::navigate(app, NavKey::Escape),
            KeyCode::Tab => app.autocomplete.on_focus(),
            KeyCode::Backspace => app.autocomplete.backspace(now),
            KeyCode::Delete => app.autocomplete.delete(now),
            KeyCode::Left => app.autocomplete.move_cursor_left(),
            KeyCode::Right => app.autocomplete.move_cursor_right(),
            KeyCode::Home => app.autocomplete.move_cursor_home(),
            KeyCode::End => app.autocomplete.move_cursor_end(),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                app.autocomplete.insert_char(c, now)
            }
            _ => {}
        }
        app.sync(now);
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(index) = Self::row_at(app, position) {
                    app.autocomplete.on_hover(index);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = Self::row_at(app, position) {
                    if let Some(value) = app.autocomplete.on_click(index) {
                        info!(selection = %value, "selection committed");
                    }
                } else if app.layout.input_area.contains(position) {
                    app.autocomplete.on_focus();
                } else if !app.layout.widget_area.contains(position) {
                    app.autocomplete.on_blur();
                }
            }
            MouseEventKind::ScrollDown if app.layout.list_rows_area.contains(position) => {
                Self::navigate(app, NavKey::Down);
            }
            MouseEventKind::ScrollUp if app.layout.list_rows_area.contains(position) => {
                Self::navigate(app, NavKey::Up);
            }
            _ => return,
        }
        app.sync(Instant::now());
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let dropdown = view::dropdown_height(app).min(rect.height.saturating_sub(INPUT_HEIGHT));
        let [input_area, list_area, _] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(dropdown),
            Constraint::Min(0),
        ])
        .areas(rect);

        frame.render_widget(view::input_paragraph(app), input_area);
        if app.autocomplete.is_focused() {
            let inner = view::dropdown_block(&*app.theme).inner(input_area);
            let typed = u16::try_from(app.autocomplete.input().before_cursor().width()).unwrap_or(u16::MAX);
            let x = inner.x.saturating_add(typed).min(inner.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }

        let mut rows_area = Rect::default();
        match app.autocomplete.phase() {
            ListPhase::Closed => {}
            ListPhase::Loading => frame.render_widget(view::notice(&*app.theme, view::LOADING_TEXT), list_area),
            ListPhase::Empty => frame.render_widget(view::notice(&*app.theme, view::EMPTY_TEXT), list_area),
            ListPhase::Results => {
                rows_area = view::dropdown_block(&*app.theme).inner(list_area);
                let list = view::suggestion_list(app);
                let mut list_state = app.list_state.clone();
                frame.render_stateful_widget(list, list_area, &mut list_state);
                app.list_state = list_state;
            }
        }

        app.layout.widget_area = Rect {
            height: input_area.height + list_area.height,
            ..input_area
        };
        app.layout.input_area = input_area;
        app.layout.list_rows_area = rows_area;
    }
}
