use crossterm::event::{KeyEvent, MouseEvent};
use moviesearch_types::Msg;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding, Paragraph};

use super::components::{AutocompleteComponent, Component, HintBarComponent, SelectionComponent, SnackbarComponent};
use super::theme::helpers as th;
use crate::app::App;

pub const TITLE: &str = "Welcome to Movie Search!";
const MAX_CONTENT_WIDTH: u16 = 80;

/// Root view: header, autocomplete, selection panel and hints. The error
/// banner overlays the bottom of the autocomplete area.
#[derive(Debug, Default)]
pub struct MainView {
    autocomplete_view: AutocompleteComponent,
    selection_view: SelectionComponent,
    hint_bar_view: HintBarComponent,
    snackbar_view: SnackbarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) {
        app.update(&msg, std::time::Instant::now());
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) {
        self.autocomplete_view.handle_key_events(app, key);
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) {
        self.autocomplete_view.handle_mouse_events(app, mouse);
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(th::panel_style(&*app.theme)), rect);

        let [content] = Layout::horizontal([Constraint::Max(MAX_CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(rect);
        let [header, body, selection, hints] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(content);

        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            app.theme.accent_primary_style().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::vertical(1)));
        frame.render_widget(title, header);

        self.autocomplete_view.render(frame, body, app);
        self.selection_view.render(frame, selection, app);
        self.hint_bar_view.render(frame, hints, app);
        self.snackbar_view.render(frame, body, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::NordTheme;
    use moviesearch_types::{AutocompleteConfig, Effect, SearchOutcome};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_title_selection_and_error_banner() {
        let config = AutocompleteConfig {
            debounce_delay_ms: 0,
            ..AutocompleteConfig::default()
        };
        let mut app = App::new(&config, Box::new(NordTheme::new()));
        let mut view = MainView::new();

        let now = Instant::now();
        app.autocomplete.on_text_change("alien", now);
        let effects = app.poll_effects(now);
        let Some(Effect::Search(request)) = effects.into_iter().next() else {
            panic!("expected a search");
        };
        view.handle_message(
            &mut app,
            Msg::SearchCompleted {
                ticket: request.ticket,
                outcome: SearchOutcome::failed("Error in the API call! (503 Service Unavailable)"),
            },
        );
        app.autocomplete.on_commit("Alien");

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| view.render(frame, frame.area(), &mut app)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains(TITLE), "{text}");
        assert!(text.contains("Your selection is: Alien"), "{text}");
        assert!(text.contains("Error in the API call!"), "{text}");
    }
}
