//! Single-line strip of key bindings shown at the bottom of the screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::component::Component;

const HINTS: &[(&str, &str)] = &[
    ("↑/↓", " move  "),
    ("Enter", " select  "),
    ("Esc", " clear  "),
    ("Tab", " focus  "),
    ("Ctrl-C", " quit"),
];

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme;
        let key_style = theme.accent_primary_style().add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::styled("Hints: ", theme.text_muted_style())];
        for (key, label) in HINTS {
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(*label, theme.text_muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
