//! Panel echoing the committed selection.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::helpers as th;

pub const SELECTION_LABEL: &str = "Your selection is: ";

#[derive(Debug, Default)]
pub struct SelectionComponent;

impl Component for SelectionComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme;
        let value = match app.autocomplete.selection() {
            Some(selection) if !selection.is_empty() => Span::styled(selection, theme.accent_primary_style()),
            _ => Span::styled("nothing yet", theme.text_muted_style()),
        };
        let line = Line::from(vec![Span::styled(SELECTION_LABEL, theme.text_secondary_style()), value]);
        let panel = Paragraph::new(line).block(th::block(theme, Some(" Selection "), false));
        frame.render_widget(panel, rect);
    }
}
