use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::helpers as th;

/// Error banner pinned to the bottom of the given area.
#[derive(Debug, Default)]
pub struct SnackbarComponent;

impl SnackbarComponent {
    /// Banner rectangle: full width, one text row plus padding, at the bottom.
    fn banner_area(rect: Rect) -> Rect {
        let height = 3.min(rect.height);
        Rect {
            x: rect.x,
            y: rect.y + rect.height.saturating_sub(height),
            width: rect.width,
            height,
        }
    }
}

impl Component for SnackbarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(message) = app.snackbar.visible_message() else {
            return;
        };
        let area = Self::banner_area(rect);
        let style = th::snackbar_style(&*app.theme);
        let banner = Paragraph::new(format!(" {message} "))
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().style(style).padding(Padding::vertical(1)));

        frame.render_widget(Clear, area);
        frame.render_widget(banner, area);
    }
}
