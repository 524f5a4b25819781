//! Component system for the movie search TUI.
//!
//! Components are stateless views over [`App`]: they translate terminal
//! events into controller calls and render themselves into a provided
//! `Rect`. All durable state lives in `App`, so the runtime collects due
//! searches from it directly after each event instead of from components.

use crossterm::event::{KeyEvent, MouseEvent};
use moviesearch_types::Msg;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;

pub(crate) trait Component: std::fmt::Debug {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) {}

    /// Handle a key press routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) {}

    /// Handle a mouse event. Components hit-test against areas recorded in
    /// `App::layout` during the last render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) {}

    /// Draw into `rect`.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
