//! Module trait implemented by every view container

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// A view container: owns its local state and renders one page
pub trait Module {
    fn title(&self) -> &'static str;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    /// Handle a left click at `(col, row)` inside the view's `area`.
    fn handle_click(&mut self, _area: Rect, _col: u16, _row: u16, _ctx: &Context) -> Action {
        Action::None
    }

    /// True while a popup inside the view should receive every key.
    fn captures_input(&self) -> bool {
        false
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);
}
