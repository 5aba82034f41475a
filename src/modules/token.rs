//! Top Up Token: a titled, otherwise empty page

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::core::{Action, Context, Module};

#[derive(Debug, Default)]
pub struct TokenView;

impl Module for TokenView {
    fn title(&self) -> &'static str {
        "Top Up Token"
    }

    fn handle_key(&mut self, _key: KeyEvent, _ctx: &Context) -> Action {
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(ctx.theme.border_style(false))
            .title(Span::styled(format!(" {} ", self.title()), ctx.theme.heading()));
        frame.render_widget(block, area);
    }
}
