//! Governance proposals, one card per row

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{ProposalRecord, Repository};
use crate::ui::cards;
use crate::ui::layout::card_grid;

const HEADER_HEIGHT: u16 = 3;

pub struct GovernanceView {
    proposals: Vec<ProposalRecord>,
    selected: usize,
}

impl GovernanceView {
    pub fn new(data: &dyn Repository) -> Self {
        Self {
            proposals: data.proposals().to_vec(),
            selected: 0,
        }
    }

    pub fn selected(&self) -> Option<&ProposalRecord> {
        self.proposals.get(self.selected)
    }

    fn body(area: Rect) -> Rect {
        let header = HEADER_HEIGHT.min(area.height);
        Rect {
            y: area.y + header,
            height: area.height - header,
            ..area
        }
    }
}

impl Module for GovernanceView {
    fn title(&self) -> &'static str {
        "Governance"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        let last = self.proposals.len().saturating_sub(1);
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(last);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Enter if self.selected().is_some() => Action::inert("Voting"),
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, _ctx: &Context) -> Action {
        let body = Self::body(area);
        let grid = card_grid(
            body,
            self.proposals.len(),
            body.width,
            cards::PROPOSAL_CARD_HEIGHT,
            self.selected,
        );
        if let Some(index) = grid.index_at(col, row) {
            self.selected = index;
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let header = Paragraph::new(Line::from(vec![
            Span::styled(self.title(), theme.heading()),
            Span::styled(
                format!("  {} proposals", self.proposals.len()),
                theme.secondary(),
            ),
        ]))
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border_style(false)));
        frame.render_widget(
            header,
            Rect {
                height: HEADER_HEIGHT.min(area.height),
                ..area
            },
        );

        let body = Self::body(area);
        let grid = card_grid(
            body,
            self.proposals.len(),
            body.width,
            cards::PROPOSAL_CARD_HEIGHT,
            self.selected,
        );
        for (index, cell) in grid.cells {
            let card = cards::proposal_card(&self.proposals[index], index == self.selected, theme);
            frame.render_widget(card, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dataset;

    #[test]
    fn click_selects_proposal_row() {
        let mut view = GovernanceView::new(&Dataset::mock());
        let area = Rect::new(0, 0, 80, 30);
        // Header takes three rows, cards are six high.
        view.handle_click(area, 10, 3 + 6 + 2, &Context::default());
        assert_eq!(view.selected, 1);
    }

    #[test]
    fn enter_is_inert() {
        let mut view = GovernanceView::new(&Dataset::mock());
        let action = view.handle_key(
            KeyEvent::new(KeyCode::Enter, crossterm::event::KeyModifiers::NONE),
            &Context::default(),
        );
        assert_eq!(action, Action::inert("Voting"));
    }
}
