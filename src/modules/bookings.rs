//! My Bookings

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{BookingRecord, Repository};
use crate::ui::cards;
use crate::ui::layout::{card_grid, centered_rect};

const HEADER_HEIGHT: u16 = 3;

pub const EMPTY_TITLE: &str = "No Bookings Yet";
pub const EMPTY_HINT: &str = "Your booked listings will appear here.";

pub struct BookingsView {
    bookings: Vec<BookingRecord>,
    selected: usize,
}

impl BookingsView {
    pub fn new(data: &dyn Repository) -> Self {
        Self::with_source(data.bookings().to_vec())
    }

    pub fn with_source(bookings: Vec<BookingRecord>) -> Self {
        Self {
            bookings,
            selected: 0,
        }
    }

    pub fn is_empty_state(&self) -> bool {
        self.bookings.is_empty()
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

impl Module for BookingsView {
    fn title(&self) -> &'static str {
        "My Bookings"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        let last = self.bookings.len().saturating_sub(1);
        match key.code {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right => {
                self.selected = (self.selected + 1).min(last);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, _ctx: &Context) -> Action {
        let grid = card_grid(
            Self::body(area),
            self.bookings.len(),
            cards::BOOKING_CARD_WIDTH,
            cards::BOOKING_CARD_HEIGHT,
            self.selected,
        );
        if let Some(index) = grid.index_at(col, row) {
            self.selected = index;
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let header = Paragraph::new(Line::from(Span::styled(self.title(), theme.heading())))
            .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border_style(false)));
        frame.render_widget(
            header,
            Rect {
                height: HEADER_HEIGHT.min(area.height),
                ..area
            },
        );

        let body = Self::body(area);
        if self.is_empty_state() {
            let lines = vec![
                Line::from(Span::styled("◫", theme.secondary())),
                Line::default(),
                Line::from(Span::styled(EMPTY_TITLE, theme.heading())),
                Line::from(Span::styled(EMPTY_HINT, theme.secondary())),
            ];
            let empty = Paragraph::new(lines).alignment(Alignment::Center);
            frame.render_widget(empty, centered_rect(80, 40, body));
            return;
        }

        let grid = card_grid(
            body,
            self.bookings.len(),
            cards::BOOKING_CARD_WIDTH,
            cards::BOOKING_CARD_HEIGHT,
            self.selected,
        );
        for (index, cell) in grid.cells {
            let card = cards::booking_card(&self.bookings[index], index == self.selected, theme);
            frame.render_widget(card, cell);
        }
    }
}
