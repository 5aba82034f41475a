//! My Listings: card grid narrowed by a status filter dropdown

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use tracing::debug;

use crate::core::{Action, Context, Module, Toggle};
use crate::domain::{ListingFilter, ListingRecord, Repository};
use crate::ui::cards;
use crate::ui::layout::{card_grid, rect_contains, rect_inner};

const HEADER_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 20;

pub struct ListingsView {
    source: Vec<ListingRecord>,
    filter: ListingFilter,
    dropdown: Toggle,
    dropdown_cursor: usize,
    selected: usize,
}

impl ListingsView {
    pub fn new(data: &dyn Repository) -> Self {
        Self::with_source(data.listings().to_vec())
    }

    pub fn with_source(source: Vec<ListingRecord>) -> Self {
        Self {
            source,
            filter: ListingFilter::default(),
            dropdown: Toggle::default(),
            dropdown_cursor: 0,
            selected: 0,
        }
    }

    pub fn filter(&self) -> ListingFilter {
        self.filter
    }

    /// Select a filter; always closes the dropdown.
    pub fn set_filter(&mut self, filter: ListingFilter) {
        if self.filter != filter {
            debug!(from = self.filter.label(), to = filter.label(), "listing filter changed");
            self.selected = 0;
        }
        self.filter = filter;
        self.dropdown_cursor = filter.index();
        self.dropdown.close();
    }

    /// Recomputed on every call.
    pub fn filtered(&self) -> Vec<&ListingRecord> {
        self.filter.apply(&self.source)
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown.toggle();
        if self.dropdown.is_open() {
            self.dropdown_cursor = self.filter.index();
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown.close();
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if forward {
            (self.selected + 1).min(len - 1)
        } else {
            self.selected.saturating_sub(1)
        };
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) -> Action {
        let last = ListingFilter::ALL.len() - 1;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.dropdown_cursor = (self.dropdown_cursor + 1).min(last);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.dropdown_cursor = self.dropdown_cursor.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.set_filter(ListingFilter::ALL[self.dropdown_cursor.min(last)]);
            }
            KeyCode::Esc | KeyCode::Char('f') => self.dropdown.close(),
            _ => {}
        }
        Action::None
    }
}

pub fn filter_button_rect(area: Rect) -> Rect {
    let width = BUTTON_WIDTH.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: HEADER_HEIGHT.min(area.height),
    }
}

pub fn dropdown_rect(area: Rect) -> Rect {
    let button = filter_button_rect(area);
    let top = button.y + button.height;
    let bottom = area.y + area.height;
    Rect {
        y: top,
        height: (ListingFilter::ALL.len() as u16 + 2).min(bottom.saturating_sub(top)),
        ..button
    }
}

fn grid_area(area: Rect) -> Rect {
    let header = HEADER_HEIGHT.min(area.height);
    Rect {
        y: area.y + header,
        height: area.height - header,
        ..area
    }
}

impl Module for ListingsView {
    fn title(&self) -> &'static str {
        "My Listings"
    }

    fn captures_input(&self) -> bool {
        self.dropdown.is_open()
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        if self.dropdown.is_open() {
            return self.handle_dropdown_key(key);
        }
        match key.code {
            KeyCode::Char('f') => {
                self.toggle_dropdown();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Enter if !self.filtered().is_empty() => Action::inert("Listing details"),
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, _ctx: &Context) -> Action {
        let button = filter_button_rect(area);
        if self.dropdown.is_open() {
            let options = rect_inner(dropdown_rect(area));
            if rect_contains(options, col, row) {
                let index = (row - options.y) as usize;
                if let Some(filter) = ListingFilter::ALL.get(index) {
                    self.set_filter(*filter);
                }
            } else {
                // Clicking the button or anywhere outside dismisses.
                self.dropdown.close();
            }
            return Action::None;
        }

        if rect_contains(button, col, row) {
            self.toggle_dropdown();
            return Action::None;
        }

        let count = self.filtered().len();
        let grid = card_grid(
            grid_area(area),
            count,
            cards::LISTING_CARD_WIDTH,
            cards::LISTING_CARD_HEIGHT,
            self.selected,
        );
        if let Some(index) = grid.index_at(col, row) {
            self.selected = index;
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let listings = self.filtered();

        let header = Paragraph::new(Line::from(vec![
            Span::styled(self.title(), theme.heading()),
            Span::styled(format!("  {} shown", listings.len()), theme.secondary()),
        ]))
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border_style(false)));
        frame.render_widget(
            header,
            Rect {
                height: HEADER_HEIGHT.min(area.height),
                ..area
            },
        );

        let arrow = if self.dropdown.is_open() { "▴" } else { "▾" };
        let button = Paragraph::new(Line::from(vec![
            Span::styled("Filter: ", theme.secondary()),
            Span::styled(self.filter.label(), theme.heading()),
            Span::raw(format!(" {arrow}")),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(self.dropdown.is_open())),
        );
        frame.render_widget(button, filter_button_rect(area));

        let grid_rect = grid_area(area);
        if listings.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No listings match this filter",
                theme.secondary(),
            )));
            frame.render_widget(empty, rect_inner(grid_rect));
        } else {
            let grid = card_grid(
                grid_rect,
                listings.len(),
                cards::LISTING_CARD_WIDTH,
                cards::LISTING_CARD_HEIGHT,
                self.selected,
            );
            for (index, cell) in grid.cells {
                let card = cards::listing_card(listings[index], index == self.selected, theme);
                frame.render_widget(card, cell);
            }
        }

        if self.dropdown.is_open() {
            let rect = dropdown_rect(area);
            frame.render_widget(Clear, rect);
            let options: Vec<Line> = ListingFilter::ALL
                .iter()
                .enumerate()
                .map(|(index, filter)| {
                    let mark = if *filter == self.filter { "●" } else { "○" };
                    let style = if index == self.dropdown_cursor {
                        Style::default()
                            .fg(theme.text_primary)
                            .bg(theme.accent)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        theme.text()
                    };
                    let width = rect.width.saturating_sub(2) as usize;
                    Line::from(Span::styled(
                        format!("{:<width$}", format!(" {mark} {}", filter.label())),
                        style,
                    ))
                })
                .collect();
            let dropdown = Paragraph::new(options).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style(true))
                    .style(Style::default().bg(theme.surface)),
            );
            frame.render_widget(dropdown, rect);
        }
    }
}
