//! Tutor catalog with a side panel of filter controls
//!
//! The checkboxes and the price slider keep their marks but never narrow the
//! tutor list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{Repository, TutorRecord};
use crate::ui::cards;
use crate::ui::layout::{card_grid, rect_contains, rect_inner};

const FILTER_PANEL_WIDTH: u16 = 28;
const TUTOR_CARD_WIDTH: u16 = 44;
const PRICE_MAX: u8 = 100;
const PRICE_STEP: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub label: String,
    pub checked: bool,
}

impl Checkbox {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            checked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilters {
    pub tags: Vec<Checkbox>,
    pub price: u8,
    pub methods: Vec<Checkbox>,
}

impl Default for CatalogFilters {
    fn default() -> Self {
        Self {
            tags: (0..4).map(|_| Checkbox::new("NextJS")).collect(),
            price: 50,
            methods: vec![Checkbox::new("Video Call"), Checkbox::new("Chat")],
        }
    }
}

/// One focusable row of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterItem {
    Tag(usize),
    Price,
    Method(usize),
}

impl CatalogFilters {
    pub fn items(&self) -> Vec<FilterItem> {
        let mut items: Vec<FilterItem> = (0..self.tags.len()).map(FilterItem::Tag).collect();
        items.push(FilterItem::Price);
        items.extend((0..self.methods.len()).map(FilterItem::Method));
        items
    }

    /// Line of the panel's inner area holding `item`.
    fn line_of(&self, item: FilterItem) -> u16 {
        let tags = self.tags.len() as u16;
        match item {
            FilterItem::Tag(i) => 1 + i as u16,
            FilterItem::Price => tags + 3,
            FilterItem::Method(i) => tags + 7 + i as u16,
        }
    }

    fn item_at_line(&self, line: u16) -> Option<FilterItem> {
        self.items().into_iter().find(|item| self.line_of(*item) == line)
    }

    pub fn toggle(&mut self, item: FilterItem) {
        let checkbox = match item {
            FilterItem::Tag(i) => self.tags.get_mut(i),
            FilterItem::Method(i) => self.methods.get_mut(i),
            FilterItem::Price => None,
        };
        if let Some(checkbox) = checkbox {
            checkbox.checked = !checkbox.checked;
        }
    }

    pub fn nudge_price(&mut self, up: bool) {
        self.price = if up {
            self.price.saturating_add(PRICE_STEP).min(PRICE_MAX)
        } else {
            self.price.saturating_sub(PRICE_STEP)
        };
    }

    /// Snap a click on a slider of `width` cells to the nearest step.
    pub fn set_price_from_offset(&mut self, offset: u16, width: u16) {
        let span = width.saturating_sub(1).max(1) as u32;
        let raw = (offset.min(width) as u32 * PRICE_MAX as u32 + span / 2) / span;
        let step = PRICE_STEP as u32;
        let snapped = ((raw + step / 2) / step) * step;
        self.price = snapped.min(PRICE_MAX as u32) as u8;
    }
}

pub fn slider_line(price: u8, width: usize) -> String {
    let width = width.max(2);
    let knob = price.min(PRICE_MAX) as usize * (width - 1) / PRICE_MAX as usize;
    (0..width)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFocus {
    Filters,
    Tutors,
}

pub struct CatalogView {
    tutors: Vec<TutorRecord>,
    filters: CatalogFilters,
    focus: CatalogFocus,
    filter_cursor: usize,
    selected: usize,
}

impl CatalogView {
    pub fn new(data: &dyn Repository) -> Self {
        Self {
            tutors: data.tutors().to_vec(),
            filters: CatalogFilters::default(),
            focus: CatalogFocus::Tutors,
            filter_cursor: 0,
            selected: 0,
        }
    }

    pub fn filters(&self) -> &CatalogFilters {
        &self.filters
    }

    pub fn focus(&self) -> CatalogFocus {
        self.focus
    }

    /// Every tutor, whatever the filter marks say.
    pub fn visible_tutors(&self) -> &[TutorRecord] {
        &self.tutors
    }

    fn split(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FILTER_PANEL_WIDTH), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        let items = self.filters.items();
        let last = items.len().saturating_sub(1);
        let current = items.get(self.filter_cursor.min(last)).copied();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.filter_cursor = (self.filter_cursor + 1).min(last);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.filter_cursor = self.filter_cursor.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(item) = current {
                    self.filters.toggle(item);
                }
            }
            KeyCode::Right | KeyCode::Char('+') if current == Some(FilterItem::Price) => {
                self.filters.nudge_price(true);
            }
            KeyCode::Left | KeyCode::Char('-') if current == Some(FilterItem::Price) => {
                self.filters.nudge_price(false);
            }
            _ => {}
        }
    }

    fn render_filters(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let focused = self.focus == CatalogFocus::Filters;
        let inner = rect_inner(area);
        let items = self.filters.items();

        let item_style = |item: FilterItem| {
            if focused && items.get(self.filter_cursor) == Some(&item) {
                Style::default()
                    .fg(theme.text_primary)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme.text()
            }
        };
        let checkbox_line = |item: FilterItem, checkbox: &Checkbox| {
            let mark = if checkbox.checked { "[x]" } else { "[ ]" };
            Line::from(Span::styled(
                format!("{mark} {}", checkbox.label),
                item_style(item),
            ))
        };

        let mut lines = vec![Line::from(Span::styled("Tags", theme.heading()))];
        for (i, tag) in self.filters.tags.iter().enumerate() {
            lines.push(checkbox_line(FilterItem::Tag(i), tag));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Price", theme.heading())));
        lines.push(Line::from(Span::styled(
            slider_line(self.filters.price, inner.width as usize),
            item_style(FilterItem::Price),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", self.filters.price), theme.text()),
            Span::styled("1G SWT", theme.secondary()),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Method", theme.heading())));
        for (i, method) in self.filters.methods.iter().enumerate() {
            lines.push(checkbox_line(FilterItem::Method(i), method));
        }

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filters ")
                .border_style(theme.border_style(focused))
                .style(Style::default().bg(theme.surface)),
        );
        frame.render_widget(panel, area);
    }

    fn tutor_grid_area(area: Rect) -> Rect {
        rect_inner(area)
    }
}

impl Module for CatalogView {
    fn title(&self) -> &'static str {
        "Catalog"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Esc => return Action::CloseOverlay,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    CatalogFocus::Filters => CatalogFocus::Tutors,
                    CatalogFocus::Tutors => CatalogFocus::Filters,
                };
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            CatalogFocus::Filters => {
                self.handle_filter_key(key);
                Action::None
            }
            CatalogFocus::Tutors => {
                let last = self.tutors.len().saturating_sub(1);
                match key.code {
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.selected = (self.selected + 1).min(last);
                        Action::None
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.selected = self.selected.saturating_sub(1);
                        Action::None
                    }
                    KeyCode::Enter if !self.tutors.is_empty() => Action::inert("Book Now"),
                    _ => Action::None,
                }
            }
        }
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, _ctx: &Context) -> Action {
        let (filters, tutors) = Self::split(area);
        if rect_contains(filters, col, row) {
            self.focus = CatalogFocus::Filters;
            let inner = rect_inner(filters);
            if !rect_contains(inner, col, row) {
                return Action::None;
            }
            if let Some(item) = self.filters.item_at_line(row - inner.y) {
                self.filter_cursor = self
                    .filters
                    .items()
                    .iter()
                    .position(|i| *i == item)
                    .unwrap_or(0);
                match item {
                    FilterItem::Price => {
                        self.filters
                            .set_price_from_offset(col - inner.x, inner.width)
                    }
                    other => self.filters.toggle(other),
                }
            }
            return Action::None;
        }

        self.focus = CatalogFocus::Tutors;
        let grid = card_grid(
            Self::tutor_grid_area(tutors),
            self.tutors.len(),
            TUTOR_CARD_WIDTH,
            cards::TUTOR_CARD_HEIGHT,
            self.selected,
        );
        if let Some(index) = grid.index_at(col, row) {
            self.selected = index;
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let (filters, tutors) = Self::split(area);
        self.render_filters(frame, filters, ctx);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::styled(" Catalog ", theme.heading()),
                Span::styled("Esc back ", theme.secondary()),
            ]))
            .border_style(theme.border_style(self.focus == CatalogFocus::Tutors));
        frame.render_widget(block, tutors);

        let grid = card_grid(
            Self::tutor_grid_area(tutors),
            self.tutors.len(),
            TUTOR_CARD_WIDTH,
            cards::TUTOR_CARD_HEIGHT,
            self.selected,
        );
        for (index, cell) in grid.cells {
            let selected = self.focus == CatalogFocus::Tutors && index == self.selected;
            frame.render_widget(cards::tutor_card(&self.tutors[index], selected, theme), cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dataset;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn defaults_match_catalog_panel() {
        let filters = CatalogFilters::default();
        assert_eq!(filters.tags.len(), 4);
        assert!(filters.tags.iter().all(|t| t.label == "NextJS" && !t.checked));
        assert_eq!(filters.price, 50);
        assert_eq!(filters.methods[1].label, "Chat");
    }

    #[test]
    fn marks_never_narrow_the_list() {
        let mut view = CatalogView::new(&Dataset::mock());
        let ctx = Context::default();
        view.handle_key(key(KeyCode::Tab), &ctx);
        assert_eq!(view.focus(), CatalogFocus::Filters);
        view.handle_key(key(KeyCode::Char(' ')), &ctx);
        assert!(view.filters().tags[0].checked);
        assert_eq!(view.visible_tutors().len(), 2);
    }

    #[test]
    fn price_moves_in_steps_and_clamps() {
        let mut filters = CatalogFilters::default();
        filters.nudge_price(true);
        assert_eq!(filters.price, 55);
        for _ in 0..20 {
            filters.nudge_price(true);
        }
        assert_eq!(filters.price, 100);
        for _ in 0..30 {
            filters.nudge_price(false);
        }
        assert_eq!(filters.price, 0);
    }

    #[test]
    fn slider_click_snaps_to_step() {
        let mut filters = CatalogFilters::default();
        filters.set_price_from_offset(0, 26);
        assert_eq!(filters.price, 0);
        filters.set_price_from_offset(25, 26);
        assert_eq!(filters.price, 100);
        filters.set_price_from_offset(6, 26);
        assert_eq!(filters.price, 25);
    }

    #[test]
    fn slider_knob_position() {
        assert_eq!(slider_line(0, 5), "●────");
        assert_eq!(slider_line(50, 5), "━━●──");
        assert_eq!(slider_line(100, 5), "━━━━●");
    }

    #[test]
    fn escape_requests_close_and_enter_is_inert() {
        let mut view = CatalogView::new(&Dataset::mock());
        let ctx = Context::default();
        assert_eq!(view.handle_key(key(KeyCode::Enter), &ctx), Action::inert("Book Now"));
        assert_eq!(view.handle_key(key(KeyCode::Esc), &ctx), Action::CloseOverlay);
    }

    #[test]
    fn click_toggles_method_checkbox() {
        let mut view = CatalogView::new(&Dataset::mock());
        let area = Rect::new(0, 0, 100, 30);
        // Inner area starts at (1, 1); "Video Call" is on line 11.
        view.handle_click(area, 3, 12, &Context::default());
        assert!(view.filters().methods[0].checked);
        assert_eq!(view.focus(), CatalogFocus::Filters);
    }
}
