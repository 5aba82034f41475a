//! Dashboard module - panel-based home view

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::block::Title;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{ListingRecord, ListingStatus, RatingBar, Repository};
use crate::ui::cards;
use crate::ui::layout::{rect_contains, rect_inner};
use crate::ui::widgets::RatingBars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPanel {
    Streaming,
    Settlement,
    Balance,
    Rating,
    CreateListing,
    Stars,
    ActiveListing,
}

impl DashboardPanel {
    pub const ALL: [DashboardPanel; 7] = [
        DashboardPanel::Streaming,
        DashboardPanel::Settlement,
        DashboardPanel::Balance,
        DashboardPanel::Rating,
        DashboardPanel::CreateListing,
        DashboardPanel::Stars,
        DashboardPanel::ActiveListing,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardPanel::Streaming => "Streaming right now",
            DashboardPanel::Settlement => "Settlement / Disputes",
            DashboardPanel::Balance => "Balance",
            DashboardPanel::Rating => "This Year Rating",
            DashboardPanel::CreateListing => "Create Listing",
            DashboardPanel::Stars => "Your Rating",
            DashboardPanel::ActiveListing => "Active Listing",
        }
    }
}

pub struct DashboardView {
    active_panel: DashboardPanel,
    rating: Vec<RatingBar>,
    featured: ListingRecord,
}

impl DashboardView {
    pub fn new(data: &dyn Repository) -> Self {
        Self {
            active_panel: DashboardPanel::Streaming,
            rating: data.rating_history().to_vec(),
            featured: ListingRecord {
                id: 0,
                title: "List Title".to_string(),
                image_url: String::new(),
                status: ListingStatus::Active,
            },
        }
    }

    pub fn active_panel(&self) -> DashboardPanel {
        self.active_panel
    }

    pub fn next_panel(&mut self) {
        let next = (self.active_panel.index() + 1) % DashboardPanel::ALL.len();
        self.active_panel = DashboardPanel::ALL[next];
    }

    pub fn prev_panel(&mut self) {
        let len = DashboardPanel::ALL.len();
        let prev = (self.active_panel.index() + len - 1) % len;
        self.active_panel = DashboardPanel::ALL[prev];
    }

    fn activate(&self, panel: DashboardPanel) -> Action {
        match panel {
            DashboardPanel::Streaming => Action::OpenCatalog,
            DashboardPanel::Settlement | DashboardPanel::CreateListing => {
                Action::inert(panel.title())
            }
            DashboardPanel::ActiveListing => Action::Navigate(crate::core::Page::Listings),
            DashboardPanel::Balance | DashboardPanel::Rating | DashboardPanel::Stars => {
                Action::None
            }
        }
    }
}

/// Panel rectangles, shared by rendering and click handling.
pub fn panel_rects(area: Rect) -> Vec<(DashboardPanel, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(38),
            Constraint::Percentage(34),
            Constraint::Min(cards::LISTING_CARD_HEIGHT + 2),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);
    let top_right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(top[1]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    let middle_right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(middle[1]);

    vec![
        (DashboardPanel::Streaming, top[0]),
        (DashboardPanel::Settlement, top_right[0]),
        (DashboardPanel::Balance, top_right[1]),
        (DashboardPanel::Rating, middle[0]),
        (DashboardPanel::CreateListing, middle_right[0]),
        (DashboardPanel::Stars, middle_right[1]),
        (DashboardPanel::ActiveListing, rows[2]),
    ]
}

pub const LISTING_MENU_LABEL: &str = " Listing ▾ ";

/// Inert menu button on the right of the Active Listing border.
pub fn listing_menu_rect(panel: Rect) -> Rect {
    let width = (LISTING_MENU_LABEL.chars().count() as u16).min(panel.width.saturating_sub(2));
    Rect::new(panel.x + panel.width.saturating_sub(width + 1), panel.y, width, 1)
}

/// `★★★☆☆` for a rating of three.
pub fn star_line(stars: u8) -> String {
    let filled = stars.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

impl Module for DashboardView {
    fn title(&self) -> &'static str {
        "Dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
                self.next_panel();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
                self.prev_panel();
                Action::None
            }
            KeyCode::Char('c') => Action::OpenCatalog,
            KeyCode::Enter => self.activate(self.active_panel),
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, _ctx: &Context) -> Action {
        match panel_rects(area)
            .into_iter()
            .find(|(_, rect)| rect_contains(*rect, col, row))
        {
            Some((panel, rect)) => {
                self.active_panel = panel;
                if panel == DashboardPanel::ActiveListing
                    && rect_contains(listing_menu_rect(rect), col, row)
                {
                    return Action::inert("Listing");
                }
                self.activate(panel)
            }
            None => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        for (panel, rect) in panel_rects(area) {
            match panel {
                DashboardPanel::Streaming => self.render_streaming_panel(frame, rect, ctx),
                DashboardPanel::Settlement | DashboardPanel::CreateListing => {
                    self.render_button_panel(frame, rect, panel, ctx)
                }
                DashboardPanel::Balance => self.render_balance_panel(frame, rect, ctx),
                DashboardPanel::Rating => self.render_rating_panel(frame, rect, ctx),
                DashboardPanel::Stars => self.render_stars_panel(frame, rect, ctx),
                DashboardPanel::ActiveListing => self.render_active_listing_panel(frame, rect, ctx),
            }
        }
    }
}

impl DashboardView {
    fn panel_block(&self, panel: DashboardPanel, ctx: &Context) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", panel.title()), ctx.theme.heading()))
            .border_style(ctx.theme.border_style(self.active_panel == panel))
            .style(Style::default().bg(ctx.theme.surface))
    }

    fn render_streaming_panel(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let inner = rect_inner(area);
        let mut lines = vec![Line::default(); inner.height.saturating_sub(1) as usize];
        lines.push(Line::from(vec![
            Span::styled("c", ctx.theme.heading()),
            Span::styled("  browse tutors", ctx.theme.secondary()),
        ]));
        let paragraph =
            Paragraph::new(lines).block(self.panel_block(DashboardPanel::Streaming, ctx));
        frame.render_widget(paragraph, area);
    }

    fn render_button_panel(
        &self,
        frame: &mut Frame,
        area: Rect,
        panel: DashboardPanel,
        ctx: &Context,
    ) {
        let label = Line::from(Span::styled(
            format!(" {} ", panel.title()),
            ctx.theme.primary_button(),
        ));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(ctx.theme.border_style(self.active_panel == panel));
        let paragraph = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_balance_panel(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(ctx.profile.balance.clone(), ctx.theme.heading())),
            Line::from(Span::styled("SWT", ctx.theme.secondary())),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(self.panel_block(DashboardPanel::Balance, ctx));
        frame.render_widget(paragraph, area);
    }

    fn render_rating_panel(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        frame.render_widget(self.panel_block(DashboardPanel::Rating, ctx), area);
        let chart = RatingBars::new(&self.rating).colors(ctx.theme.positive, ctx.theme.negative);
        frame.render_widget(chart, rect_inner(area));
    }

    fn render_stars_panel(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let stars = ctx.profile.stars();
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                star_line(stars),
                Style::default().fg(ctx.theme.warning),
            )),
            Line::from(Span::styled(
                format!("{stars} of 5"),
                ctx.theme.secondary(),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(self.panel_block(DashboardPanel::Stars, ctx));
        frame.render_widget(paragraph, area);
    }

    fn render_active_listing_panel(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let menu = Title::from(Span::styled(LISTING_MENU_LABEL, ctx.theme.secondary()))
            .alignment(Alignment::Right);
        frame.render_widget(
            self.panel_block(DashboardPanel::ActiveListing, ctx).title(menu),
            area,
        );
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rect_inner(area));
        let focused = self.active_panel == DashboardPanel::ActiveListing;
        frame.render_widget(cards::listing_card(&self.featured, focused, &ctx.theme), tiles[0]);
        for tile in tiles.iter().skip(1) {
            frame.render_widget(cards::placeholder_tile(&ctx.theme), *tile);
        }
    }
}
