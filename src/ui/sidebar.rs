//! Navigation sidebar, also used as the compact-layout drawer

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Context, Page};
use crate::ui::cards;
use crate::ui::layout::{rect_contains, rect_inner};

/// First nav row, relative to the inner area.
const NAV_TOP: u16 = 2;
const PRIMARY_ROW: u16 = NAV_TOP + Page::ALL.len() as u16 + 1;
const FOOTER_ROWS: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    /// The drawer's close marker.
    Close,
    Page(Page),
    Primary,
}

fn row_rect(area: Rect, offset: u16) -> Option<Rect> {
    let inner = rect_inner(area);
    if offset >= inner.height {
        return None;
    }
    Some(Rect {
        y: inner.y + offset,
        height: 1,
        ..inner
    })
}

pub fn item_rect(area: Rect, page: Page) -> Option<Rect> {
    row_rect(area, NAV_TOP + page.index() as u16)
}

pub fn primary_rect(area: Rect) -> Option<Rect> {
    row_rect(area, PRIMARY_ROW)
}

pub fn close_rect(area: Rect) -> Option<Rect> {
    row_rect(area, 0).map(|row| Rect {
        x: row.x + row.width.saturating_sub(3),
        width: row.width.min(3),
        ..row
    })
}

pub fn hit_test(area: Rect, closable: bool, col: u16, row: u16) -> Option<SidebarHit> {
    if closable && close_rect(area).is_some_and(|r| rect_contains(r, col, row)) {
        return Some(SidebarHit::Close);
    }
    if let Some(page) = Page::ALL
        .into_iter()
        .find(|page| item_rect(area, *page).is_some_and(|r| rect_contains(r, col, row)))
    {
        return Some(SidebarHit::Page(page));
    }
    if primary_rect(area).is_some_and(|r| rect_contains(r, col, row)) {
        return Some(SidebarHit::Primary);
    }
    None
}

/// `cursor` is the keyboard highlight while the sidebar has focus.
pub fn draw(f: &mut Frame, area: Rect, ctx: &Context, cursor: Option<usize>, closable: bool) {
    let theme = &ctx.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(cursor.is_some()))
        .style(Style::default().bg(theme.surface));
    let inner = rect_inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let width = inner.width as usize;

    let mut lines = Vec::with_capacity(inner.height as usize);
    let mut brand = vec![
        Span::styled(
            " SS ",
            theme.primary_button().bg(theme.accent).fg(theme.text_primary),
        ),
        Span::styled(" SkillsSwap", theme.heading()),
    ];
    if closable {
        let used = 4 + " SkillsSwap".len();
        brand.push(Span::raw(" ".repeat(width.saturating_sub(used + 2))));
        brand.push(Span::styled("✕", theme.secondary()));
    }
    lines.push(Line::from(brand));
    lines.push(Line::default());

    for (index, page) in Page::ALL.into_iter().enumerate() {
        let marker = if cursor == Some(index) { "›" } else { " " };
        let label = format!("{marker} {} {}", page.icon(), page.title());
        let style = if page == ctx.page {
            Style::default()
                .fg(theme.text_primary)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.secondary()
        };
        lines.push(Line::from(Span::styled(format!("{label:<width$}"), style)));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" + {} ", ctx.page.primary_action()),
        theme.primary_button(),
    )));

    let footer_top = inner.height.saturating_sub(FOOTER_ROWS) as usize;
    while lines.len() < footer_top {
        lines.push(Line::default());
    }
    lines.push(cards::image_line(&ctx.profile.avatar_url, theme));
    lines.push(Line::from(vec![
        Span::styled("◉ ", theme.secondary()),
        Span::styled(ctx.profile.name.clone(), theme.heading()),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", ctx.profile.balance),
        theme.secondary(),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
