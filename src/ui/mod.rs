use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod cards;
pub mod layout;
pub mod sidebar;
pub mod theme;
pub mod widgets;

use crate::app::{App, Focus, InputMode, ViewId};
use crate::core::{NotifyLevel, Page};
use layout::centered_rect;

pub const BRAND: &str = "SkillsSwap DAO";

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();
    let areas = layout::areas(size, app.is_compact());
    let theme = &app.ctx.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        size,
    );

    if let Some(rect) = areas.sidebar {
        let cursor = (app.focus == Focus::Sidebar).then_some(app.sidebar_cursor);
        sidebar::draw(f, rect, &app.ctx, cursor, false);
    }
    if let Some(rect) = areas.topbar {
        draw_topbar(f, rect, app);
    }

    app.view().render(f, areas.main, &app.ctx);

    if app.drawer_visible() {
        f.render_widget(Clear, areas.drawer);
        sidebar::draw(f, areas.drawer, &app.ctx, Some(app.sidebar_cursor), true);
    }

    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_topbar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ctx.theme;
    let menu_style = if app.drawer_open() {
        theme.primary_button().bg(theme.accent).fg(theme.text_primary)
    } else {
        theme.primary_button()
    };
    let line = Line::from(vec![
        Span::styled(" ≡ Menu ", menu_style),
        Span::raw("  "),
        Span::styled(BRAND, theme.heading()),
        Span::styled(format!("  {}", app.active_page().title()), theme.secondary()),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.surface)),
        area,
    );
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ctx.theme;
    let mut spans = vec![
        Span::styled(
            BRAND,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Page ", theme.secondary()),
        Span::raw(format!("{}  ", app.active_page().title())),
        Span::styled("View ", theme.secondary()),
        Span::raw(app.view().title()),
    ];
    if let Some(view) = app.listings_view() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Filter ", theme.secondary()));
        spans.push(Span::raw(view.filter().label()));
    }
    if app.is_compact() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("compact", theme.secondary()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(theme.text())
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Go to Dashboard"),
        ("listings", "Go to My Listings"),
        ("bookings", "Go to My Bookings"),
        ("token", "Go to Top Up Token"),
        ("governance", "Go to Governance"),
        ("go", "go <page>"),
        ("filter", "filter <all|active|inactive>"),
        ("catalog", "Browse tutors"),
        ("menu", "Toggle the drawer (compact layout)"),
        ("help", "Show key bindings"),
        ("quit", "Exit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) || input.starts_with(cmd) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ctx.theme;
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input).unwrap_or("page id | go | filter | catalog");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(theme.warning)),
                Span::raw(app.command.input.as_str()),
                Span::styled(format!("  {hint}"), theme.secondary()),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    NotifyLevel::Info => theme.positive,
                    NotifyLevel::Warn => theme.warning,
                    NotifyLevel::Error => theme.negative,
                };
                Line::from(vec![
                    Span::styled("msg: ", theme.secondary()),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(theme.text());
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let theme = &app.ctx.theme;
    let mut hints: Vec<(&str, &str)> = Vec::new();
    match app.mounted_view() {
        ViewId::Dashboard => {
            hints.push(("Tab", "panels"));
            hints.push(("c", "catalog"));
        }
        ViewId::Listings => hints.push(("f", "filter")),
        ViewId::Catalog => {
            hints.push(("Tab", "focus"));
            hints.push(("Esc", "back"));
        }
        ViewId::Bookings | ViewId::Governance | ViewId::Token => {}
    }
    if app.is_compact() {
        hints.push(("m", "menu"));
    }
    hints.extend([("1-5", "pages"), (":", "command"), ("?", "help"), ("q", "quit")]);

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), theme.heading()));
        spans.push(Span::styled(format!(" {label}  "), theme.secondary()));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![Line::from("Navigation")];
    for page in Page::ALL {
        lines.push(Line::from(format!("  {}          {}", page.shortcut(), page.title())));
    }
    lines.extend([
        Line::from("  [ / ]      Prev/Next page"),
        Line::from("  h / l      Sidebar / content"),
        Line::from("  m          Menu drawer (narrow terminal)"),
        Line::from("  Mouse      Click items, scroll lists"),
        Line::from(""),
        Line::from("Views"),
        Line::from("  j / k      Move selection"),
        Line::from("  Tab        Dashboard panels / catalog focus"),
        Line::from("  c          Catalog (Dashboard)"),
        Line::from("  f          Filter dropdown (My Listings)"),
        Line::from("  Space      Toggle checkbox (Catalog)"),
        Line::from("  - / +      Price (Catalog)"),
        Line::from("  Esc        Close dropdown / drawer / catalog"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  : listings   : go governance   : filter active"),
        Line::from("  : catalog    : menu   : help   : quit"),
        Line::from(""),
        Line::from(format!("Active page: {}", app.active_page().title())),
    ]);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!(" {BRAND} · Help "))
                .borders(Borders::ALL)
                .border_style(app.ctx.theme.border_style(true)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::Dataset;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn command_hint_prefix() {
        assert_eq!(command_hint("gov"), Some("Go to Governance"));
        assert_eq!(command_hint("filter act"), Some("filter <all|active|inactive>"));
        assert_eq!(command_hint("zzz"), None);
    }

    #[test]
    fn wide_layout_shows_sidebar_and_brand() {
        let mut app = App::new(Box::new(Dataset::mock()), &Config::default());
        app.set_viewport(120);
        let text = screen(&app, 120, 40);
        assert!(text.contains("My Bookings"));
        assert!(text.contains(BRAND));
        assert!(!text.contains("≡ Menu"));
    }

    #[test]
    fn compact_layout_shows_menu_and_drawer() {
        let mut app = App::new(Box::new(Dataset::mock()), &Config::default());
        app.set_viewport(70);
        let closed = screen(&app, 70, 30);
        assert!(closed.contains("≡ Menu"));
        assert!(!closed.contains("Top Up Token"));

        app.open_drawer();
        let open = screen(&app, 70, 30);
        assert!(open.contains("Top Up Token"));
        assert!(open.contains('✕'));
    }
}
