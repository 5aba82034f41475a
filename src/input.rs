//! Key and mouse dispatch

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Focus, InputMode};
use crate::core::{Action, NotifyLevel, Page};
use crate::ui::layout::{self, rect_contains};
use crate::ui::sidebar::{self, SidebarHit};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Command => handle_command_mode(app, key),
        InputMode::Normal => handle_normal_mode(app, key),
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.drawer_visible() {
        handle_drawer_key(app, key);
        return;
    }

    if app.view_captures_input() {
        app.forward_key(key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.apply_action(Action::Quit),
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char(':') | KeyCode::Char('/') => app.enter_command(),
        KeyCode::Char('m') => {
            if app.is_compact() {
                app.toggle_drawer();
            } else {
                app.set_status("Sidebar is already visible", NotifyLevel::Info);
            }
        }
        KeyCode::Char('[') => app.cycle_page(false),
        KeyCode::Char(']') => app.cycle_page(true),
        KeyCode::Char('h') => {
            if app.is_compact() {
                app.open_drawer();
            } else {
                app.focus_sidebar();
            }
        }
        KeyCode::Char('l') => app.focus_content(),
        KeyCode::Char(ch) if Page::from_shortcut(ch).is_some() => {
            if let Some(page) = Page::from_shortcut(ch) {
                app.navigate(page);
            }
        }
        _ if app.focus == Focus::Sidebar => handle_sidebar_key(app, key),
        _ => app.forward_key(key),
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.move_sidebar_cursor(true),
        KeyCode::Up | KeyCode::Char('k') => app.move_sidebar_cursor(false),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_sidebar_cursor(),
        KeyCode::Esc | KeyCode::Right | KeyCode::Tab => app.focus_content(),
        _ => {}
    }
}

fn handle_drawer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('h') => app.close_drawer(),
        KeyCode::Down | KeyCode::Char('j') => app.move_sidebar_cursor(true),
        KeyCode::Up | KeyCode::Char('k') => app.move_sidebar_cursor(false),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_sidebar_cursor(),
        KeyCode::Char('q') => app.apply_action(Action::Quit),
        KeyCode::Char(ch) => {
            if let Some(page) = Page::from_shortcut(ch) {
                app.navigate(page);
            }
        }
        _ => {}
    }
}

/// `size` is the full terminal area the last frame was drawn into.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.input_mode == InputMode::Command {
        return;
    }
    if app.help_open {
        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            app.help_open = false;
        }
        return;
    }

    let areas = layout::areas(size, app.is_compact());
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, areas, col, row),
        MouseEventKind::ScrollDown => handle_scroll(app, areas, col, row, true),
        MouseEventKind::ScrollUp => handle_scroll(app, areas, col, row, false),
        _ => {}
    }
}

fn apply_sidebar_hit(app: &mut App, hit: SidebarHit) {
    match hit {
        SidebarHit::Close => app.close_drawer(),
        SidebarHit::Page(page) => app.navigate(page),
        SidebarHit::Primary => {
            let label = app.active_page().primary_action();
            app.apply_action(Action::inert(label));
        }
    }
}

fn handle_click(app: &mut App, areas: layout::UiAreas, col: u16, row: u16) {
    if app.drawer_visible() {
        if rect_contains(areas.drawer, col, row) {
            if let Some(hit) = sidebar::hit_test(areas.drawer, true, col, row) {
                apply_sidebar_hit(app, hit);
            }
        } else {
            // Click on the overlay dismisses the drawer.
            app.close_drawer();
        }
        return;
    }

    if areas.hamburger.is_some_and(|r| rect_contains(r, col, row)) {
        app.open_drawer();
        return;
    }

    if let Some(sidebar_rect) = areas.sidebar {
        if rect_contains(sidebar_rect, col, row) {
            if let Some(hit) = sidebar::hit_test(sidebar_rect, false, col, row) {
                apply_sidebar_hit(app, hit);
            }
            return;
        }
    }

    if rect_contains(areas.main, col, row) {
        app.focus_content();
        app.forward_click(areas.main, col, row);
    }
}

fn handle_scroll(app: &mut App, areas: layout::UiAreas, col: u16, row: u16, down: bool) {
    let over_sidebar = if app.drawer_visible() {
        rect_contains(areas.drawer, col, row)
    } else {
        areas.sidebar.is_some_and(|r| rect_contains(r, col, row))
    };
    if over_sidebar {
        app.move_sidebar_cursor(down);
        return;
    }
    if rect_contains(areas.main, col, row) && !app.drawer_visible() {
        let code = if down { KeyCode::Down } else { KeyCode::Up };
        app.forward_key(KeyEvent::new(code, KeyModifiers::NONE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewId;
    use crate::config::Config;
    use crate::domain::Dataset;

    fn app() -> App {
        App::new(Box::new(Dataset::mock()), &Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, col: u16, row: u16, size: Rect) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(app, mouse, size);
    }

    #[test]
    fn number_keys_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.mounted_view(), ViewId::Governance);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.mounted_view(), ViewId::Token);
    }

    #[test]
    fn menu_key_only_opens_drawer_when_compact() {
        let mut app = app();
        app.set_viewport(120);
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.drawer_open());

        app.set_viewport(60);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.drawer_visible());
        press(&mut app, KeyCode::Char('3'));
        assert!(!app.drawer_open());
        assert_eq!(app.mounted_view(), ViewId::Bookings);
    }

    #[test]
    fn dropdown_captures_global_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn command_line_round_trip() {
        let mut app = app();
        press(&mut app, KeyCode::Char(':'));
        for ch in "governance".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mounted_view(), ViewId::Governance);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn clicking_sidebar_item_navigates() {
        let mut app = app();
        let size = Rect::new(0, 0, 120, 40);
        app.set_viewport(size.width);
        // Sidebar border, two header rows, then Dashboard, Listings...
        click(&mut app, 5, 4, size);
        assert_eq!(app.mounted_view(), ViewId::Listings);
    }

    #[test]
    fn hamburger_then_outside_click() {
        let mut app = app();
        let size = Rect::new(0, 0, 70, 30);
        app.set_viewport(size.width);
        click(&mut app, 1, 0, size);
        assert!(app.drawer_visible());
        click(&mut app, 60, 15, size);
        assert!(!app.drawer_open());
    }
}
