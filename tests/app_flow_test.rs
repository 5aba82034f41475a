//! Drive the app through key and mouse events without a terminal

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use skillswap::config::Config;
use skillswap::core::{NotifyLevel, Page};
use skillswap::domain::{Dataset, ListingFilter};
use skillswap::input::{handle_key, handle_mouse};
use skillswap::ui::layout::areas;
use skillswap::{App, ViewId};

const ALL_VIEWS: [ViewId; 6] = [
    ViewId::Dashboard,
    ViewId::Listings,
    ViewId::Bookings,
    ViewId::Token,
    ViewId::Governance,
    ViewId::Catalog,
];

fn app() -> App {
    App::new(Box::new(Dataset::mock()), &Config::default())
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_command(app: &mut App, command: &str) {
    press(app, KeyCode::Char(':'));
    for ch in command.chars() {
        press(app, KeyCode::Char(ch));
    }
    press(app, KeyCode::Enter);
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
fn test_every_page_mounts_exactly_one_view() {
    let mut app = app();
    for page in Page::ALL {
        assert!(app.navigate_id(page.id()));
        let expected = ViewId::from(page);
        let mounted: Vec<ViewId> = ALL_VIEWS
            .into_iter()
            .filter(|view| app.mounted_view() == *view)
            .collect();
        assert_eq!(mounted, vec![expected]);
        assert_eq!(app.active_page(), page);
    }
}

#[test]
fn test_drawer_closes_on_any_navigation() {
    let mut app = app();
    app.set_viewport(60);
    for page in Page::ALL {
        press(&mut app, KeyCode::Char('m'));
        assert!(app.drawer_visible());
        press(&mut app, KeyCode::Char(page.shortcut()));
        assert!(!app.drawer_open(), "drawer left open after {page:?}");
    }
}

#[test]
fn test_drawer_closes_on_reselecting_active_page() {
    let mut app = app();
    app.set_viewport(60);
    app.open_drawer();
    app.navigate(app.active_page());
    assert!(!app.drawer_open());
}

#[test]
fn test_drawer_click_navigation_and_dismissal() {
    let mut app = app();
    let size = Rect::new(0, 0, 80, 30);
    app.set_viewport(size.width);
    let layout = areas(size, true);
    let hamburger = layout.hamburger.expect("compact layout has a hamburger");

    click(&mut app, hamburger.x + 1, hamburger.y, size);
    assert!(app.drawer_visible());

    // Drawer rows: border, brand, blank, then the pages in order.
    let governance_row = layout.drawer.y + 3 + Page::Governance.index() as u16;
    click(&mut app, layout.drawer.x + 4, governance_row, size);
    assert_eq!(app.mounted_view(), ViewId::Governance);
    assert!(!app.drawer_open());

    click(&mut app, hamburger.x + 1, hamburger.y, size);
    click(&mut app, layout.drawer.x + layout.drawer.width - 3, layout.drawer.y + 1, size);
    assert!(!app.drawer_open());
    assert_eq!(app.mounted_view(), ViewId::Governance);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut app = app();
    app.navigate(Page::Token);
    assert!(!app.navigate_id("catalog"));
    assert!(!app.navigate_id("settings"));
    assert_eq!(app.mounted_view(), ViewId::Token);

    type_command(&mut app, "go nowhere");
    assert_eq!(app.mounted_view(), ViewId::Token);
    assert_eq!(
        app.status_text().map(|(_, level)| level),
        Some(NotifyLevel::Warn)
    );
}

#[test]
fn test_filter_resets_after_leaving_listings() {
    let mut app = app();
    type_command(&mut app, "filter active");
    assert_eq!(app.listings_view().map(|v| v.filter()), Some(ListingFilter::Active));

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.listings_view().map(|v| v.filter()), Some(ListingFilter::Active));

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.listings_view().map(|v| v.filter()), Some(ListingFilter::All));
}

#[test]
fn test_dropdown_selection_by_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('f'));
    assert!(app.listings_view().is_some_and(|v| v.dropdown_open()));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let view = app.listings_view().expect("listings mounted");
    assert!(!view.dropdown_open());
    let ids: Vec<u32> = view.filtered().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 4, 7, 10]);
}

#[test]
fn test_catalog_opens_from_dashboard_and_closes() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.mounted_view(), ViewId::Catalog);
    assert_eq!(app.active_page(), Page::Dashboard);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mounted_view(), ViewId::Dashboard);

    type_command(&mut app, "catalog");
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.mounted_view(), ViewId::Bookings);
}

#[test]
fn test_inert_buttons_only_notify() {
    let mut app = app();
    let size = Rect::new(0, 0, 120, 40);
    app.set_viewport(size.width);
    press(&mut app, KeyCode::Char('5'));

    // Primary button sits below the five nav rows.
    click(&mut app, 5, 9, size);
    assert_eq!(app.mounted_view(), ViewId::Governance);
    assert_eq!(
        app.status_text(),
        Some(("Create Proposal is not available yet", NotifyLevel::Info))
    );
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.help_open);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.mounted_view(), ViewId::Dashboard);
    press(&mut app, KeyCode::Esc);
    assert!(!app.help_open);
}

#[test]
fn test_quit_command() {
    let mut app = app();
    type_command(&mut app, "quit");
    assert!(app.should_quit);
}
