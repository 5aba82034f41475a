use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{
    parse_command, Action, Command, Context, Module, Navigator, NotifyLevel, Page, Toggle,
};
use crate::domain::Repository;
use crate::modules::{
    BookingsView, CatalogView, DashboardView, GovernanceView, ListingsView, TokenView,
};

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Identifies the view currently mounted in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Dashboard,
    Listings,
    Bookings,
    Token,
    Governance,
    /// Sub-view of the dashboard, outside the navigation set.
    Catalog,
}

impl From<Page> for ViewId {
    fn from(page: Page) -> Self {
        match page {
            Page::Dashboard => ViewId::Dashboard,
            Page::Listings => ViewId::Listings,
            Page::Bookings => ViewId::Bookings,
            Page::Token => ViewId::Token,
            Page::Governance => ViewId::Governance,
        }
    }
}

/// The single mounted view. Replacing it drops the previous view's state.
pub enum Mounted {
    Dashboard(DashboardView),
    Listings(ListingsView),
    Bookings(BookingsView),
    Token(TokenView),
    Governance(GovernanceView),
    Catalog(CatalogView),
}

impl Mounted {
    pub fn mount(page: Page, data: &dyn Repository) -> Self {
        match page {
            Page::Dashboard => Mounted::Dashboard(DashboardView::new(data)),
            Page::Listings => Mounted::Listings(ListingsView::new(data)),
            Page::Bookings => Mounted::Bookings(BookingsView::new(data)),
            Page::Token => Mounted::Token(TokenView),
            Page::Governance => Mounted::Governance(GovernanceView::new(data)),
        }
    }

    pub fn id(&self) -> ViewId {
        match self {
            Mounted::Dashboard(_) => ViewId::Dashboard,
            Mounted::Listings(_) => ViewId::Listings,
            Mounted::Bookings(_) => ViewId::Bookings,
            Mounted::Token(_) => ViewId::Token,
            Mounted::Governance(_) => ViewId::Governance,
            Mounted::Catalog(_) => ViewId::Catalog,
        }
    }

    pub fn as_module(&self) -> &dyn Module {
        match self {
            Mounted::Dashboard(view) => view,
            Mounted::Listings(view) => view,
            Mounted::Bookings(view) => view,
            Mounted::Token(view) => view,
            Mounted::Governance(view) => view,
            Mounted::Catalog(view) => view,
        }
    }

    pub fn as_module_mut(&mut self) -> &mut dyn Module {
        match self {
            Mounted::Dashboard(view) => view,
            Mounted::Listings(view) => view,
            Mounted::Bookings(view) => view,
            Mounted::Token(view) => view,
            Mounted::Governance(view) => view,
            Mounted::Catalog(view) => view,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

pub struct App {
    pub ctx: Context,
    navigator: Navigator,
    drawer: Toggle,
    mounted: Mounted,
    data: Box<dyn Repository>,
    pub focus: Focus,
    pub sidebar_cursor: usize,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    compact: bool,
    compact_width: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(data: Box<dyn Repository>, config: &Config) -> Self {
        let navigator = Navigator::default();
        let page = navigator.active();
        let mounted = Mounted::mount(page, data.as_ref());
        let mut ctx = Context::new(config.profile.clone());
        ctx.page = page;
        Self {
            ctx,
            navigator,
            drawer: Toggle::default(),
            mounted,
            data,
            focus: Focus::Content,
            sidebar_cursor: page.index(),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            help_open: false,
            compact: false,
            compact_width: config.compact_width,
            should_quit: false,
        }
    }

    pub fn active_page(&self) -> Page {
        self.navigator.active()
    }

    pub fn mounted_view(&self) -> ViewId {
        self.mounted.id()
    }

    pub fn view(&self) -> &dyn Module {
        self.mounted.as_module()
    }

    pub fn listings_view(&self) -> Option<&ListingsView> {
        match &self.mounted {
            Mounted::Listings(view) => Some(view),
            _ => None,
        }
    }

    pub fn listings_view_mut(&mut self) -> Option<&mut ListingsView> {
        match &mut self.mounted {
            Mounted::Listings(view) => Some(view),
            _ => None,
        }
    }

    pub fn catalog_view(&self) -> Option<&CatalogView> {
        match &self.mounted {
            Mounted::Catalog(view) => Some(view),
            _ => None,
        }
    }

    /// Select a page. Always closes the drawer; reselecting the active page
    /// keeps the mounted view and its local state.
    pub fn navigate(&mut self, page: Page) {
        self.drawer.close();
        let changed = self.navigator.select(page);
        self.sync_mounted(changed);
    }

    /// Navigate by page id; ids outside the navigation set change nothing.
    pub fn navigate_id(&mut self, id: &str) -> bool {
        match self.navigator.select_id(id) {
            Ok(changed) => {
                self.drawer.close();
                self.sync_mounted(changed);
                true
            }
            Err(err) => {
                warn!(%err, "ignoring navigation");
                self.set_status(format!("Unknown page: {}", id.trim()), NotifyLevel::Warn);
                false
            }
        }
    }

    pub fn cycle_page(&mut self, forward: bool) {
        self.drawer.close();
        self.navigator.cycle(forward);
        self.sync_mounted(true);
    }

    fn sync_mounted(&mut self, changed: bool) {
        let page = self.navigator.active();
        if changed || self.mounted.id() != ViewId::from(page) {
            debug!(page = page.id(), "mounting view");
            self.mounted = Mounted::mount(page, self.data.as_ref());
        }
        self.ctx.page = page;
        self.sidebar_cursor = page.index();
    }

    pub fn open_catalog(&mut self) {
        self.drawer.close();
        self.navigator.select(Page::Dashboard);
        self.ctx.page = Page::Dashboard;
        self.sidebar_cursor = Page::Dashboard.index();
        if self.mounted.id() != ViewId::Catalog {
            debug!("mounting catalog");
            self.mounted = Mounted::Catalog(CatalogView::new(self.data.as_ref()));
        }
        self.focus = Focus::Content;
    }

    pub fn close_catalog(&mut self) {
        if self.mounted.id() == ViewId::Catalog {
            self.sync_mounted(true);
        }
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    /// The drawer is only drawn in compact layout.
    pub fn drawer_visible(&self) -> bool {
        self.compact && self.drawer.is_open()
    }

    pub fn open_drawer(&mut self) {
        self.drawer.open();
        self.sidebar_cursor = self.navigator.active().index();
    }

    pub fn close_drawer(&mut self) {
        self.drawer.close();
    }

    pub fn toggle_drawer(&mut self) {
        if self.drawer.is_open() {
            self.close_drawer();
        } else {
            self.open_drawer();
        }
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Recompute the layout mode for a terminal `width` columns wide.
    pub fn set_viewport(&mut self, width: u16) {
        let compact = width < self.compact_width;
        if compact != self.compact {
            debug!(width, compact, "layout changed");
        }
        self.compact = compact;
        if !compact {
            self.drawer.close();
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    /// Joins onto a live message instead of replacing it; the more severe level wins.
    pub fn push_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        let text = text.into();
        match self.status.as_mut() {
            Some(status) => {
                status.text = format!("{} · {text}", status.text);
                status.level = status.level.max(level);
                status.since = Instant::now();
            }
            None => self.set_status(text, level),
        }
    }

    pub fn status_text(&self) -> Option<(&str, NotifyLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        let command = parse_command(&input);
        debug!(?command, "command");
        self.command.last = Some(input);
        let action = self.execute_command(command);
        self.apply_action(action);
    }

    pub fn execute_command(&mut self, command: Command) -> Action {
        match command {
            Command::Go(page) => Action::Navigate(page),
            Command::Filter(filter) => {
                if self.mounted.id() != ViewId::Listings {
                    self.navigate(Page::Listings);
                }
                if let Some(view) = self.listings_view_mut() {
                    view.set_filter(filter);
                }
                Action::Notify(format!("Filter: {}", filter.label()), NotifyLevel::Info)
            }
            Command::Catalog => Action::OpenCatalog,
            Command::Menu if self.compact => {
                self.toggle_drawer();
                Action::None
            }
            Command::Menu => Action::Notify(
                "Menu is only available in compact layout".to_string(),
                NotifyLevel::Warn,
            ),
            Command::Help => {
                self.help_open = true;
                Action::None
            }
            Command::Quit => Action::Quit,
            Command::Unknown(input) => {
                warn!(%input, "unknown command");
                Action::Notify(format!("Unknown command: {input}"), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or view
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(page) => self.navigate(page),
            Action::OpenCatalog => self.open_catalog(),
            Action::CloseOverlay => self.close_catalog(),
            Action::Notify(text, level) => self.set_status(text, level),
            Action::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    pub fn view_captures_input(&self) -> bool {
        self.mounted.as_module().captures_input()
    }

    pub fn forward_key(&mut self, key: KeyEvent) {
        let action = self.mounted.as_module_mut().handle_key(key, &self.ctx);
        self.apply_action(action);
    }

    pub fn forward_click(&mut self, area: Rect, col: u16, row: u16) {
        let action = self
            .mounted
            .as_module_mut()
            .handle_click(area, col, row, &self.ctx);
        self.apply_action(action);
    }

    pub fn focus_sidebar(&mut self) {
        self.focus = Focus::Sidebar;
        self.sidebar_cursor = self.navigator.active().index();
    }

    pub fn focus_content(&mut self) {
        self.focus = Focus::Content;
    }

    pub fn move_sidebar_cursor(&mut self, forward: bool) {
        let last = Page::ALL.len() - 1;
        self.sidebar_cursor = if forward {
            (self.sidebar_cursor + 1).min(last)
        } else {
            self.sidebar_cursor.saturating_sub(1)
        };
    }

    pub fn activate_sidebar_cursor(&mut self) {
        if let Some(page) = Page::ALL.get(self.sidebar_cursor).copied() {
            self.navigate(page);
            self.focus = Focus::Content;
        }
    }
}
