//! Top-level page selection

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page `{0}`")]
pub struct UnknownPage(pub String);

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Listings,
    Bookings,
    Token,
    Governance,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Listings,
        Page::Bookings,
        Page::Token,
        Page::Governance,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Listings => "listings",
            Page::Bookings => "bookings",
            Page::Token => "token",
            Page::Governance => "governance",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Listings => "My Listings",
            Page::Bookings => "My Bookings",
            Page::Token => "Top Up Token",
            Page::Governance => "Governance",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "▦",
            Page::Listings => "☰",
            Page::Bookings => "◫",
            Page::Token => "◎",
            Page::Governance => "⌂",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Page::Dashboard => '1',
            Page::Listings => '2',
            Page::Bookings => '3',
            Page::Token => '4',
            Page::Governance => '5',
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|page| page == self).unwrap_or(0)
    }

    /// Resolve a page id. Anything outside the closed set is `None`.
    pub fn from_id(id: &str) -> Option<Page> {
        let id = id.trim().to_lowercase();
        Self::ALL.into_iter().find(|page| page.id() == id)
    }

    pub fn from_shortcut(key: char) -> Option<Page> {
        Self::ALL.into_iter().find(|page| page.shortcut() == key)
    }

    /// Label of the sidebar's primary button while this page is active.
    pub fn primary_action(&self) -> &'static str {
        match self {
            Page::Governance => "Create Proposal",
            _ => "Create Listing",
        }
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_id(s).ok_or_else(|| UnknownPage(s.trim().to_string()))
    }
}

/// Holds the single active page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    active: Page,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Page::Dashboard)
    }
}

impl Navigator {
    pub fn new(initial: Page) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Page {
        self.active
    }

    /// Returns whether the selection changed.
    pub fn select(&mut self, page: Page) -> bool {
        let changed = self.active != page;
        self.active = page;
        changed
    }

    /// Select by id; out-of-set ids leave the selection untouched.
    pub fn select_id(&mut self, id: &str) -> Result<bool, UnknownPage> {
        let page = id.parse::<Page>()?;
        Ok(self.select(page))
    }

    pub fn cycle(&mut self, forward: bool) -> Page {
        let index = self.active.index();
        let len = Page::ALL.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        self.active = Page::ALL[next];
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(Navigator::default().active(), Page::Dashboard);
    }

    #[test]
    fn ids_round_trip_through_from_id() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut nav = Navigator::new(Page::Bookings);
        let err = nav.select_id("catalog").unwrap_err();
        assert_eq!(err, UnknownPage("catalog".into()));
        assert_eq!(nav.active(), Page::Bookings);
    }

    #[test]
    fn select_reports_change() {
        let mut nav = Navigator::default();
        assert!(!nav.select(Page::Dashboard));
        assert!(nav.select(Page::Governance));
        assert_eq!(nav.select_id(" Governance "), Ok(false));
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let mut nav = Navigator::default();
        assert_eq!(nav.cycle(false), Page::Governance);
        assert_eq!(nav.cycle(true), Page::Dashboard);
        assert_eq!(nav.cycle(true), Page::Listings);
    }

    #[test]
    fn primary_action_follows_page() {
        assert_eq!(Page::Governance.primary_action(), "Create Proposal");
        assert_eq!(Page::Token.primary_action(), "Create Listing");
    }
}
