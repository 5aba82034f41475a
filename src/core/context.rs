//! Shared context passed to views

use super::Page;
use crate::config::Profile;
use crate::ui::theme::Theme;

/// Shared, read-only context available to all views
#[derive(Debug, Clone)]
pub struct Context {
    /// Page highlighted in the sidebar
    pub page: Page,

    /// Profile shown in the sidebar footer and dashboard cards
    pub profile: Profile,

    pub theme: Theme,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            page: Page::Dashboard,
            profile: Profile::default(),
            theme: Theme::default(),
        }
    }
}

impl Context {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }
}
