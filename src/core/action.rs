//! Actions that views return to communicate with the app

use super::Page;

/// Actions returned by views to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the active page
    Navigate(Page),

    /// Open the tutor catalog over the dashboard
    OpenCatalog,

    /// Close the current sub-view
    CloseOverlay,

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

impl Action {
    /// Notice for buttons that exist only visually.
    pub fn inert(label: &str) -> Self {
        Action::Notify(format!("{label} is not available yet"), NotifyLevel::Info)
    }
}

/// Notification levels, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
