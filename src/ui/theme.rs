//! Dark palette for the dashboard
//!
//! - **Background**: GitHub-dark canvas
//! - **Surface**: raised card background
//! - **Accent**: purple focus ring
//! - **Positive / Negative / Warning**: status colours for ratings and bookings

use ratatui::style::{Color, Modifier, Style};

use crate::domain::{BookingStatus, ListingStatus, ProposalStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    /// Cards, sidebar and dropdowns
    pub surface: Color,
    pub border: Color,
    /// Focused card border, selected sidebar entry
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub text_primary: Color,
    /// Secondary text, inactive nav items
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(13, 17, 23),
            surface: Color::Rgb(22, 27, 34),
            border: Color::Rgb(55, 65, 81),
            accent: Color::Rgb(168, 85, 247),
            positive: Color::Rgb(74, 222, 128),
            negative: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(250, 204, 21),
            text_primary: Color::White,
            muted: Color::Rgb(156, 163, 175),
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// White pill used for primary buttons.
    pub fn primary_button(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn listing_status_color(&self, status: ListingStatus) -> Color {
        match status {
            ListingStatus::Active => self.positive,
            ListingStatus::Inactive => self.muted,
        }
    }

    pub fn booking_status_color(&self, status: BookingStatus) -> Color {
        match status {
            BookingStatus::Confirmed => self.positive,
            BookingStatus::Pending => self.warning,
        }
    }

    pub fn proposal_status_color(&self, status: ProposalStatus) -> Color {
        match status {
            ProposalStatus::Open => self.positive,
            ProposalStatus::Closed => self.muted,
        }
    }
}
