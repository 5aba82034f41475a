//! Presentational cards
//!
//! Every card is a pure function of its record, the theme and whether it has
//! focus. Nothing here owns state or touches I/O.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::domain::{BookingRecord, ListingRecord, ProposalRecord, TutorRecord};
use crate::ui::theme::Theme;

pub const LISTING_CARD_WIDTH: u16 = 26;
pub const LISTING_CARD_HEIGHT: u16 = 6;
pub const BOOKING_CARD_WIDTH: u16 = 32;
pub const BOOKING_CARD_HEIGHT: u16 = 7;
pub const PROPOSAL_CARD_HEIGHT: u16 = 6;
pub const TUTOR_CARD_HEIGHT: u16 = 8;

pub fn card_block(selected: bool, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(selected))
        .style(Style::default().bg(theme.surface))
}

/// Empty URLs render as a blank line.
pub fn image_line(url: &str, theme: &Theme) -> Line<'static> {
    if url.trim().is_empty() {
        return Line::default();
    }
    Line::from(Span::styled(
        format!("▣ {url}"),
        theme.secondary().add_modifier(Modifier::DIM),
    ))
}

pub fn listing_card_lines(listing: &ListingRecord, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        image_line(&listing.image_url, theme),
        Line::default(),
        Line::from(Span::styled(listing.title.clone(), theme.heading())),
        Line::from(vec![
            Span::styled(
                listing.status.label(),
                Style::default().fg(theme.listing_status_color(listing.status)),
            ),
            Span::styled("  →", theme.secondary()),
        ]),
    ]
}

pub fn listing_card(listing: &ListingRecord, selected: bool, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(listing_card_lines(listing, theme)).block(card_block(selected, theme))
}

/// Blank square standing in for a listing that does not exist yet.
pub fn placeholder_tile(theme: &Theme) -> Block<'static> {
    card_block(false, theme)
}

pub fn booking_card_lines(booking: &BookingRecord, theme: &Theme) -> Vec<Line<'static>> {
    let status_style = Style::default()
        .fg(theme.booking_status_color(booking.status))
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled("You booked:", theme.secondary())),
        Line::from(Span::styled(booking.title.clone(), theme.heading())),
        Line::default(),
        Line::from(Span::styled(
            format!("◷ {}", booking.display_date()),
            theme.secondary(),
        )),
        Line::from(Span::styled(
            format!("✔ {}", booking.status.label()),
            status_style,
        )),
    ]
}

pub fn booking_card(booking: &BookingRecord, selected: bool, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(booking_card_lines(booking, theme)).block(card_block(selected, theme))
}

pub fn proposal_card_lines(proposal: &ProposalRecord, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(proposal.title.clone(), theme.heading())),
        Line::from(Span::styled(proposal.description.clone(), theme.secondary())),
        Line::default(),
        Line::from(vec![
            Span::styled("Time: ", theme.secondary()),
            Span::styled(proposal.time_remaining.clone(), theme.heading()),
            Span::raw("    "),
            Span::styled("Status: ", theme.secondary()),
            Span::styled(
                proposal.status.label(),
                Style::default()
                    .fg(theme.proposal_status_color(proposal.status))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ", theme.secondary()),
            Span::styled(proposal.vote_requirement.clone(), theme.secondary()),
        ]),
    ]
}

pub fn proposal_card(proposal: &ProposalRecord, selected: bool, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(proposal_card_lines(proposal, theme)).block(card_block(selected, theme))
}

pub fn tutor_card_lines(tutor: &TutorRecord, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        image_line(&tutor.image_url, theme),
        Line::from(vec![
            Span::styled("( Title Here )", theme.text()),
            Span::raw("  "),
            Span::styled(format!(" {} ", tutor.price_label()), theme.heading()),
            Span::raw("  "),
            Span::styled(" Book Now ", theme.primary_button()),
        ]),
        image_line(&tutor.avatar_url, theme),
        Line::from(vec![
            Span::styled("◉ ", theme.secondary()),
            Span::styled(tutor.name.clone(), theme.heading()),
        ]),
        Line::from(Span::styled(tutor.skills.join(" · "), theme.secondary())),
        Line::from(Span::styled(
            tutor.quote.clone(),
            theme.secondary().add_modifier(Modifier::ITALIC),
        )),
    ]
}

pub fn tutor_card(tutor: &TutorRecord, selected: bool, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(tutor_card_lines(tutor, theme)).block(card_block(selected, theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{mock, ListingStatus};

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn listing_card_is_deterministic() {
        let theme = Theme::default();
        let listing = &mock::listings()[0];
        assert_eq!(
            listing_card_lines(listing, &theme),
            listing_card_lines(listing, &theme)
        );
    }

    #[test]
    fn empty_image_url_renders_blank_line() {
        let theme = Theme::default();
        let listing = ListingRecord {
            id: 1,
            title: "List Title".into(),
            image_url: String::new(),
            status: ListingStatus::Active,
        };
        let text = plain(&listing_card_lines(&listing, &theme));
        assert_eq!(text[0], "");
        assert_eq!(text[2], "List Title");
        assert_eq!(text[3], "Active  →");
    }

    #[test]
    fn booking_card_shows_date_and_status() {
        let theme = Theme::default();
        let text = plain(&booking_card_lines(&mock::bookings()[2], &theme));
        assert_eq!(text[0], "You booked:");
        assert_eq!(text[1], "Frontend Development Session");
        assert_eq!(text[3], "◷ August 15, 2025");
        assert_eq!(text[4], "✔ Pending");
    }

    #[test]
    fn proposal_card_shows_vote_requirement_verbatim() {
        let theme = Theme::default();
        let text = plain(&proposal_card_lines(&mock::proposals()[0], &theme));
        assert_eq!(
            text[3],
            "Time: 2 hours 3 minutes    Status: Open | need 10 vote power"
        );
    }

    #[test]
    fn tutor_card_shows_price_and_name() {
        let theme = Theme::default();
        let text = plain(&tutor_card_lines(&mock::tutors()[1], &theme));
        assert!(text[1].contains("$15 SWT"));
        assert!(text[1].contains("Book Now"));
        assert_eq!(text[2], "▣ https://i.pravatar.cc/40?u=jane");
        assert_eq!(text[3], "◉ Jane Doe");
        assert_eq!(text[4], "Figma · UI/UX · Webflow · Canva");
    }

    #[test]
    fn tutor_without_avatar_keeps_row_blank() {
        let theme = Theme::default();
        let mut tutor = mock::tutors()[1].clone();
        tutor.avatar_url.clear();
        let text = plain(&tutor_card_lines(&tutor, &theme));
        assert_eq!(text.len(), 6);
        assert_eq!(text[2], "");
        assert_eq!(text[3], "◉ Jane Doe");
    }
}
