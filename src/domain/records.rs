//! Static records rendered by the views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    Active,
    Inactive,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: u32,
    pub title: String,
    /// Empty when the listing has no cover image.
    #[serde(default)]
    pub image_url: String,
    pub status: ListingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub status: BookingStatus,
}

impl BookingRecord {
    /// Long form used on booking cards, e.g. `August 10, 2025`.
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    Open,
    Closed,
}

impl ProposalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProposalStatus::Open => "Open",
            ProposalStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub time_remaining: String,
    pub status: ProposalStatus,
    /// Display text only, e.g. `need 10 vote power`.
    pub vote_requirement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub price: u32,
}

impl TutorRecord {
    pub fn price_label(&self) -> String {
        format!("${} SWT", self.price)
    }
}

/// One bar of the yearly rating chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBar {
    /// Bar height as a percentage of the chart height.
    pub percent: u8,
    pub positive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_date_uses_long_month_without_padding() {
        let booking = BookingRecord {
            id: 1,
            title: "Smart Contract Audit".into(),
            date: NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
            status: BookingStatus::Pending,
        };
        assert_eq!(booking.display_date(), "August 5, 2025");
    }

    #[test]
    fn listing_without_image_deserializes() {
        let json = r#"{ "id": 7, "title": "Rust Mentoring", "status": "Inactive" }"#;
        let listing: ListingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(listing.image_url, "");
        assert_eq!(listing.status, ListingStatus::Inactive);
    }

    #[test]
    fn tutor_price_label() {
        let tutor = TutorRecord {
            id: 2,
            name: "Jane Doe".into(),
            avatar_url: String::new(),
            image_url: String::new(),
            quote: String::new(),
            skills: vec![],
            price: 15,
        };
        assert_eq!(tutor.price_label(), "$15 SWT");
    }
}
