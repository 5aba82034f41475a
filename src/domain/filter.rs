//! Listing filter selection

use super::records::{ListingRecord, ListingStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ListingFilter {
    pub const ALL: [ListingFilter; 3] = [
        ListingFilter::All,
        ListingFilter::Active,
        ListingFilter::Inactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ListingFilter::All => "All",
            ListingFilter::Active => "Active",
            ListingFilter::Inactive => "Inactive",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "all" => Some(ListingFilter::All),
            "active" => Some(ListingFilter::Active),
            "inactive" => Some(ListingFilter::Inactive),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn matches(&self, listing: &ListingRecord) -> bool {
        match self {
            ListingFilter::All => true,
            ListingFilter::Active => listing.status == ListingStatus::Active,
            ListingFilter::Inactive => listing.status == ListingStatus::Inactive,
        }
    }

    /// Stable filter over `source`; order is preserved.
    pub fn apply<'a>(&self, source: &'a [ListingRecord]) -> Vec<&'a ListingRecord> {
        source.iter().filter(|listing| self.matches(listing)).collect()
    }
}
