//! View containers
//!
//! Each view implements the Module trait and owns its local state:
//! - dashboard: home panels, rating chart, active listing row
//! - listings: listing grid with the status filter dropdown
//! - bookings: booking cards or the empty state
//! - governance: proposal cards
//! - token: top-up page
//! - catalog: tutor cards beside the filter panel, opened from the dashboard

pub mod bookings;
pub mod catalog;
pub mod dashboard;
pub mod governance;
pub mod listings;
pub mod token;

pub use bookings::BookingsView;
pub use catalog::CatalogView;
pub use dashboard::DashboardView;
pub use governance::GovernanceView;
pub use listings::ListingsView;
pub use token::TokenView;
