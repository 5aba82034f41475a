pub mod filter;
pub mod mock;
pub mod records;
pub mod repository;

pub use filter::ListingFilter;
pub use records::{
    BookingRecord, BookingStatus, ListingRecord, ListingStatus, ProposalRecord, ProposalStatus,
    RatingBar, TutorRecord,
};
pub use repository::{DataError, Dataset, Repository};
