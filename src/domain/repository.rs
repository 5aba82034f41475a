//! Data source seam for the views

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::mock;
use super::records::{BookingRecord, ListingRecord, ProposalRecord, RatingBar, TutorRecord};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("read data file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse data file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only source of the records each view renders.
pub trait Repository: Debug {
    fn listings(&self) -> &[ListingRecord];
    fn bookings(&self) -> &[BookingRecord];
    fn proposals(&self) -> &[ProposalRecord];
    fn tutors(&self) -> &[TutorRecord];
    fn rating_history(&self) -> &[RatingBar];
}

/// In-memory record set, either the built-in mock data or a JSON fixture.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub listings: Vec<ListingRecord>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
    #[serde(default)]
    pub proposals: Vec<ProposalRecord>,
    #[serde(default)]
    pub tutors: Vec<TutorRecord>,
    #[serde(default)]
    pub rating_history: Vec<RatingBar>,
}

impl Dataset {
    pub fn mock() -> Self {
        Self {
            listings: mock::listings(),
            bookings: mock::bookings(),
            proposals: mock::proposals(),
            tutors: mock::tutors(),
            rating_history: mock::rating_history(),
        }
    }

    /// Load a fixture. Sections missing from the file are empty.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Repository for Dataset {
    fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }

    fn bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }

    fn proposals(&self) -> &[ProposalRecord] {
        &self.proposals
    }

    fn tutors(&self) -> &[TutorRecord] {
        &self.tutors
    }

    fn rating_history(&self) -> &[RatingBar] {
        &self.rating_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fixture_with_missing_sections_loads_empty_lists() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "listings": [{{ "id": 1, "title": "Solidity 101", "status": "Active" }}] }}"#
        )
        .unwrap();

        let data = Dataset::load(file.path()).unwrap();
        assert_eq!(data.listings().len(), 1);
        assert!(data.bookings().is_empty());
        assert!(data.tutors().is_empty());
    }

    #[test]
    fn fixture_bookings_use_iso_dates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "bookings": [{{ "id": 9, "title": "Pairing", "date": "2025-08-15", "status": "Pending" }}] }}"#
        )
        .unwrap();

        let data = Dataset::load(file.path()).unwrap();
        assert_eq!(data.bookings()[0].display_date(), "August 15, 2025");
    }

    #[test]
    fn malformed_fixture_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn missing_fixture_reports_read_error() {
        let err = Dataset::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }
}
