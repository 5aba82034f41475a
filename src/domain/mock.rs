//! Built-in placeholder data

use chrono::NaiveDate;

use super::records::{
    BookingRecord, BookingStatus, ListingRecord, ListingStatus, ProposalRecord, ProposalStatus,
    RatingBar, TutorRecord,
};

const GENERATED_LISTINGS: u32 = 12;

impl ListingRecord {
    fn mock(index: u32) -> Self {
        let id = index + 1;
        let status = if index % 3 == 0 {
            ListingStatus::Active
        } else {
            ListingStatus::Inactive
        };
        Self {
            id,
            title: format!("My Listing #{id}"),
            image_url: format!("https://picsum.photos/seed/{id}/400"),
            status,
        }
    }
}

impl ProposalRecord {
    fn mock(id: u32) -> Self {
        Self {
            id,
            title: "Steve itu Karbit".to_string(),
            description: "STEVE ITU KARBIT KARENA MAHIRU ISTRI FATHIN!!!!".to_string(),
            time_remaining: "2 hours 3 minutes".to_string(),
            status: ProposalStatus::Open,
            vote_requirement: "need 10 vote power".to_string(),
        }
    }
}

pub fn listings() -> Vec<ListingRecord> {
    (0..GENERATED_LISTINGS).map(ListingRecord::mock).collect()
}

pub fn bookings() -> Vec<BookingRecord> {
    let booking = |id, title: &str, day, status| BookingRecord {
        id,
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap_or_default(),
        status,
    };
    vec![
        booking(1, "Website Design Consultation", 10, BookingStatus::Confirmed),
        booking(2, "Smart Contract Audit", 12, BookingStatus::Confirmed),
        booking(3, "Frontend Development Session", 15, BookingStatus::Pending),
    ]
}

pub fn proposals() -> Vec<ProposalRecord> {
    (1..=4).map(ProposalRecord::mock).collect()
}

pub fn tutors() -> Vec<TutorRecord> {
    vec![
        TutorRecord {
            id: 1,
            name: "M. Fathin Halim".to_string(),
            avatar_url: "https://i.pravatar.cc/40?u=fathin".to_string(),
            image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?q=80&w=2071"
                .to_string(),
            quote: "Every line of code is a new possibility.".to_string(),
            skills: ["Next.js", "HTML, CSS", "TailwindCSS", "Bootstrap"]
                .map(String::from)
                .to_vec(),
            price: 10,
        },
        TutorRecord {
            id: 2,
            name: "Jane Doe".to_string(),
            avatar_url: "https://i.pravatar.cc/40?u=jane".to_string(),
            image_url: "https://images.unsplash.com/photo-1588681664899-f142ff2dc9b1?q=80&w=1974"
                .to_string(),
            quote: "Design is thinking made visual.".to_string(),
            skills: ["Figma", "UI/UX", "Webflow", "Canva"].map(String::from).to_vec(),
            price: 15,
        },
    ]
}

pub fn rating_history() -> Vec<RatingBar> {
    [(60, true), (45, false), (85, true), (55, false), (65, true), (90, true)]
        .into_iter()
        .map(|(percent, positive)| RatingBar { percent, positive })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_listing_ids_are_unique_and_sequential() {
        let ids: Vec<u32> = listings().iter().map(|l| l.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn generated_listing_images_are_seeded_by_id() {
        let listing = &listings()[4];
        assert_eq!(listing.image_url, "https://picsum.photos/seed/5/400");
        assert_eq!(listing.title, "My Listing #5");
    }

    #[test]
    fn mock_bookings_cover_both_statuses() {
        let bookings = bookings();
        assert_eq!(bookings.len(), 3);
        assert_eq!(bookings[0].display_date(), "August 10, 2025");
        assert_eq!(bookings[2].status, BookingStatus::Pending);
    }
}
