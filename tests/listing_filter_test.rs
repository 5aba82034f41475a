//! Listing filter invariants and the bookings empty state.
//!
//! Uses proptest to verify:
//! 1. All is the identity
//! 2. Active and Inactive only keep their status and partition the source
//! 3. Filtering is idempotent and keeps source order

use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use skillswap::core::{Context, Module};
use skillswap::domain::{mock, ListingFilter, ListingRecord, ListingStatus};
use skillswap::modules::bookings::{BookingsView, EMPTY_HINT, EMPTY_TITLE};
use skillswap::modules::ListingsView;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_status() -> impl Strategy<Value = ListingStatus> {
    prop_oneof![Just(ListingStatus::Active), Just(ListingStatus::Inactive)]
}

fn arb_listings() -> impl Strategy<Value = Vec<ListingRecord>> {
    prop::collection::vec(("[a-zA-Z ]{0,12}", arb_status(), any::<bool>()), 0..40).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, status, has_image))| ListingRecord {
                    id: i as u32 + 1,
                    title,
                    image_url: if has_image {
                        format!("https://picsum.photos/seed/{i}/400")
                    } else {
                        String::new()
                    },
                    status,
                })
                .collect()
        },
    )
}

fn arb_filter() -> impl Strategy<Value = ListingFilter> {
    prop::sample::select(ListingFilter::ALL.to_vec())
}

fn ids(listings: &[&ListingRecord]) -> Vec<u32> {
    listings.iter().map(|l| l.id).collect()
}

// ── 1-3. Filter properties ───────────────────────────────────────────

proptest! {
    #[test]
    fn all_is_identity(source in arb_listings()) {
        let filtered: Vec<ListingRecord> =
            ListingFilter::All.apply(&source).into_iter().cloned().collect();
        prop_assert_eq!(filtered, source);
    }

    #[test]
    fn status_filters_partition_source(source in arb_listings()) {
        let active = ListingFilter::Active.apply(&source);
        let inactive = ListingFilter::Inactive.apply(&source);
        prop_assert!(active.iter().all(|l| l.status == ListingStatus::Active));
        prop_assert!(inactive.iter().all(|l| l.status == ListingStatus::Inactive));
        prop_assert_eq!(active.len() + inactive.len(), source.len());
    }

    #[test]
    fn filtering_is_idempotent(source in arb_listings(), filter in arb_filter()) {
        let once: Vec<ListingRecord> = filter.apply(&source).into_iter().cloned().collect();
        let twice = filter.apply(&once);
        prop_assert_eq!(ids(&twice), once.iter().map(|l| l.id).collect::<Vec<_>>());
    }

    #[test]
    fn filtering_preserves_source_order(source in arb_listings(), filter in arb_filter()) {
        let kept = ids(&filter.apply(&source));
        let mut sorted = kept.clone();
        sorted.sort_unstable();
        prop_assert_eq!(kept, sorted);
    }

    #[test]
    fn view_matches_pure_filter(source in arb_listings(), filter in arb_filter()) {
        let mut view = ListingsView::with_source(source.clone());
        view.set_filter(filter);
        prop_assert_eq!(ids(&view.filtered()), ids(&filter.apply(&source)));
        prop_assert!(!view.dropdown_open());
    }
}

// ── Generated listings scenario ──────────────────────────────────────

#[test]
fn generated_listings_scenario() {
    let source = mock::listings();
    assert_eq!(source.len(), 12);

    assert_eq!(ids(&ListingFilter::Active.apply(&source)), vec![1, 4, 7, 10]);
    assert_eq!(
        ids(&ListingFilter::Inactive.apply(&source)),
        vec![2, 3, 5, 6, 8, 9, 11, 12]
    );
    assert_eq!(
        ids(&ListingFilter::All.apply(&source)),
        (1..=12).collect::<Vec<_>>()
    );
}

// ── Bookings empty state ─────────────────────────────────────────────

fn render(view: &dyn Module, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| view.render(f, Rect::new(0, 0, width, height), &Context::default()))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn empty_bookings_render_empty_state() {
    let view = BookingsView::with_source(Vec::new());
    assert!(view.is_empty_state());
    let screen = render(&view, 80, 24);
    assert!(screen.contains(EMPTY_TITLE));
    assert!(screen.contains(EMPTY_HINT));
    assert!(!screen.contains("You booked:"));
}

#[test]
fn bookings_render_cards() {
    let view = BookingsView::with_source(mock::bookings());
    let screen = render(&view, 80, 24);
    assert!(screen.contains("You booked:"));
    assert!(screen.contains("August 10, 2025"));
    assert!(!screen.contains(EMPTY_TITLE));
}
