pub mod rating_bars;

pub use rating_bars::RatingBars;
