//! Recommendation service components

pub mod catalog;
pub mod favorites;
pub mod quotes;
pub mod recommender;

pub use favorites::{AddOutcome, Favorites, RemoveOutcome};
pub use quotes::{fetch_quotes, Quote, QuoteError, QuoteProvider, ZenQuotesClient, FALLBACK_QUOTE};
pub use recommender::Recommender;
