//! Gaveta item search library.
//!
//! Provides live substring search over every item name in an organizer.
//!
//! # Design
//!
//! - A query is split on whitespace; an item matches when its lowercase name
//!   contains every token, in any order.
//! - Matching runs over the cached lowercase names, so the scan never
//!   re-lowercases display text.
//! - Hits keep organizer traversal order (cabinet, then drawer, then item),
//!   which is also the display order of the result list.
//!
//! # Live-typing API
//!
//! - `query()`: runs one query, skipping consecutive duplicates
//! - `reset()`: forgets the previous query after the caller clears its view
//!
//! Queries shorter than [`SearchConfig::min_query_len`] clear results instead
//! of matching everything.

mod config;
mod engine;
mod results;

pub use config::SearchConfig;
pub use engine::{QueryOutcome, SearchEngine};
pub use results::{SearchHit, SearchResults};
