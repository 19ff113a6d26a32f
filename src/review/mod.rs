//! Review-queue aggregation
//!
//! Fetches the open merge requests, filters them by configured authors,
//! enriches each with its approval gate, and derives per-MR blockers.

mod blockers;
mod filter;
mod queue;

pub use blockers::derive_blockers;
pub use filter::filter_by_authors;
pub use queue::fetch_review_queue;
