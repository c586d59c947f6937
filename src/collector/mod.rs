//! Post collection
//!
//! Paginated timeline fetching and snapshot persistence. The analysis
//! pipeline only ever sees the collector's output as an in-memory sequence.

mod client;
pub mod snapshot;

pub use client::{post_texts, TimelineClient};
