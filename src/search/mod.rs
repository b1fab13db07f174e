//! Dictionary search
//!
//! The word filter, its presentation value, and the helper that turns a
//! played guess into constraint fragments.

mod engine;
pub mod feedback;
mod outcome;

pub use engine::{admits, filter};
pub use outcome::{DISPLAY_LIMIT, SearchOutcome};
