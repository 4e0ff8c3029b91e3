//! Trajectory cleaning for gesturenorm.
//!
//! - [`PointDeduplicator`] collapses runs of near-identical samples
//! - [`JumpSegmenter`] keeps the longest run between position jumps
//! - [`Cleaner`] runs both in order

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod cleaner;
pub mod dedup;
pub mod jumps;

pub use cleaner::Cleaner;
pub use dedup::PointDeduplicator;
pub use jumps::{consecutive_distances, find_jumps, longest_run, JumpSegmenter};
