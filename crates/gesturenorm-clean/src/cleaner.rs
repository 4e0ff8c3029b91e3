//! Cleaning façade: duplicate removal followed by jump segmentation.

use gesturenorm_core::{CleanOptions, Motion, Result};

use crate::dedup::PointDeduplicator;
use crate::jumps::JumpSegmenter;

/// Runs [`PointDeduplicator`] and then [`JumpSegmenter`] on one motion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cleaner {
    options: CleanOptions,
}

impl Cleaner {
    /// Creates a cleaner with the given options.
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Returns the cleaning options.
    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Cleans `motion` in place and returns the total number of removed poses.
    ///
    /// Jump segmentation runs on the deduplicated motion, so it fails if
    /// fewer than two distinct poses survive deduplication. On any error
    /// `motion` is left as it was.
    pub fn clean(&self, motion: &mut Motion) -> Result<usize> {
        self.options.validate()?;

        let mut cleaned = motion.clone();
        let duplicates = PointDeduplicator::from_options(&self.options).apply(&mut cleaned);
        let dropped = JumpSegmenter::from_options(&self.options).apply(&mut cleaned)?;

        *motion = cleaned;
        Ok(duplicates + dropped)
    }
}
