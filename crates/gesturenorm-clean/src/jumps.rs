//! Jump detection and longest-run selection.
//!
//! A jump is a consecutive pair of poses whose distance exceeds
//! `factor * mean`, where `mean` is the mean distance over all consecutive
//! pairs. Jumps split the motion into runs; only the longest run survives.

use std::ops::Range;

use gesturenorm_core::{
    validate_jump_factor, CleanOptions, Motion, MotionError, Result, DEFAULT_JUMP_FACTOR,
};

const STAGE: &str = "jump segmentation";

/// Keeps the longest run of a motion between position jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpSegmenter {
    /// Jump threshold as a multiple of the mean consecutive distance.
    pub factor: f64,
    /// Whether to renumber frames to `1..=n` afterwards.
    pub renumber_frames: bool,
}

impl Default for JumpSegmenter {
    fn default() -> Self {
        Self {
            factor: DEFAULT_JUMP_FACTOR,
            renumber_frames: true,
        }
    }
}

impl JumpSegmenter {
    /// Creates a segmenter with the given jump factor.
    pub fn new(factor: f64, renumber_frames: bool) -> Self {
        Self {
            factor,
            renumber_frames,
        }
    }

    /// Creates a segmenter from cleaning options.
    pub fn from_options(options: &CleanOptions) -> Self {
        Self::new(options.jump_factor, options.renumber_frames)
    }

    /// Cuts `motion` down to its longest jump-free run and returns the number
    /// of dropped poses.
    ///
    /// Fails without touching the motion if the factor is not a finite
    /// positive number, the motion has fewer than two poses, or all of its
    /// positions coincide.
    pub fn apply(&self, motion: &mut Motion) -> Result<usize> {
        let jumps = find_jumps(motion, self.factor)?;
        let total = motion.len();
        let run = longest_run(&jumps, total);
        let dropped = total - run.len();

        log::debug!(
            "{} jumps found, keeping poses {}..{} of {total}",
            jumps.len(),
            run.start,
            run.end
        );

        motion.keep_range(run);
        if self.renumber_frames {
            motion.renumber_frames();
        }
        Ok(dropped)
    }
}

/// Distances between the positions of temporally consecutive poses.
pub fn consecutive_distances(motion: &Motion) -> Vec<f64> {
    motion
        .poses()
        .windows(2)
        .map(|pair| pair[0].position.distance(pair[1].position))
        .collect()
}

/// Returns the indices at which a new run starts because of a jump.
///
/// Index `i` means the distance between pose `i - 1` and pose `i` exceeds
/// `factor` times the mean consecutive distance.
#[allow(clippy::cast_precision_loss)]
pub fn find_jumps(motion: &Motion, factor: f64) -> Result<Vec<usize>> {
    validate_jump_factor(factor)?;
    motion.require_poses(STAGE, 2)?;

    let distances = consecutive_distances(motion);
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    if mean.is_nan() || mean <= 0.0 {
        return Err(MotionError::degenerate(
            STAGE,
            format!("mean consecutive distance is {mean}"),
        ));
    }

    let limit = factor * mean;
    Ok(distances
        .iter()
        .enumerate()
        .filter(|&(_, &distance)| distance > limit)
        .map(|(i, _)| i + 1)
        .collect())
}

/// Picks the longest run of `0..len` delimited by `jumps`.
///
/// `jumps` must be ascending. On equal lengths the earliest run wins.
pub fn longest_run(jumps: &[usize], len: usize) -> Range<usize> {
    let mut best = 0..0;
    let mut start = 0;
    for &end in jumps.iter().chain(std::iter::once(&len)) {
        if end - start > best.len() {
            best = start..end;
        }
        start = end;
    }
    best
}
