//! Collapsing runs of near-identical consecutive samples.

use gesturenorm_core::{CleanOptions, DVec3, Motion, DEFAULT_DUPLICATE_THRESHOLD};

/// Removes poses that sit within a distance threshold of the last kept pose.
///
/// Each pose is compared with the position of the last *retained* pose, not
/// its raw predecessor, so slow drift below the threshold is still kept
/// once it has moved far enough. The first comparison is made against the
/// origin: a first sample within `threshold` of `(0, 0, 0)` is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDeduplicator {
    /// Minimum distance (exclusive) from the last kept position.
    pub threshold: f64,
    /// Whether to renumber frames to `1..=n` afterwards.
    pub renumber_frames: bool,
}

impl Default for PointDeduplicator {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DUPLICATE_THRESHOLD,
            renumber_frames: true,
        }
    }
}

impl PointDeduplicator {
    /// Creates a deduplicator with the given threshold.
    pub fn new(threshold: f64, renumber_frames: bool) -> Self {
        Self {
            threshold,
            renumber_frames,
        }
    }

    /// Creates a deduplicator from cleaning options.
    pub fn from_options(options: &CleanOptions) -> Self {
        Self::new(options.duplicate_threshold, options.renumber_frames)
    }

    /// Filters `motion` in place and returns the number of removed poses.
    ///
    /// An empty motion stays empty and reports zero removals.
    pub fn apply(&self, motion: &mut Motion) -> usize {
        let before = motion.len();
        let mut last_kept = DVec3::ZERO;
        motion.retain(|pose| {
            if pose.position.distance(last_kept) > self.threshold {
                last_kept = pose.position;
                true
            } else {
                false
            }
        });
        if self.renumber_frames {
            motion.renumber_frames();
        }

        let removed = before - motion.len();
        log::debug!(
            "removed {removed} duplicate poses of {before} (threshold {})",
            self.threshold
        );
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesturenorm_core::{DQuat, Pose};
    use proptest::prelude::*;

    fn frames(motion: &Motion) -> Vec<i64> {
        motion.iter().map(|p| p.frame_index).collect()
    }

    #[test]
    fn test_collapses_stationary_cluster() {
        let mut positions = vec![DVec3::ONE; 5];
        positions.push(DVec3::new(1.0, 1.0, 1.0001));
        let mut motion = Motion::from_positions(positions);

        let removed = PointDeduplicator::new(1e-7, false).apply(&mut motion);

        assert_eq!(removed, 4);
        assert_eq!(frames(&motion), vec![1, 6]);
    }

    #[test]
    fn test_renumbers_kept_frames() {
        let mut motion = Motion::from_positions([DVec3::ONE, DVec3::ONE, DVec3::X, DVec3::Y]);
        let removed = PointDeduplicator::default().apply(&mut motion);
        assert_eq!(removed, 1);
        assert_eq!(frames(&motion), vec![1, 2, 3]);
    }

    #[test]
    fn test_compares_against_last_kept_pose() {
        // Every step is below the threshold, but the drift accumulates.
        let mut motion =
            Motion::from_positions((0..5).map(|i| DVec3::new(2.0 + 0.4 * f64::from(i), 0.0, 0.0)));
        let removed = PointDeduplicator::new(1.0, false).apply(&mut motion);
        assert_eq!(removed, 3);
        assert_eq!(frames(&motion), vec![1, 4]);
    }

    #[test]
    fn test_first_sample_near_origin_is_dropped() {
        let mut motion = Motion::from_poses(vec![
            Pose::new(1, DVec3::ZERO, DQuat::IDENTITY),
            Pose::new(2, DVec3::X, DQuat::IDENTITY),
        ]);
        let removed = PointDeduplicator::new(1e-7, false).apply(&mut motion);
        assert_eq!(removed, 1);
        assert_eq!(frames(&motion), vec![2]);
    }

    #[test]
    fn test_empty_motion() {
        let mut motion = Motion::new();
        assert_eq!(PointDeduplicator::default().apply(&mut motion), 0);
        assert!(motion.is_empty());
    }

    proptest! {
        #[test]
        fn prop_second_pass_removes_nothing(
            coords in prop::collection::vec((-5i32..5, -5i32..5, -5i32..5), 0..40),
            threshold in 0.0f64..2.0,
        ) {
            let mut motion = Motion::from_positions(
                coords.iter().map(|&(x, y, z)| DVec3::new(f64::from(x), f64::from(y), f64::from(z))),
            );
            let dedup = PointDeduplicator::new(threshold, true);
            dedup.apply(&mut motion);
            let after_first = motion.clone();

            prop_assert_eq!(dedup.apply(&mut motion), 0);
            prop_assert_eq!(&motion, &after_first);
            prop_assert_eq!(frames(&motion), (1..=motion.len() as i64).collect::<Vec<_>>());
        }
    }
}
