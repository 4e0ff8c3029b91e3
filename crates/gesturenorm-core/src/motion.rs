//! Poses and motions.
//!
//! A [`Motion`] is an ordered sequence of [`Pose`] samples; append order is
//! temporal order. Data rows use the layout
//! `[frame, x, y, z, qw, qx, qy, qz, ...extra]` with a scalar-first quaternion.

use std::ops::Range;

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

/// Number of leading columns a data row must hold to describe a pose.
pub const POSE_COLUMNS: usize = 8;

/// Number of per-pose features handed to a sequence model.
pub const FEATURE_COLUMNS: usize = 7;

/// One trajectory sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Frame identifier, increasing along the motion.
    pub frame_index: i64,
    /// Position in 3D space.
    pub position: DVec3,
    /// Orientation as a unit quaternion. Never renormalized by this crate.
    pub rotation: DQuat,
    /// Trailing payload carried through unchanged.
    pub extra: Vec<f64>,
}

impl Pose {
    /// Creates a pose without extra payload.
    pub fn new(frame_index: i64, position: DVec3, rotation: DQuat) -> Self {
        Self {
            frame_index,
            position,
            rotation,
            extra: Vec::new(),
        }
    }

    /// Attaches a trailing payload.
    #[must_use]
    pub fn with_extra(mut self, extra: Vec<f64>) -> Self {
        self.extra = extra;
        self
    }

    /// Builds a pose from a data row.
    ///
    /// Returns `None` if the row has fewer than [`POSE_COLUMNS`] values.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_row(row: &[f64]) -> Option<Self> {
        if row.len() < POSE_COLUMNS {
            return None;
        }
        Some(Self {
            frame_index: row[0].round() as i64,
            position: DVec3::new(row[1], row[2], row[3]),
            rotation: DQuat::from_xyzw(row[5], row[6], row[7], row[4]),
            extra: row[POSE_COLUMNS..].to_vec(),
        })
    }

    /// Converts the pose back into a data row.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_row(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(POSE_COLUMNS + self.extra.len());
        row.push(self.frame_index as f64);
        row.extend_from_slice(&self.features());
        row.extend_from_slice(&self.extra);
        row
    }

    /// Position and scalar-first orientation: `[x, y, z, qw, qx, qy, qz]`.
    pub fn features(&self) -> [f64; FEATURE_COLUMNS] {
        let p = self.position;
        let q = self.rotation;
        [p.x, p.y, p.z, q.w, q.x, q.y, q.z]
    }
}

/// An ordered sequence of poses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    poses: Vec<Pose>,
}

impl Motion {
    /// Creates an empty motion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a motion from poses in temporal order.
    pub fn from_poses(poses: Vec<Pose>) -> Self {
        Self { poses }
    }

    /// Creates a motion from positions, numbering frames from 1 and using
    /// the identity orientation.
    pub fn from_positions(positions: impl IntoIterator<Item = DVec3>) -> Self {
        positions
            .into_iter()
            .zip(1..)
            .map(|(position, frame)| Pose::new(frame, position, DQuat::IDENTITY))
            .collect()
    }

    /// Creates a motion from data rows.
    ///
    /// Line numbers in errors are 1-based row positions.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let row = row.as_ref();
                Pose::from_row(row).ok_or(MotionError::MalformedRow {
                    line: i + 1,
                    columns: row.len(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::from_poses)
    }

    /// Returns the number of poses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Returns whether the motion has no poses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Fails with [`MotionError::InsufficientData`] if the motion has fewer
    /// than `required` poses.
    pub fn require_poses(&self, stage: &'static str, required: usize) -> Result<()> {
        if self.len() < required {
            return Err(MotionError::insufficient(stage, required, self.len()));
        }
        Ok(())
    }

    /// Appends a pose.
    pub fn push(&mut self, pose: Pose) {
        self.poses.push(pose);
    }

    /// Returns the poses as a slice.
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    /// Returns the poses as a mutable slice.
    pub fn poses_mut(&mut self) -> &mut [Pose] {
        &mut self.poses
    }

    /// Consumes the motion and returns its poses.
    pub fn into_poses(self) -> Vec<Pose> {
        self.poses
    }

    /// Returns the first pose, if any.
    pub fn first(&self) -> Option<&Pose> {
        self.poses.first()
    }

    /// Returns the last pose, if any.
    pub fn last(&self) -> Option<&Pose> {
        self.poses.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pose> {
        self.poses.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Pose> {
        self.poses.iter_mut()
    }

    /// Iterates over the pose positions.
    pub fn positions(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.poses.iter().map(|p| p.position)
    }

    /// Iterates over the pose orientations.
    pub fn rotations(&self) -> impl Iterator<Item = DQuat> + '_ {
        self.poses.iter().map(|p| p.rotation)
    }

    /// Keeps only the poses for which `keep` returns true, preserving order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Pose) -> bool,
    {
        self.poses.retain(keep);
    }

    /// Drops every pose outside `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn keep_range(&mut self, range: Range<usize>) {
        self.poses.truncate(range.end);
        self.poses.drain(..range.start);
    }

    /// Renumbers frames to consecutive integers starting at 1.
    pub fn renumber_frames(&mut self) {
        for (pose, frame) in self.poses.iter_mut().zip(1..) {
            pose.frame_index = frame;
        }
    }

    /// Component-wise `(min, max)` over all positions, or `None` if empty.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut positions = self.positions();
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// The per-pose feature rows consumed by a sequence model.
    pub fn feature_matrix(&self) -> Vec<[f64; FEATURE_COLUMNS]> {
        self.poses.iter().map(Pose::features).collect()
    }

    /// All poses as data rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.poses.iter().map(Pose::to_row).collect()
    }
}

impl FromIterator<Pose> for Motion {
    fn from_iter<I: IntoIterator<Item = Pose>>(iter: I) -> Self {
        Self::from_poses(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Motion {
    type Item = &'a Pose;
    type IntoIter = std::slice::Iter<'a, Pose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}

impl IntoIterator for Motion {
    type Item = Pose;
    type IntoIter = std::vec::IntoIter<Pose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.into_iter()
    }
}
