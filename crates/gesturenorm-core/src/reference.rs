//! The reference values that produced a normalized motion.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Translation, rotation and scale references of one normalization run.
///
/// Each value is the one a normalizer actually applied; a disabled step
/// reports its no-op value (zero translation, identity rotation, zero scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationReference {
    /// Vector subtracted from every position.
    pub translation: DVec3,
    /// Orientation whose inverse re-expresses the motion.
    pub rotation: DQuat,
    /// Per-axis scale factor.
    pub scale: DVec3,
}

impl Default for NormalizationReference {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ZERO,
        }
    }
}

impl NormalizationReference {
    /// Rotation reference in scalar-first order: `[w, x, y, z]`.
    pub fn rotation_wxyz(&self) -> [f64; 4] {
        let q = self.rotation;
        [q.w, q.x, q.y, q.z]
    }
}
