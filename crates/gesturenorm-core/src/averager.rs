//! Quaternion averaging seam.

use glam::DQuat;

use crate::error::Result;

/// Computes a representative rotation for a set of unit quaternions.
///
/// Implementations must treat `q` and `-q` as the same rotation.
pub trait QuaternionAverager {
    /// Averages a non-empty list of unit quaternions.
    fn average(&self, rotations: &[DQuat]) -> Result<DQuat>;
}

impl<F> QuaternionAverager for F
where
    F: Fn(&[DQuat]) -> Result<DQuat>,
{
    fn average(&self, rotations: &[DQuat]) -> Result<DQuat> {
        self(rotations)
    }
}
