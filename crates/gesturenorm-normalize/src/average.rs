//! Eigen-decomposition quaternion averaging.
//!
//! The average of unit quaternions `q_i` is the eigenvector belonging to the
//! largest eigenvalue of `M = (1/n) * sum(q_i * q_i^T)`. Because `q` and `-q`
//! contribute the same outer product, the result does not depend on the
//! sign of any input.

use gesturenorm_core::{DQuat, MotionError, QuaternionAverager, Result};
use nalgebra::{Matrix4, Vector4};

const STAGE: &str = "quaternion averaging";

/// Averages rotations through the dominant eigenvector of their outer
/// product accumulator.
///
/// The sign of the result is fixed so that its scalar part is non-negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct EigenAverager;

impl QuaternionAverager for EigenAverager {
    #[allow(clippy::cast_precision_loss)]
    fn average(&self, rotations: &[DQuat]) -> Result<DQuat> {
        if rotations.is_empty() {
            return Err(MotionError::insufficient(STAGE, 1, 0));
        }

        let mut accumulator = Matrix4::<f64>::zeros();
        for q in rotations {
            let v = Vector4::new(q.w, q.x, q.y, q.z);
            accumulator += v * v.transpose();
        }
        accumulator /= rotations.len() as f64;

        let eigen = accumulator.symmetric_eigen();
        let dominant = eigen.eigenvectors.column(eigen.eigenvalues.imax());
        let mut mean = DQuat::from_xyzw(dominant[1], dominant[2], dominant[3], dominant[0]);
        if mean.w < 0.0 {
            mean = -mean;
        }

        if !mean.is_finite() {
            return Err(MotionError::degenerate(
                STAGE,
                "eigen-decomposition did not produce a finite quaternion",
            ));
        }
        Ok(mean)
    }
}
