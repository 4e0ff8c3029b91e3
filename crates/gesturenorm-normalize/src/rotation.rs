//! Rotation normalization.
//!
//! Given a reference orientation `r`, every pose is re-expressed in the
//! frame where `r` becomes the identity: positions are rotated by `r⁻¹` and
//! orientations are composed as `q * r⁻¹`.

use gesturenorm_core::{DQuat, Motion, QuaternionAverager, Result, RotationMode};

const STAGE: &str = "rotation";

/// Re-expresses the motion in the frame of the reference orientation picked
/// by `mode`, and returns that reference.
///
/// [`RotationMode::Mean`] delegates to `averager`. [`RotationMode::None`]
/// leaves the motion untouched and returns the identity.
pub fn rotate<A>(motion: &mut Motion, mode: RotationMode, averager: &A) -> Result<DQuat>
where
    A: QuaternionAverager + ?Sized,
{
    let reference = rotation_reference(motion, mode, averager)?;
    if mode != RotationMode::None {
        rotate_by(motion, reference);
    }
    log::debug!("rotation ({mode}) reference {reference}");
    Ok(reference)
}

/// Computes the rotation reference without modifying the motion.
pub fn rotation_reference<A>(motion: &Motion, mode: RotationMode, averager: &A) -> Result<DQuat>
where
    A: QuaternionAverager + ?Sized,
{
    motion.require_poses(STAGE, 1)?;
    match mode {
        RotationMode::None => Ok(DQuat::IDENTITY),
        RotationMode::Start => Ok(motion.first().map_or(DQuat::IDENTITY, |p| p.rotation)),
        RotationMode::End => Ok(motion.last().map_or(DQuat::IDENTITY, |p| p.rotation)),
        RotationMode::Mean => {
            let rotations: Vec<DQuat> = motion.rotations().collect();
            averager.average(&rotations)
        }
    }
}

/// Applies the inverse of `reference` to every pose.
///
/// `reference` must be a unit quaternion.
pub fn rotate_by(motion: &mut Motion, reference: DQuat) {
    let inverse = reference.inverse();
    for pose in motion.iter_mut() {
        pose.position = inverse * pose.position;
        pose.rotation = pose.rotation * inverse;
    }
}
