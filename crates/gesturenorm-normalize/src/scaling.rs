//! Scale normalization about the bounding-box center.

use gesturenorm_core::{DVec3, Motion, MotionError, Result, ScaleMode};

const STAGE: &str = "scaling";

/// Rescales positions about the bounding-box center and returns the
/// per-axis factor used.
///
/// Uniform modes return the same factor on all three axes.
/// [`ScaleMode::None`] leaves the motion untouched and returns the zero
/// vector. A zero extent on an axis the mode divides by is reported as
/// [`MotionError::DegenerateGeometry`] and the motion is left untouched.
pub fn scale(motion: &mut Motion, mode: ScaleMode) -> Result<DVec3> {
    let Some((center, factor)) = scale_reference(motion, mode)? else {
        log::debug!("scaling ({mode}) disabled");
        return Ok(DVec3::ZERO);
    };
    scale_about(motion, center, factor);
    log::debug!("scaling ({mode}) factor {factor} about {center}");
    Ok(factor)
}

/// Computes the bounding-box center and scale factor without modifying
/// the motion. Returns `None` for [`ScaleMode::None`].
pub fn scale_reference(motion: &Motion, mode: ScaleMode) -> Result<Option<(DVec3, DVec3)>> {
    let (min, max) = motion
        .bounding_box()
        .ok_or_else(|| MotionError::insufficient(STAGE, 1, 0))?;
    let extent = max - min;
    let center = (max + min) / 2.0;

    let factor = match mode {
        ScaleMode::None => return Ok(None),
        ScaleMode::Components => DVec3::ONE / extent,
        ScaleMode::Largest => DVec3::splat(1.0 / extent.max_element()),
        ScaleMode::Smallest => DVec3::splat(1.0 / extent.min_element()),
    };
    if !factor.is_finite() {
        return Err(MotionError::degenerate(
            STAGE,
            format!("extent {extent} gives scale factor {factor} in {mode} mode"),
        ));
    }
    Ok(Some((center, factor)))
}

/// Maps every position to `center + (position - center) * factor`.
pub fn scale_about(motion: &mut Motion, center: DVec3, factor: DVec3) {
    for pose in motion.iter_mut() {
        pose.position = center + (pose.position - center) * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn extent(motion: &Motion) -> DVec3 {
        let (min, max) = motion.bounding_box().unwrap();
        max - min
    }

    fn sample() -> Motion {
        Motion::from_positions([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(4.0, 1.0, 0.5),
            DVec3::new(2.0, -1.0, 2.0),
        ])
    }

    #[test]
    fn test_components() {
        let mut motion = sample();
        let factor = scale(&mut motion, ScaleMode::Components).unwrap();
        assert_eq!(factor, DVec3::new(0.25, 0.5, 0.5));
        assert!((extent(&motion) - DVec3::ONE).length() < 1e-12);
    }

    #[test]
    fn test_largest_keeps_aspect_ratio() {
        let mut motion = sample();
        let factor = scale(&mut motion, ScaleMode::Largest).unwrap();
        assert_eq!(factor, DVec3::splat(0.25));
        let e = extent(&motion);
        assert!((e.x - 1.0).abs() < 1e-12);
        assert!((e.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_smallest() {
        let mut motion = sample();
        let factor = scale(&mut motion, ScaleMode::Smallest).unwrap();
        assert_eq!(factor, DVec3::splat(0.5));
        assert!((extent(&motion).min_element() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_center_is_fixed() {
        let mut motion = sample();
        let (min, max) = motion.bounding_box().unwrap();
        scale(&mut motion, ScaleMode::Components).unwrap();
        let (new_min, new_max) = motion.bounding_box().unwrap();
        assert!(((min + max) / 2.0 - (new_min + new_max) / 2.0).length() < 1e-12);
    }

    #[test]
    fn test_none_is_noop() {
        let mut motion = sample();
        assert_eq!(scale(&mut motion, ScaleMode::None).unwrap(), DVec3::ZERO);
        assert_eq!(motion, sample());
    }

    #[test]
    fn test_zero_extent_is_degenerate() {
        let mut motion = Motion::from_positions([
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.0, 1.0, 3.0),
            DVec3::new(2.0, 5.0, 1.0),
        ]);
        let before = motion.clone();

        let err = scale(&mut motion, ScaleMode::Components).unwrap_err();
        assert!(matches!(err, MotionError::DegenerateGeometry { .. }));
        assert!(scale(&mut motion, ScaleMode::Smallest).is_err());
        assert_eq!(motion, before);

        // The largest axis is still non-zero, so uniform scaling works.
        assert_eq!(scale(&mut motion, ScaleMode::Largest).unwrap(), DVec3::splat(0.2));
    }

    #[test]
    fn test_single_pose_is_degenerate() {
        let mut motion = Motion::from_positions([DVec3::ONE]);
        assert!(scale(&mut motion, ScaleMode::Largest).is_err());
    }

    proptest! {
        #[test]
        fn prop_largest_gives_unit_extent(
            coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0), 2..30),
        ) {
            let mut motion = Motion::from_positions(coords.iter().map(|&(x, y, z)| DVec3::new(x, y, z)));
            prop_assume!(extent(&motion).max_element() > 1e-6);

            scale(&mut motion, ScaleMode::Largest).unwrap();
            let e = extent(&motion);
            prop_assert!((e.max_element() - 1.0).abs() < 1e-9);
            prop_assert!(e.min_element() <= 1.0 + 1e-9);
        }
    }
}
