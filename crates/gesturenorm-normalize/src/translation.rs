//! Translation normalization.

use gesturenorm_core::{DVec3, Motion, Result, TranslationMode};

const STAGE: &str = "translation";

/// Moves every position by `-reference`, where the reference is picked by
/// `mode`, and returns the reference used.
///
/// [`TranslationMode::None`] leaves the motion untouched and returns the
/// zero vector. Only positions change; frames, orientations and extra
/// payload are left as they are.
pub fn translate(motion: &mut Motion, mode: TranslationMode) -> Result<DVec3> {
    let reference = translation_reference(motion, mode)?;
    if mode != TranslationMode::None {
        translate_by(motion, reference);
    }
    log::debug!("translation ({mode}) reference {reference}");
    Ok(reference)
}

/// Computes the translation reference without modifying the motion.
#[allow(clippy::cast_precision_loss)]
pub fn translation_reference(motion: &Motion, mode: TranslationMode) -> Result<DVec3> {
    motion.require_poses(STAGE, 1)?;
    let reference = match mode {
        TranslationMode::None => DVec3::ZERO,
        TranslationMode::Start => motion.first().map_or(DVec3::ZERO, |p| p.position),
        TranslationMode::End => motion.last().map_or(DVec3::ZERO, |p| p.position),
        TranslationMode::Mean => motion.positions().sum::<DVec3>() / motion.len() as f64,
        TranslationMode::Median => DVec3::new(
            median(motion.positions().map(|p| p.x).collect()),
            median(motion.positions().map(|p| p.y).collect()),
            median(motion.positions().map(|p| p.z).collect()),
        ),
    };
    Ok(reference)
}

/// Subtracts `offset` from every position.
pub fn translate_by(motion: &mut Motion, offset: DVec3) {
    for pose in motion.iter_mut() {
        pose.position -= offset;
    }
}

/// Median of a non-empty list; even lengths average the two middle values.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
