//! Normalization façade.
//!
//! Stages run in a fixed order on the same working motion, each through a
//! `&mut Motion`: translate, rotate, scale, then (optionally) clean. Every
//! stage sees the result of the previous one. A failing stage never leaves a
//! partially normalized motion behind.

use gesturenorm_clean::Cleaner;
use gesturenorm_core::{Motion, NormalizationReference, NormalizeOptions, QuaternionAverager, Result};

use crate::average::EigenAverager;
use crate::rotation::rotate;
use crate::scaling::scale;
use crate::translation::translate;

/// A cleaned, normalized motion together with how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMotion {
    /// The normalized (and possibly cleaned) motion.
    pub motion: Motion,
    /// References applied by the three normalizers.
    pub reference: NormalizationReference,
    /// Poses removed by cleaning (duplicates plus jump drops).
    pub removed: usize,
}

/// Runs the translation, rotation, scale and cleaning stages.
#[derive(Debug, Clone, Default)]
pub struct Normalizer<A = EigenAverager> {
    options: NormalizeOptions,
    averager: A,
}

impl Normalizer<EigenAverager> {
    /// Creates a normalizer that averages rotations with [`EigenAverager`].
    pub fn new(options: NormalizeOptions) -> Self {
        Self::with_averager(options, EigenAverager)
    }
}

impl<A: QuaternionAverager> Normalizer<A> {
    /// Creates a normalizer with a custom quaternion averager.
    pub fn with_averager(options: NormalizeOptions, averager: A) -> Self {
        Self { options, averager }
    }

    /// Returns the normalization options.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalizes `motion` in place and returns the references and the number
    /// of poses removed by cleaning.
    ///
    /// On error `motion` is left as it was.
    pub fn normalize_in_place(&self, motion: &mut Motion) -> Result<(NormalizationReference, usize)> {
        let mut working = motion.clone();
        let result = self.run_stages(&mut working)?;
        *motion = working;
        Ok(result)
    }

    /// Normalizes an owned motion.
    pub fn normalize(&self, mut motion: Motion) -> Result<NormalizedMotion> {
        let (reference, removed) = self.run_stages(&mut motion)?;
        Ok(NormalizedMotion {
            motion,
            reference,
            removed,
        })
    }

    fn run_stages(&self, motion: &mut Motion) -> Result<(NormalizationReference, usize)> {
        motion.require_poses("normalization", 1)?;
        if self.options.cleaning {
            self.options.clean.validate()?;
        }

        let reference = NormalizationReference {
            translation: translate(motion, self.options.translation)?,
            rotation: rotate(motion, self.options.rotation, &self.averager)?,
            scale: scale(motion, self.options.scale)?,
        };

        let removed = if self.options.cleaning {
            Cleaner::new(self.options.clean).clean(motion)?
        } else {
            0
        };

        log::debug!(
            "normalized motion to {} poses, {removed} removed",
            motion.len()
        );
        Ok((reference, removed))
    }
}

/// Normalizes `motion` with the default quaternion averager.
pub fn normalize(motion: Motion, options: &NormalizeOptions) -> Result<NormalizedMotion> {
    Normalizer::new(*options).normalize(motion)
}
