//! gesturenorm: cleaning and reference-frame normalization of motion-capture
//! trajectories.
//!
//! A recorded gesture is a [`Motion`]: poses with a 3D position and a unit
//! quaternion orientation. Before two recordings can be compared they are
//! brought into a canonical frame and cleaned of sensor artifacts.
//!
//! # Quick Start
//!
//! ```no_run
//! use gesturenorm::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let options = NormalizeOptions::new()
//!         .with_translation(TranslationMode::Median)
//!         .with_rotation(RotationMode::Mean)
//!         .with_scale(ScaleMode::Largest);
//!
//!     let out = read_normalized("recordings/wave/training/wave_01.csv", &options)?;
//!     println!("{} poses, {} removed", out.motion.len(), out.removed);
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! [`Normalizer`] runs, on one working motion and in this order:
//!
//! 1. [`translate`] by a reference point
//! 2. [`rotate`] into the frame of a reference orientation
//! 3. [`scale`] about the bounding-box center
//! 4. [`Cleaner`]: duplicate removal, then longest jump-free run
//!
//! Cleaning thresholds are therefore evaluated in normalized coordinates.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod input;
pub mod recognize;
pub mod report;

use std::path::Path;

// Re-export core types
pub use gesturenorm_core::{
    error::{MotionError, Result},
    mode::{RotationMode, ScaleMode, TranslationMode},
    motion::{Motion, Pose, FEATURE_COLUMNS, POSE_COLUMNS},
    options::{CleanOptions, NormalizeOptions},
    reference::NormalizationReference,
    QuaternionAverager,
};

// Re-export cleaning
pub use gesturenorm_clean::{Cleaner, JumpSegmenter, PointDeduplicator};

// Re-export normalization
pub use gesturenorm_normalize::{
    normalize, rotate, scale, translate, EigenAverager, NormalizedMotion, Normalizer,
};

pub use batch::{normalize_batch, normalize_files, BatchOutcome, SkippedInput};
pub use input::{read_motion, read_motion_file};
pub use recognize::{Recognition, Recognizer, SequenceModel, TrainingSet};
pub use report::ReportWriter;

pub use glam::{DQuat, DVec3};

/// Installs the `env_logger` backend for the `log` macros.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    if env_logger::try_init().is_ok() {
        log::debug!("gesturenorm logging initialized");
    }
}

/// Reads a motion file and normalizes it.
pub fn read_normalized(path: impl AsRef<Path>, options: &NormalizeOptions) -> Result<NormalizedMotion> {
    normalize(read_motion_file(path)?, options)
}
