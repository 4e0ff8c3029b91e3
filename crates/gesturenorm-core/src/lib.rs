//! Core types for gesturenorm.
//!
//! This crate provides the data model shared by the cleaning and
//! normalization crates:
//! - [`Pose`] and [`Motion`] for recorded trajectories
//! - [`TranslationMode`], [`RotationMode`] and [`ScaleMode`] selectors
//! - [`NormalizeOptions`] and [`CleanOptions`] configuration
//! - [`NormalizationReference`] results and the [`QuaternionAverager`] seam

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod averager;
pub mod error;
pub mod mode;
pub mod motion;
pub mod options;
pub mod reference;

pub use averager::QuaternionAverager;
pub use error::{MotionError, Result};
pub use mode::{RotationMode, ScaleMode, TranslationMode};
pub use motion::{Motion, Pose, FEATURE_COLUMNS, POSE_COLUMNS};
pub use options::{
    validate_jump_factor, CleanOptions, NormalizeOptions, DEFAULT_DUPLICATE_THRESHOLD,
    DEFAULT_JUMP_FACTOR,
};
pub use reference::NormalizationReference;

// Re-export glam types for convenience
pub use glam::{DQuat, DVec3};
