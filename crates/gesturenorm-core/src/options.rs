//! Configuration options for cleaning and normalization.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::mode::{RotationMode, ScaleMode, TranslationMode};

/// Default distance below which consecutive positions count as duplicates.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 1e-7;

/// Default jump threshold, as a multiple of the mean consecutive distance.
pub const DEFAULT_JUMP_FACTOR: f64 = 3.0;

/// Options for duplicate removal and jump segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Whether to renumber frames to `1..=n` after each cleaning step.
    pub renumber_frames: bool,

    /// Positions closer than this to the last kept position are dropped.
    pub duplicate_threshold: f64,

    /// Consecutive distances above `jump_factor * mean` split the motion.
    pub jump_factor: f64,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            renumber_frames: true,
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
            jump_factor: DEFAULT_JUMP_FACTOR,
        }
    }
}

impl CleanOptions {
    /// Creates cleaning options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether frames are renumbered.
    #[must_use]
    pub fn with_renumber_frames(mut self, renumber: bool) -> Self {
        self.renumber_frames = renumber;
        self
    }

    /// Sets the duplicate distance threshold.
    #[must_use]
    pub fn with_duplicate_threshold(mut self, threshold: f64) -> Self {
        self.duplicate_threshold = threshold;
        self
    }

    /// Sets the jump factor.
    #[must_use]
    pub fn with_jump_factor(mut self, factor: f64) -> Self {
        self.jump_factor = factor;
        self
    }

    /// Checks that the threshold is finite and non-negative and the jump
    /// factor is finite and positive.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.duplicate_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(MotionError::InvalidOption {
                name: "duplicate_threshold",
                value: threshold,
                requirement: "must be finite and non-negative",
            });
        }
        validate_jump_factor(self.jump_factor)
    }
}

/// Checks that a jump factor is finite and positive.
pub fn validate_jump_factor(factor: f64) -> Result<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(MotionError::InvalidOption {
            name: "jump_factor",
            value: factor,
            requirement: "must be finite and positive",
        });
    }
    Ok(())
}

/// Options for a full normalization run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Translation reference.
    pub translation: TranslationMode,

    /// Rotation reference.
    pub rotation: RotationMode,

    /// Scale reference.
    pub scale: ScaleMode,

    /// Whether to clean the motion after normalizing it.
    pub cleaning: bool,

    /// Cleaning parameters, evaluated in normalized coordinates.
    pub clean: CleanOptions,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            translation: TranslationMode::None,
            rotation: RotationMode::None,
            scale: ScaleMode::None,
            cleaning: true,
            clean: CleanOptions::default(),
        }
    }
}

impl NormalizeOptions {
    /// Creates normalization options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the translation mode.
    #[must_use]
    pub fn with_translation(mut self, mode: TranslationMode) -> Self {
        self.translation = mode;
        self
    }

    /// Sets the rotation mode.
    #[must_use]
    pub fn with_rotation(mut self, mode: RotationMode) -> Self {
        self.rotation = mode;
        self
    }

    /// Sets the scale mode.
    #[must_use]
    pub fn with_scale(mut self, mode: ScaleMode) -> Self {
        self.scale = mode;
        self
    }

    /// Enables or disables cleaning.
    #[must_use]
    pub fn with_cleaning(mut self, cleaning: bool) -> Self {
        self.cleaning = cleaning;
        self
    }

    /// Sets the cleaning parameters.
    #[must_use]
    pub fn with_clean_options(mut self, clean: CleanOptions) -> Self {
        self.clean = clean;
        self
    }

    /// Parses options from JSON. Missing fields take their defaults.
    ///
    /// Out-of-range cleaning parameters are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.clean.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
