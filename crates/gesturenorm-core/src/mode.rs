//! Normalization modes.
//!
//! Each normalizer is driven by a closed set of modes with an explicit
//! `None` variant. Strings are parsed by exact keyword (case-insensitive);
//! the empty string and `"none"` both select `None`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

/// Reference point used to translate a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// No translation.
    #[default]
    None,
    /// First pose moves to the origin.
    Start,
    /// Last pose moves to the origin.
    End,
    /// Component-wise mean moves to the origin.
    Mean,
    /// Component-wise median moves to the origin.
    Median,
}

impl TranslationMode {
    pub const ALL: [Self; 5] = [Self::None, Self::Start, Self::End, Self::Mean, Self::Median];

    /// Returns the keyword for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Start => "start",
            Self::End => "end",
            Self::Mean => "mean",
            Self::Median => "median",
        }
    }

    /// Parses a keyword, falling back to [`TranslationMode::None`] with a
    /// warning if it is not recognized.
    pub fn parse_lenient(s: &str) -> Self {
        lenient(s.parse())
    }
}

/// Reference orientation used to rotate a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationMode {
    /// No rotation.
    #[default]
    None,
    /// Average of all orientations.
    Mean,
    /// Orientation of the first pose.
    Start,
    /// Orientation of the last pose.
    End,
}

impl RotationMode {
    pub const ALL: [Self; 4] = [Self::None, Self::Mean, Self::Start, Self::End];

    /// Returns the keyword for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mean => "mean",
            Self::Start => "start",
            Self::End => "end",
        }
    }

    /// Parses a keyword, falling back to [`RotationMode::None`] with a
    /// warning if it is not recognized.
    pub fn parse_lenient(s: &str) -> Self {
        lenient(s.parse())
    }
}

/// Reference extent used to scale a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// No scaling.
    #[default]
    None,
    /// Every axis independently to unit extent.
    Components,
    /// Uniformly, so the largest axis has unit extent.
    Largest,
    /// Uniformly, so the smallest axis has unit extent.
    Smallest,
}

impl ScaleMode {
    pub const ALL: [Self; 4] = [Self::None, Self::Components, Self::Largest, Self::Smallest];

    /// Returns the keyword for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Components => "components",
            Self::Largest => "largest",
            Self::Smallest => "smallest",
        }
    }

    /// Parses a keyword, falling back to [`ScaleMode::None`] with a warning
    /// if it is not recognized.
    pub fn parse_lenient(s: &str) -> Self {
        lenient(s.parse())
    }
}

impl FromStr for TranslationMode {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            _ => Err(unrecognized("translation", s)),
        }
    }
}

impl FromStr for RotationMode {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "mean" => Ok(Self::Mean),
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            _ => Err(unrecognized("rotation", s)),
        }
    }
}

impl FromStr for ScaleMode {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "components" => Ok(Self::Components),
            "largest" => Ok(Self::Largest),
            "smallest" => Ok(Self::Smallest),
            _ => Err(unrecognized("scale", s)),
        }
    }
}

impl fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn unrecognized(kind: &'static str, value: &str) -> MotionError {
    MotionError::UnrecognizedMode {
        kind,
        value: value.to_string(),
    }
}

fn lenient<M: Default>(parsed: Result<M>) -> M {
    parsed.unwrap_or_else(|err| {
        log::warn!("{err}, normalization step disabled");
        M::default()
    })
}
