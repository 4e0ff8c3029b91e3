//! Reference-frame normalization for gesturenorm.
//!
//! Three independent normalizers bring a motion into a canonical frame:
//! - [`translate`] by a reference point (start, end, mean, median)
//! - [`rotate`] by a reference orientation (mean, start, end)
//! - [`scale`] by a reference extent (components, largest, smallest)
//!
//! [`Normalizer`] chains them and then cleans the result.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod average;
pub mod normalizer;
pub mod rotation;
pub mod scaling;
pub mod translation;

pub use average::EigenAverager;
pub use normalizer::{normalize, NormalizedMotion, Normalizer};
pub use rotation::{rotate, rotate_by, rotation_reference};
pub use scaling::{scale, scale_about, scale_reference};
pub use translation::{translate, translate_by, translation_reference};
