//! Hand-off to sequence models.
//!
//! A sequence model sees a normalized motion only as its feature matrix
//! (`[x, y, z, qw, qx, qy, qz]` per pose). Training takes several motions
//! concatenated, together with their lengths.

use crate::{Motion, MotionError, Result, FEATURE_COLUMNS};

/// One feature row per pose.
pub type FeatureRow = [f64; FEATURE_COLUMNS];

/// A trained model that scores how well a motion fits it.
pub trait SequenceModel {
    /// Returns the score of one motion's feature matrix. Higher is better.
    fn score(&self, features: &[FeatureRow]) -> f64;
}

/// Concatenated feature matrices of several motions and their lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    /// All feature rows, motion after motion.
    pub features: Vec<FeatureRow>,
    /// Number of rows contributed by each motion.
    pub lengths: Vec<usize>,
}

impl TrainingSet {
    /// Creates an empty training set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one motion.
    pub fn push(&mut self, motion: &Motion) {
        self.features.extend(motion.feature_matrix());
        self.lengths.push(motion.len());
    }

    /// Returns the number of motions.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Returns whether no motion has been added.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl<'a> FromIterator<&'a Motion> for TrainingSet {
    fn from_iter<I: IntoIterator<Item = &'a Motion>>(iter: I) -> Self {
        let mut set = Self::new();
        for motion in iter {
            set.push(motion);
        }
        set
    }
}

/// Scores of one motion against every model.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    /// Score per model, in registration order.
    pub scores: Vec<f64>,
    /// Index of the best scoring model.
    pub best: usize,
    /// Label of the best scoring model.
    pub label: String,
}

/// A set of labelled sequence models.
pub struct Recognizer<M> {
    labels: Vec<String>,
    models: Vec<M>,
}

impl<M> Default for Recognizer<M> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            models: Vec::new(),
        }
    }
}

impl<M: SequenceModel> Recognizer<M> {
    /// Creates an empty recognizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model under `label`.
    #[must_use]
    pub fn with_model(mut self, label: impl Into<String>, model: M) -> Self {
        self.add_model(label, model);
        self
    }

    /// Adds a model under `label`.
    pub fn add_model(&mut self, label: impl Into<String>, model: M) {
        self.labels.push(label.into());
        self.models.push(model);
    }

    /// Returns the model labels in registration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Scores `motion` against every model. Ties go to the first model.
    pub fn recognize(&self, motion: &Motion) -> Result<Recognition> {
        if self.models.is_empty() {
            return Err(MotionError::insufficient("recognition", 1, 0));
        }

        let features = motion.feature_matrix();
        let scores: Vec<f64> = self.models.iter().map(|m| m.score(&features)).collect();
        let best = scores
            .iter()
            .enumerate()
            .fold(0, |best, (i, &score)| if score > scores[best] { i } else { best });

        Ok(Recognition {
            label: self.labels[best].clone(),
            scores,
            best,
        })
    }
}
