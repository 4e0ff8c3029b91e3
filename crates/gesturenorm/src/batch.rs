//! Normalizing many motions with per-input failure isolation.
//!
//! Each input is processed independently; a failure is logged and recorded
//! as a skipped input while the rest of the batch carries on.

use std::path::Path;

use crate::input::read_motion_file;
use crate::{Motion, MotionError, NormalizedMotion, Normalizer, QuaternionAverager};

/// An input that could not be normalized.
#[derive(Debug)]
pub struct SkippedInput {
    /// Name of the input.
    pub name: String,
    /// Why it was skipped.
    pub error: MotionError,
}

/// Results of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully normalized motions with their names.
    pub normalized: Vec<(String, NormalizedMotion)>,
    /// Inputs that failed.
    pub skipped: Vec<SkippedInput>,
}

impl BatchOutcome {
    /// Total number of inputs seen.
    pub fn total(&self) -> usize {
        self.normalized.len() + self.skipped.len()
    }

    fn record(&mut self, name: String, result: crate::Result<NormalizedMotion>) {
        match result {
            Ok(normalized) => self.normalized.push((name, normalized)),
            Err(error) => {
                log::warn!("skipping '{name}': {error}");
                self.skipped.push(SkippedInput { name, error });
            }
        }
    }

    fn log_summary(&self) {
        log::info!(
            "normalized {} of {} motions, {} skipped",
            self.normalized.len(),
            self.total(),
            self.skipped.len()
        );
    }
}

/// Normalizes named motions.
pub fn normalize_batch<A, I>(normalizer: &Normalizer<A>, inputs: I) -> BatchOutcome
where
    A: QuaternionAverager,
    I: IntoIterator<Item = (String, Motion)>,
{
    let mut outcome = BatchOutcome::default();
    for (name, motion) in inputs {
        let result = normalizer.normalize(motion);
        outcome.record(name, result);
    }
    outcome.log_summary();
    outcome
}

/// Reads and normalizes motion files, named by their file stem.
///
/// Files are processed in the given order; unreadable files are skipped
/// like any other failing input.
pub fn normalize_files<A, P, I>(normalizer: &Normalizer<A>, paths: I) -> BatchOutcome
where
    A: QuaternionAverager,
    P: AsRef<Path>,
    I: IntoIterator<Item = P>,
{
    let mut outcome = BatchOutcome::default();
    for path in paths {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
        let result = read_motion_file(path).and_then(|motion| normalizer.normalize(motion));
        outcome.record(name, result);
    }
    outcome.log_summary();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NormalizeOptions, ScaleMode};
    use glam::DVec3;

    fn line(len: u32) -> Motion {
        Motion::from_positions((1..=len).map(|i| DVec3::new(f64::from(i), 0.5 * f64::from(i), 1.0)))
    }

    #[test]
    fn test_failures_are_isolated() {
        let normalizer = Normalizer::new(NormalizeOptions::default());
        let inputs = vec![
            ("ok_a".to_string(), line(6)),
            ("empty".to_string(), Motion::new()),
            ("ok_b".to_string(), line(4)),
        ];

        let outcome = normalize_batch(&normalizer, inputs);

        assert_eq!(outcome.total(), 3);
        let names: Vec<&str> = outcome.normalized.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["ok_a", "ok_b"]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].name, "empty");
        assert!(matches!(
            outcome.skipped[0].error,
            MotionError::InsufficientData { .. }
        ));
    }

    #[test]
    fn test_degenerate_input_is_skipped() {
        let options = NormalizeOptions::new().with_scale(ScaleMode::Components);
        let outcome = normalize_batch(&Normalizer::new(options), vec![("flat".to_string(), line(5))]);
        assert!(outcome.normalized.is_empty());
        assert!(matches!(
            outcome.skipped[0].error,
            MotionError::DegenerateGeometry { .. }
        ));
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let normalizer = Normalizer::new(NormalizeOptions::default());
        let outcome = normalize_files(&normalizer, ["/nonexistent/circle_01.csv"]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].name, "circle_01");
    }
}
