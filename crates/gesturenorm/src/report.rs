//! CSV reports of normalization references and recognition results.
//!
//! A [`ReportWriter`] owns its output for the duration of a run; nothing is
//! written through global state.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::recognize::Recognition;
use crate::{MotionError, NormalizedMotion, Result};

const REFERENCE_COLUMNS: [&str; 10] = [
    "Translation X",
    "Translation Y",
    "Translation Z",
    "Rotation W",
    "Rotation X",
    "Rotation Y",
    "Rotation Z",
    "Scaling X",
    "Scaling Y",
    "Scaling Z",
];

/// Writes one CSV line per processed motion.
///
/// Columns are the motion name, the translation, rotation (scalar first)
/// and scaling references, and the number of removed poses. If model labels
/// were given, each row also carries one score per model, the recognized
/// label and whether it matched the expected label.
pub struct ReportWriter<W: Write> {
    out: W,
    model_labels: Vec<String>,
    rows: usize,
}

impl ReportWriter<BufWriter<File>> {
    /// Creates a report file, replacing any existing one.
    pub fn create(path: impl AsRef<Path>, model_labels: Vec<String>) -> Result<Self> {
        Self::new(BufWriter::new(File::create(path)?), model_labels)
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wraps a writer and emits the header line.
    pub fn new(mut out: W, model_labels: Vec<String>) -> Result<Self> {
        let mut header = vec!["Name"];
        header.extend(REFERENCE_COLUMNS);
        header.push("Removed");
        header.extend(model_labels.iter().map(String::as_str));
        if !model_labels.is_empty() {
            header.extend(["Recognized", "Correct"]);
        }
        writeln!(out, "{}", header.join(","))?;

        Ok(Self {
            out,
            model_labels,
            rows: 0,
        })
    }

    /// Writes the references of a normalized motion.
    ///
    /// Score columns, if any, are left empty.
    pub fn write_normalized(&mut self, name: &str, normalized: &NormalizedMotion) -> Result<()> {
        self.write_reference(name, normalized)?;
        for _ in &self.model_labels {
            write!(self.out, ",")?;
        }
        if !self.model_labels.is_empty() {
            write!(self.out, ",,")?;
        }
        self.end_row()
    }

    /// Writes the references and recognition result of a motion.
    ///
    /// Fails without writing anything unless the recognition carries exactly
    /// one score per model label.
    #[allow(clippy::cast_possible_truncation)]
    pub fn write_recognized(
        &mut self,
        name: &str,
        normalized: &NormalizedMotion,
        recognition: &Recognition,
        expected: &str,
    ) -> Result<()> {
        if recognition.scores.len() != self.model_labels.len() {
            return Err(MotionError::SizeMismatch {
                expected: self.model_labels.len(),
                actual: recognition.scores.len(),
            });
        }
        self.write_reference(name, normalized)?;
        for score in &recognition.scores {
            write!(self.out, ",{}", score.round() as i64)?;
        }
        write!(
            self.out,
            ",{},{}",
            recognition.label,
            recognition.label == expected
        )?;
        self.end_row()
    }

    /// Returns the number of rows written so far, excluding the header.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_reference(&mut self, name: &str, normalized: &NormalizedMotion) -> Result<()> {
        let reference = &normalized.reference;
        let t = reference.translation;
        let s = reference.scale;
        let [rw, rx, ry, rz] = reference.rotation_wxyz();
        write!(self.out, "{name}")?;
        for value in [t.x, t.y, t.z, rw, rx, ry, rz, s.x, s.y, s.z] {
            write!(self.out, ",{value:.3}")?;
        }
        write!(self.out, ",{}", normalized.removed)?;
        Ok(())
    }

    fn end_row(&mut self) -> Result<()> {
        writeln!(self.out)?;
        self.rows += 1;
        Ok(())
    }
}
