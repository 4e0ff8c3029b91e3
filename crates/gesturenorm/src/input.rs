//! Reading motions from delimited text.
//!
//! Each line holds one pose: `frame, x, y, z, qw, qx, qy, qz, ...`. Lines
//! with any token that does not parse as a float (headers, comments, blank
//! lines) are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{Motion, MotionError, Pose, Result};

/// Default column separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Reads a motion from a buffered reader.
///
/// Fails with [`MotionError::MalformedRow`] on a numeric line with fewer
/// than eight columns.
pub fn read_motion<R: BufRead>(reader: R, separator: char) -> Result<Motion> {
    let mut motion = Motion::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(row) = parse_row(&line, separator) else {
            skipped += 1;
            continue;
        };
        let pose = Pose::from_row(&row).ok_or(MotionError::MalformedRow {
            line: index + 1,
            columns: row.len(),
        })?;
        motion.push(pose);
    }

    if skipped > 0 {
        log::debug!("skipped {skipped} unreadable lines");
    }
    Ok(motion)
}

/// Reads a motion from a file with the default separator.
pub fn read_motion_file(path: impl AsRef<Path>) -> Result<Motion> {
    let path = path.as_ref();
    let motion = read_motion(BufReader::new(File::open(path)?), DEFAULT_SEPARATOR)?;
    log::debug!("read {} poses from {}", motion.len(), path.display());
    Ok(motion)
}

fn parse_row(line: &str, separator: char) -> Option<Vec<f64>> {
    line.split(separator)
        .map(|token| token.trim().parse::<f64>().ok())
        .collect()
}
