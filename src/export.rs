//! Delimited text export of the (time, speed, steering-rate) input tables.
//!
//! One row per sample, comma-space delimited, columns `t, v, w`. The format
//! round-trips exactly: values are written in exponent form at full
//! precision and parsed back with `f64::from_str`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors produced while writing or reading an input table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A row did not have exactly three fields.
    #[error("line {line}: expected 3 comma-separated fields, found {found}")]
    MalformedRow {
        /// 1-based line number of the offending row.
        line: usize,
        /// Number of fields actually found.
        found: usize,
    },
    /// A field failed to parse as a float.
    #[error("line {line}: invalid number")]
    InvalidNumber {
        /// 1-based line number of the offending row.
        line: usize,
        /// The parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Parsed contents of an input table.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTable {
    /// Sample times (s).
    pub t: Vec<f64>,
    /// Speed inputs (m/s).
    pub v: Vec<f64>,
    /// Steering-rate inputs (rad/s).
    pub w: Vec<f64>,
}

/// Write the input sequences to `path`, one `t, v, w` row per sample.
pub fn write_inputs(path: &Path, t: &[f64], v: &[f64], w: &[f64]) -> Result<(), ExportError> {
    let mut file = BufWriter::new(File::create(path)?);
    for ((t, v), w) in t.iter().zip(v).zip(w) {
        writeln!(file, "{:e}, {:e}, {:e}", t, v, w)?;
    }
    file.flush()?;
    Ok(())
}

/// Read an input table previously written by [`write_inputs`].
pub fn read_inputs(path: &Path) -> Result<InputTable, ExportError> {
    let file = BufReader::new(File::open(path)?);
    let mut table = InputTable {
        t: Vec::new(),
        v: Vec::new(),
        w: Vec::new(),
    };

    for (index, line) in file.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(ExportError::MalformedRow {
                line: index + 1,
                found: fields.len(),
            });
        }
        let mut parsed = [0.0; 3];
        for (slot, field) in parsed.iter_mut().zip(&fields) {
            *slot = field.parse().map_err(|source| ExportError::InvalidNumber {
                line: index + 1,
                source,
            })?;
        }
        table.t.push(parsed[0]);
        table.v.push(parsed[1]);
        table.w.push(parsed[2]);
    }

    Ok(table)
}
