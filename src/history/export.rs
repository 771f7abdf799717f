//! Export of the full history to a dated text file
//!
//! File layout:
//!
//! ```text
//! ***** Personal Finance Calculations *****
//! Generated: 24/05/2025
//!
//! Here is your calculation history (oldest to newest)...
//! [24/05/2025] Loan: ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;

use super::History;
use crate::error::ErrorReason;

/// Lines written before the first entry (title, date, blank, instruction)
pub const EXPORT_HEADER_LINES: usize = 4;

/// Export failure; the in-memory history is untouched
#[derive(Debug, Error)]
#[error("failed to export history to {path}: {source}")]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl ExportError {
    pub fn reason(&self) -> ErrorReason {
        ErrorReason::ExportIoFailure
    }
}

/// `finance_<YYYY>_<MM>_<DD>.txt`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("finance_{}.txt", date.format("%Y_%m_%d"))
}

/// Writes history files into a directory
#[derive(Debug, Clone)]
pub struct Exporter {
    directory: PathBuf,
}

impl Exporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Export into the current working directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Export the whole history under today's file name
    pub fn export(&self, history: &History) -> Result<PathBuf, ExportError> {
        self.export_on(history, Local::now().date_naive())
    }

    /// Export the whole history under the file name for `date`
    ///
    /// An existing file with that name is overwritten.
    pub fn export_on(&self, history: &History, date: NaiveDate) -> Result<PathBuf, ExportError> {
        let path = self.directory.join(export_file_name(date));

        write_history(&path, history, date).map_err(|source| ExportError {
            path: path.clone(),
            source,
        })?;

        log::info!("Exported {} history entries to {}", history.len(), path.display());
        Ok(path)
    }
}

fn write_history(path: &Path, history: &History, date: NaiveDate) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "***** Personal Finance Calculations *****")?;
    writeln!(out, "Generated: {}", date.format("%d/%m/%Y"))?;
    writeln!(out)?;
    writeln!(out, "Here is your calculation history (oldest to newest)...")?;

    for entry in history.entries() {
        writeln!(out, "{}", entry.text())?;
    }

    out.flush()
}
