//! Calculation session: one engine plus the history it has produced
//!
//! The session owns the history for its lifetime. Every successful
//! calculation is appended as a one-line summary; failed validation never
//! reaches the engine and leaves the history untouched.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::assumptions::{Assumptions, AssumptionsError};
use crate::calculators::{CalculationResult, FinanceEngine};
use crate::history::{ExportError, Exporter, History, HistoryView, MAX_DISPLAYED_ENTRIES};
use crate::report::history_summary;
use crate::validation::{CalculationRequest, ValidationError};

/// Interactive calculation session
///
/// # Example
/// ```ignore
/// let mut session = FinanceSession::new();
/// let request = LoanRequest::parse("50000", "5.5", "10")?;
/// let result = session.submit(request.into());
/// session.export_to(Path::new("."))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FinanceSession {
    engine: FinanceEngine,
    history: History,
}

impl FinanceSession {
    /// Session with default NZ assumptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            engine: FinanceEngine::new(assumptions),
            history: History::new(),
        }
    }

    /// Session with assumptions loaded from a constants CSV
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionsError> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?))
    }

    /// Run a validated request and record it in history
    pub fn submit(&mut self, request: CalculationRequest) -> CalculationResult {
        let result = self.engine.run(&request);
        let entry = self.history.record(&history_summary(&result));
        log::info!("{}", entry);
        result
    }

    /// Same as [`submit`](Self::submit) with an explicit history date
    pub fn submit_on(&mut self, date: NaiveDate, request: CalculationRequest) -> CalculationResult {
        let result = self.engine.run(&request);
        self.history.record_on(date, &history_summary(&result));
        result
    }

    /// Validate with `parse`, then submit; validation failures are returned untouched
    pub fn try_submit<F>(&mut self, parse: F) -> Result<CalculationResult, ValidationError>
    where
        F: FnOnce() -> Result<CalculationRequest, ValidationError>,
    {
        match parse() {
            Ok(request) => Ok(self.submit(request)),
            Err(e) => {
                log::debug!("Rejected input ({}): {}", e.reason(), e);
                Err(e)
            }
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Newest-first history capped at the display maximum
    pub fn history_view(&self) -> HistoryView<'_> {
        self.history.view(MAX_DISPLAYED_ENTRIES)
    }

    /// Export the full history into `directory` under today's file name
    pub fn export_to(&self, directory: &Path) -> Result<PathBuf, ExportError> {
        Exporter::new(directory).export(&self.history)
    }

    pub fn engine(&self) -> &FinanceEngine {
        &self.engine
    }

    pub fn assumptions(&self) -> &Assumptions {
        self.engine.assumptions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorReason;
    use crate::history::EXPORT_HEADER_LINES;
    use crate::validation::{InvestmentRequest, LoanRequest, MortgageRequest, RetirementRequest};
    use std::fs;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 24).unwrap()
    }

    #[test]
    fn test_submit_records_history() {
        let mut session = FinanceSession::new();
        session.submit_on(date(), LoanRequest::parse("50000", "5.5", "10").unwrap().into());
        session.submit_on(
            date(),
            MortgageRequest::parse("750000", "150000", "6.2", "30", true).unwrap().into(),
        );

        let entries = session.history().entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].text().starts_with("[24/05/2025] Loan: "));
        assert!(entries[1].text().starts_with("[24/05/2025] Mortgage: "));
    }

    #[test]
    fn test_rejected_input_skips_engine_and_history() {
        let mut session = FinanceSession::new();
        let err = session
            .try_submit(|| {
                RetirementRequest::parse("65", "65", "25000", "70000", "3", "5", None).map(Into::into)
            })
            .unwrap_err();

        assert_eq!(err.reason(), ErrorReason::CrossFieldViolation);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_try_submit_success() {
        let mut session = FinanceSession::new();
        let result = session
            .try_submit(|| InvestmentRequest::parse("10000", "5000", "7", "20", true).map(Into::into))
            .unwrap();

        assert!(matches!(result, CalculationResult::Investment { .. }));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_export_failure_keeps_history() {
        let mut session = FinanceSession::new();
        session.submit(LoanRequest::parse("1000", "0", "1").unwrap().into());

        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no_such_dir").join("deeper");
        let err = session.export_to(&missing).unwrap_err();
        assert!(err.path.starts_with(&missing));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_export_contains_every_submission() {
        let dir = TempDir::new().unwrap();

        let mut session = FinanceSession::new();
        for years in ["5", "10", "15"] {
            session.submit(LoanRequest::parse("20000", "6", years).unwrap().into());
        }

        let path = session.export_to(dir.path()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let body: Vec<&str> = contents.lines().skip(EXPORT_HEADER_LINES).collect();

        assert_eq!(body.len(), 3);
        assert!(body[0].contains("Term: 5 years"));
        assert!(body[2].contains("Term: 15 years"));
    }
}
