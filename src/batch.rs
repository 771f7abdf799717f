//! Batch mode: many raw requests from one CSV file
//!
//! Each row is `kind,field,field,...` with raw, unvalidated field strings.
//! Rows are validated independently; a bad row is reported and skipped.
//!
//! | kind            | fields                                                              |
//! |-----------------|---------------------------------------------------------------------|
//! | `loan`          | amount, rate, years                                                 |
//! | `mortgage`      | home price, down payment, rate, years, [insurance yes/no]           |
//! | `investment`    | initial, annual contribution, return, years, [tax yes/no]           |
//! | `retirement`    | age, retirement age, balance, salary, employee %, return %, [growth %] |
//! | `contributions` | salary, [employee rate]                                             |
//! | `gst_add`       | amount                                                              |
//! | `gst_remove`    | amount                                                              |
//!
//! Blank lines and lines starting with `#` are ignored.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use thiserror::Error;

use crate::calculators::CalculationResult;
use crate::error::ErrorReason;
use crate::session::FinanceSession;
use crate::validation::{
    CalculationRequest, ContributionRequest, GstDirection, GstRequest, InvestmentRequest,
    LoanRequest, MortgageRequest, RetirementRequest, ValidationError,
};

/// Why a batch row could not become a request
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("unknown calculation kind '{0}'")]
    UnknownKind(String),

    #[error("{kind} expects {expected} fields, found {found}")]
    FieldCount {
        kind: String,
        expected: &'static str,
        found: usize,
    },

    #[error("'{0}' is not a yes/no flag")]
    InvalidFlag(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl BatchError {
    /// Validation failures keep their own tag; structural problems are `malformed_row`
    pub fn reason(&self) -> ErrorReason {
        match self {
            BatchError::Validation(e) => e.reason(),
            _ => ErrorReason::MalformedRow,
        }
    }
}

/// One parsed row, keeping its line number for reporting
#[derive(Debug)]
pub struct BatchRow {
    pub line: u64,
    pub request: Result<CalculationRequest, BatchError>,
}

/// Outcome of running a batch through a session
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<(u64, CalculationResult)>,
    pub rejected: Vec<(u64, BatchError)>,
}

/// Load batch rows from a CSV file
pub fn load_requests(path: &Path) -> Result<Vec<BatchRow>, csv::Error> {
    let file = File::open(path)?;
    load_requests_from_reader(file)
}

/// Load batch rows from any reader
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<BatchRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(BatchRow {
            line,
            request: parse_record(&record),
        });
    }

    Ok(rows)
}

/// Validate one `kind,field,...` record into a request
pub fn parse_record(record: &StringRecord) -> Result<CalculationRequest, BatchError> {
    let kind = record.get(0).unwrap_or_default().to_ascii_lowercase();
    let fields: Vec<&str> = record.iter().skip(1).collect();

    let check = |min: usize, max: usize, expected: &'static str| {
        if fields.len() < min || fields.len() > max {
            Err(BatchError::FieldCount {
                kind: kind.clone(),
                expected,
                found: fields.len(),
            })
        } else {
            Ok(())
        }
    };

    let request: CalculationRequest = match kind.as_str() {
        "loan" => {
            check(3, 3, "3")?;
            LoanRequest::parse(fields[0], fields[1], fields[2])?.into()
        }
        "mortgage" => {
            check(4, 5, "4 or 5")?;
            let insurance = optional_flag(fields.get(4).copied())?;
            MortgageRequest::parse(fields[0], fields[1], fields[2], fields[3], insurance)?.into()
        }
        "investment" => {
            check(4, 5, "4 or 5")?;
            let tax = optional_flag(fields.get(4).copied())?;
            InvestmentRequest::parse(fields[0], fields[1], fields[2], fields[3], tax)?.into()
        }
        "retirement" => {
            check(6, 7, "6 or 7")?;
            RetirementRequest::parse(
                fields[0],
                fields[1],
                fields[2],
                fields[3],
                fields[4],
                fields[5],
                fields.get(6).copied(),
            )?
            .into()
        }
        "contributions" => {
            check(1, 2, "1 or 2")?;
            ContributionRequest::parse(fields[0], fields.get(1).copied(), true, true)?.into()
        }
        "gst_add" => {
            check(1, 1, "1")?;
            GstRequest::parse(fields[0], GstDirection::AddGst)?.into()
        }
        "gst_remove" => {
            check(1, 1, "1")?;
            GstRequest::parse(fields[0], GstDirection::RemoveGst)?.into()
        }
        _ => return Err(BatchError::UnknownKind(kind.clone())),
    };

    Ok(request)
}

/// Submit every valid row to the session, collecting rejected rows
pub fn run_batch(session: &mut FinanceSession, rows: Vec<BatchRow>) -> BatchReport {
    let mut report = BatchReport::default();

    for row in rows {
        match row.request {
            Ok(request) => report.results.push((row.line, session.submit(request))),
            Err(e) => {
                log::warn!("Skipping line {}: {}", row.line, e);
                report.rejected.push((row.line, e));
            }
        }
    }

    log::info!(
        "Batch complete: {} calculated, {} rejected",
        report.results.len(),
        report.rejected.len()
    );
    report
}

/// Missing flag means yes
fn optional_flag(raw: Option<&str>) -> Result<bool, BatchError> {
    match raw.map(|s| s.to_ascii_lowercase()) {
        None => Ok(true),
        Some(s) => match s.as_str() {
            "" | "yes" | "y" | "true" | "1" => Ok(true),
            "no" | "n" | "false" | "0" => Ok(false),
            _ => Err(BatchError::InvalidFlag(s)),
        },
    }
}
