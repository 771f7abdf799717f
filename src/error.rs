//! Error classification shared by validation, export and the session

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assumptions::AssumptionsError;
use crate::batch::BatchError;
use crate::history::ExportError;
use crate::validation::ValidationError;

/// Classification tag for every recoverable failure the engine reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReason {
    EmptyField,
    NonNumeric,
    NegativeValue,
    OutOfRange,
    CrossFieldViolation,
    ExportIoFailure,
    InvalidAssumptions,
    MalformedRow,
}

impl ErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorReason::EmptyField => "empty_field",
            ErrorReason::NonNumeric => "non_numeric",
            ErrorReason::NegativeValue => "negative_value",
            ErrorReason::OutOfRange => "out_of_range",
            ErrorReason::CrossFieldViolation => "cross_field_violation",
            ErrorReason::ExportIoFailure => "export_io_failure",
            ErrorReason::InvalidAssumptions => "invalid_assumptions",
            ErrorReason::MalformedRow => "malformed_row",
        }
    }
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any failure surfaced by the engine
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Assumptions(#[from] AssumptionsError),

    #[error(transparent)]
    Batch(#[from] BatchError),
}

impl FinanceError {
    pub fn reason(&self) -> ErrorReason {
        match self {
            FinanceError::Validation(e) => e.reason(),
            FinanceError::Export(e) => e.reason(),
            FinanceError::Assumptions(e) => e.reason(),
            FinanceError::Batch(e) => e.reason(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_tags() {
        assert_eq!(ErrorReason::EmptyField.as_str(), "empty_field");
        assert_eq!(ErrorReason::CrossFieldViolation.to_string(), "cross_field_violation");
        assert_eq!(
            serde_json::to_string(&ErrorReason::ExportIoFailure).unwrap(),
            "\"export_io_failure\""
        );
    }

    #[test]
    fn test_finance_error_reason_passthrough() {
        let err: FinanceError = ValidationError::Empty {
            field: "Loan Amount".to_string(),
        }
        .into();
        assert_eq!(err.reason(), ErrorReason::EmptyField);
    }
}
