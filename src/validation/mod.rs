//! Input validation for raw field strings
//!
//! Every calculator input passes through [`validate_field`] before any
//! calculation runs. Rules are applied in order and the first failure wins:
//!
//! 1. empty or whitespace-only
//! 2. not a finite decimal number
//! 3. negative
//! 4. percentage > 100, interest rate > 50
//! 5. age outside 16..=120
//! 6. term outside (0, 50]
//!
//! Fields flagged as whole numbers (ages, investment periods) are checked
//! last. Cross-field rules live in [`requests`].

pub mod requests;

pub use requests::{
    CalculationRequest, ContributionRequest, GstDirection, GstRequest, InvestmentRequest,
    LoanRequest, MortgageRequest, RetirementRequest,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ErrorReason;

/// Maximum percentage accepted in any percentage field
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Sanity bound for interest rate fields
pub const MAX_INTEREST_RATE: f64 = 50.0;

/// Youngest accepted age
pub const MIN_AGE: f64 = 16.0;

/// Oldest accepted age
pub const MAX_AGE: f64 = 120.0;

/// Longest accepted term in years
pub const MAX_TERM_YEARS: f64 = 50.0;

/// Semantic category of an input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Plain non-negative amount (currency, salary, balance)
    Amount,
    /// Percentage, at most 100
    Percentage,
    /// Interest rate percentage, at most 50
    InterestRate,
    /// Age in years, 16 to 120
    Age,
    /// Term or period in years, above 0 and at most 50
    Term,
}

/// Descriptor for one input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Reject fractional values
    pub whole: bool,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            whole: matches!(kind, FieldKind::Age),
        }
    }

    /// Require an integral value
    pub const fn whole(mut self) -> Self {
        self.whole = true;
        self
    }
}

/// Classified validation failure for a single field or field pair
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: please enter a value")]
    Empty { field: String },

    #[error("{field}: '{raw}' is not a valid number")]
    NonNumeric { field: String, raw: String },

    #[error("{field}: negative values are not allowed")]
    Negative { field: String, value: f64 },

    #[error("{field}: {reason}")]
    OutOfRange { field: String, value: f64, reason: String },

    #[error("{field}: {message}")]
    CrossField { field: String, message: String },
}

impl ValidationError {
    pub fn reason(&self) -> ErrorReason {
        match self {
            ValidationError::Empty { .. } => ErrorReason::EmptyField,
            ValidationError::NonNumeric { .. } => ErrorReason::NonNumeric,
            ValidationError::Negative { .. } => ErrorReason::NegativeValue,
            ValidationError::OutOfRange { .. } => ErrorReason::OutOfRange,
            ValidationError::CrossField { .. } => ErrorReason::CrossFieldViolation,
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Empty { field }
            | ValidationError::NonNumeric { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::CrossField { field, .. } => field,
        }
    }

    fn out_of_range(field: &Field, value: f64, reason: impl Into<String>) -> Self {
        ValidationError::OutOfRange {
            field: field.name.to_string(),
            value,
            reason: reason.into(),
        }
    }
}

/// Validate a raw string against a field descriptor
pub fn validate_field(raw: &str, field: &Field) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty {
            field: field.name.to_string(),
        });
    }

    let value = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Err(ValidationError::NonNumeric {
                field: field.name.to_string(),
                raw: trimmed.to_string(),
            })
        }
    };

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.name.to_string(),
            value,
        });
    }

    match field.kind {
        FieldKind::Amount => {}
        FieldKind::Percentage | FieldKind::InterestRate => {
            if value > MAX_PERCENTAGE {
                return Err(ValidationError::out_of_range(field, value, "percentage cannot exceed 100%"));
            }
            if field.kind == FieldKind::InterestRate && value > MAX_INTEREST_RATE {
                return Err(ValidationError::out_of_range(
                    field,
                    value,
                    "interest rate cannot exceed 50%",
                ));
            }
        }
        FieldKind::Age => {
            if !(MIN_AGE..=MAX_AGE).contains(&value) {
                return Err(ValidationError::out_of_range(field, value, "age must be between 16 and 120"));
            }
        }
        FieldKind::Term => {
            if value > MAX_TERM_YEARS {
                return Err(ValidationError::out_of_range(field, value, "term cannot exceed 50 years"));
            }
            if value == 0.0 {
                return Err(ValidationError::out_of_range(field, value, "term must be greater than zero"));
            }
        }
    }

    if field.whole && value.fract() != 0.0 {
        return Err(ValidationError::out_of_range(field, value, "must be a whole number"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMOUNT: Field = Field::new("Loan Amount", FieldKind::Amount);
    const PERCENT: Field = Field::new("Employee Contribution Rate", FieldKind::Percentage);
    const RATE: Field = Field::new("Annual Interest Rate", FieldKind::InterestRate);
    const AGE: Field = Field::new("Current Age", FieldKind::Age);
    const TERM: Field = Field::new("Loan Term", FieldKind::Term);

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(validate_field("", &AMOUNT).unwrap_err().reason(), ErrorReason::EmptyField);
        assert_eq!(validate_field("   \t", &AMOUNT).unwrap_err().reason(), ErrorReason::EmptyField);
    }

    #[test]
    fn test_non_numeric() {
        for raw in ["abc", "12,000", "$500", "inf", "NaN", "1.2.3"] {
            let err = validate_field(raw, &AMOUNT).unwrap_err();
            assert_eq!(err.reason(), ErrorReason::NonNumeric, "raw = {raw}");
            assert_eq!(err.field(), "Loan Amount");
        }
    }

    #[test]
    fn test_accepts_padded_decimal() {
        assert_eq!(validate_field("  50000.50 ", &AMOUNT).unwrap(), 50_000.5);
        assert_eq!(validate_field("0", &AMOUNT).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_checked_before_range() {
        let err = validate_field("-5", &AGE).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::NegativeValue);
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(validate_field("100", &PERCENT).unwrap(), 100.0);
        assert_eq!(validate_field("100.01", &PERCENT).unwrap_err().reason(), ErrorReason::OutOfRange);
    }

    #[test]
    fn test_interest_rate_stricter_bound() {
        assert_eq!(validate_field("50", &RATE).unwrap(), 50.0);
        let err = validate_field("60", &RATE).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::OutOfRange);
        assert!(err.to_string().contains("50%"));

        let err = validate_field("150", &RATE).unwrap_err();
        assert!(err.to_string().contains("100%"));
    }

    #[test]
    fn test_age_bounds() {
        assert_eq!(validate_field("16", &AGE).unwrap(), 16.0);
        assert_eq!(validate_field("120", &AGE).unwrap(), 120.0);
        assert_eq!(validate_field("15", &AGE).unwrap_err().reason(), ErrorReason::OutOfRange);
        assert_eq!(validate_field("121", &AGE).unwrap_err().reason(), ErrorReason::OutOfRange);
        // Ages are whole numbers
        assert_eq!(validate_field("30.5", &AGE).unwrap_err().reason(), ErrorReason::OutOfRange);
    }

    #[test]
    fn test_term_bounds() {
        assert_eq!(validate_field("50", &TERM).unwrap(), 50.0);
        assert_eq!(validate_field("2.5", &TERM).unwrap(), 2.5);
        assert_eq!(validate_field("51", &TERM).unwrap_err().reason(), ErrorReason::OutOfRange);
        assert_eq!(validate_field("0", &TERM).unwrap_err().reason(), ErrorReason::OutOfRange);
        assert_eq!(
            validate_field("2.5", &TERM.whole()).unwrap_err().reason(),
            ErrorReason::OutOfRange
        );
    }
}
