//! Policy assumptions: insurance, tax, savings scheme and retirement constants

mod policy;
pub mod loader;

pub use policy::{LendingPolicy, TaxPolicy, SavingsSchemePolicy, RetirementPolicy};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::validation::{MAX_AGE, MAX_PERCENTAGE};

/// Errors raised while loading assumption overrides
#[derive(Debug, Error)]
pub enum AssumptionsError {
    #[error("failed to read assumptions file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed assumptions CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("assumption '{key}' has invalid value '{raw}'")]
    InvalidValue { key: String, raw: String },

    #[error("unknown assumption key '{0}'")]
    UnknownKey(String),

    #[error("assumption '{0}' is given more than once")]
    DuplicateKey(String),
}

impl AssumptionsError {
    pub fn reason(&self) -> crate::error::ErrorReason {
        crate::error::ErrorReason::InvalidAssumptions
    }
}

/// Container for all calculation assumptions
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Assumptions {
    pub lending: LendingPolicy,
    pub tax: TaxPolicy,
    pub savings: SavingsSchemePolicy,
    pub retirement: RetirementPolicy,
}

impl Assumptions {
    /// New Zealand defaults (2024 policy constants)
    pub fn default_nz() -> Self {
        Self::default()
    }

    /// Load the default constants file (data/assumptions/policy_constants.csv)
    pub fn from_csv() -> Result<Self, AssumptionsError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Start from the defaults and apply every override in the given file
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionsError> {
        let loaded = loader::load_policy_constants(path)?;
        let assumptions = Self::from_loaded(&loaded)?;
        log::info!("Loaded {} policy constants from {}", loaded.len(), path.display());
        Ok(assumptions)
    }

    /// Apply loaded `key -> value` overrides on top of the defaults
    pub fn from_loaded(loaded: &HashMap<String, f64>) -> Result<Self, AssumptionsError> {
        let mut assumptions = Self::default_nz();
        for (key, &value) in loaded {
            assumptions.set(key, value)?;
        }
        Ok(assumptions)
    }

    fn set(&mut self, key: &str, value: f64) -> Result<(), AssumptionsError> {
        let invalid = || AssumptionsError::InvalidValue {
            key: key.to_string(),
            raw: value.to_string(),
        };
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }

        // Fractions of an amount are at most 1; percentages at most 100
        let fraction = |value: f64| if value <= 1.0 { Ok(value) } else { Err(invalid()) };
        let percent = |value: f64| if value <= MAX_PERCENTAGE { Ok(value) } else { Err(invalid()) };

        match key {
            "insurance_rate" => self.lending.insurance_rate = fraction(value)?,
            "lvr_threshold" => self.lending.lvr_threshold = percent(value)?,
            "investment_tax_rate" => self.tax.investment_tax_rate = fraction(value)?,
            "gst_rate" => self.tax.gst_rate = fraction(value)?,
            "minimum_employee_rate" => self.savings.minimum_employee_rate = fraction(value)?,
            "employer_rate" => self.savings.employer_rate = fraction(value)?,
            "government_contribution" => self.savings.government_contribution = value,
            "annual_pension" => self.retirement.annual_pension = value,
            "withdrawal_rate" => self.retirement.withdrawal_rate = fraction(value)?,
            "pension_age" => {
                if value.fract() != 0.0 || value > MAX_AGE {
                    return Err(invalid());
                }
                self.retirement.pension_age = value as u32;
            }
            "default_salary_growth" => self.retirement.default_salary_growth = percent(value)?,
            other => return Err(AssumptionsError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}
