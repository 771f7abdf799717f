//! Policy constants for lending, tax, the savings scheme and retirement income

use serde::{Deserialize, Serialize};

/// Mortgage lending rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LendingPolicy {
    /// Annual mortgage protection insurance as a fraction of the loan amount
    pub insurance_rate: f64,

    /// LVR (%) above which lenders mortgage insurance is required (strict)
    pub lvr_threshold: f64,
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            insurance_rate: 0.007, // 0.7% of loan amount per annum
            lvr_threshold: 80.0,
        }
    }
}

impl LendingPolicy {
    /// Monthly insurance estimate for a loan amount
    pub fn monthly_insurance(&self, loan_amount: f64) -> f64 {
        loan_amount * self.insurance_rate / 12.0
    }

    /// Whether an LVR breaches the insurance threshold
    pub fn requires_insurance_premium(&self, lvr: f64) -> bool {
        lvr > self.lvr_threshold
    }
}

/// Flat tax rates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// Flat PIE tax rate applied to investment returns
    pub investment_tax_rate: f64,

    /// Goods and services tax rate
    pub gst_rate: f64,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            investment_tax_rate: 0.28,
            gst_rate: 0.15,
        }
    }
}

/// Contributory savings scheme (KiwiSaver) parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsSchemePolicy {
    /// Employee rate used when the caller does not supply one
    pub minimum_employee_rate: f64,

    /// Employer contribution as a fraction of salary
    pub employer_rate: f64,

    /// Fixed annual government contribution
    pub government_contribution: f64,
}

impl Default for SavingsSchemePolicy {
    fn default() -> Self {
        Self {
            minimum_employee_rate: 0.03,
            employer_rate: 0.03,
            government_contribution: 521.43, // 2024 annual maximum
        }
    }
}

/// Retirement income heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementPolicy {
    /// Flat annual pension (NZ Super, married couple after tax)
    pub annual_pension: f64,

    /// Safe withdrawal rate applied to the final balance
    pub withdrawal_rate: f64,

    /// Age at which the pension becomes available
    pub pension_age: u32,

    /// Salary growth (%) used when the caller does not supply one
    pub default_salary_growth: f64,
}

impl Default for RetirementPolicy {
    fn default() -> Self {
        Self {
            annual_pension: 26_364.0,
            withdrawal_rate: 0.04,
            pension_age: 65,
            default_salary_growth: 2.0,
        }
    }
}
