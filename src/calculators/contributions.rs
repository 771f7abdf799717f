//! KiwiSaver contribution breakdown (employee, employer, government)

use serde::{Deserialize, Serialize};

use crate::assumptions::SavingsSchemePolicy;

/// Annual contributions into the savings scheme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionBreakdown {
    pub employee_contribution: f64,
    pub employer_contribution: f64,
    pub government_contribution: f64,
    pub total_annual_contribution: f64,
    /// Employee rate as a percentage
    pub employee_rate: f64,
}

/// Normalize an employee rate to a fraction
///
/// Values above 1 are read as percentages (`4` -> `0.04`); values at or
/// below 1 are already fractions (`0.04`). `1` therefore means 100%.
pub fn normalize_rate(rate: f64) -> f64 {
    if rate > 1.0 {
        rate / 100.0
    } else {
        rate
    }
}

/// Calculate one year's contributions for a salary
///
/// `employee_rate` may be a percentage or a fraction, see [`normalize_rate`].
/// `None` falls back to the scheme minimum.
pub fn calculate_contributions(
    annual_salary: f64,
    employee_rate: Option<f64>,
    include_employer: bool,
    include_government: bool,
    scheme: &SavingsSchemePolicy,
) -> ContributionBreakdown {
    let employee_rate = normalize_rate(employee_rate.unwrap_or(scheme.minimum_employee_rate));

    let employee_contribution = annual_salary * employee_rate;
    let employer_contribution = if include_employer {
        annual_salary * scheme.employer_rate
    } else {
        0.0
    };
    let government_contribution = if include_government {
        scheme.government_contribution
    } else {
        0.0
    };

    ContributionBreakdown {
        employee_contribution,
        employer_contribution,
        government_contribution,
        total_annual_contribution: employee_contribution + employer_contribution + government_contribution,
        employee_rate: employee_rate * 100.0,
    }
}
