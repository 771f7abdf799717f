//! KiwiSaver retirement projection

use serde::{Deserialize, Serialize};

use super::contributions::calculate_contributions;
use crate::assumptions::{RetirementPolicy, SavingsSchemePolicy};

/// Projected position at retirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    pub projected_balance: f64,
    /// Flat annual pension (NZ Super), independent of the balance
    pub annual_pension_estimate: f64,
    pub sustainable_annual_withdrawal: f64,
    pub years_to_retirement: u32,
    pub retirement_age: u32,
    /// Retirement age is at or above the pension age
    pub pension_eligible: bool,
}

impl RetirementProjection {
    /// Pension plus sustainable withdrawal
    pub fn total_annual_income(&self) -> f64 {
        self.annual_pension_estimate + self.sustainable_annual_withdrawal
    }
}

/// Running state of the year-by-year projection
#[derive(Debug, Clone)]
struct ProjectionState {
    balance: f64,
    salary: f64,
    years_elapsed: u32,
}

impl ProjectionState {
    /// Contribute, grow the balance, then grow the salary for next year
    fn advance_year(&mut self, employee_rate: f64, return_rate: f64, growth_rate: f64, scheme: &SavingsSchemePolicy) {
        let contribution = calculate_contributions(self.salary, Some(employee_rate), true, true, scheme);
        self.balance = self.balance * (1.0 + return_rate) + contribution.total_annual_contribution;
        self.salary *= 1.0 + growth_rate;
        self.years_elapsed += 1;
    }
}

/// Project a savings-scheme balance to retirement
///
/// Caller guarantees `retirement_age > current_age`.
///
/// # Arguments
/// * `employee_rate` - Employee contribution as a percentage
/// * `expected_return` - Annual return as a percentage
/// * `salary_growth` - Annual salary growth as a percentage
#[allow(clippy::too_many_arguments)]
pub fn project_retirement(
    current_age: u32,
    retirement_age: u32,
    current_balance: f64,
    annual_salary: f64,
    employee_rate: f64,
    expected_return: f64,
    salary_growth: f64,
    scheme: &SavingsSchemePolicy,
    policy: &RetirementPolicy,
) -> RetirementProjection {
    let years_to_retirement = retirement_age.saturating_sub(current_age);
    let return_rate = expected_return / 100.0;
    let growth_rate = salary_growth / 100.0;
    let employee_fraction = employee_rate / 100.0;

    let mut state = ProjectionState {
        balance: current_balance,
        salary: annual_salary,
        years_elapsed: 0,
    };

    for _ in 0..years_to_retirement {
        state.advance_year(employee_fraction, return_rate, growth_rate, scheme);
    }

    RetirementProjection {
        projected_balance: state.balance,
        annual_pension_estimate: policy.annual_pension,
        sustainable_annual_withdrawal: state.balance * policy.withdrawal_rate,
        years_to_retirement: state.years_elapsed,
        retirement_age,
        pension_eligible: retirement_age >= policy.pension_age,
    }
}
