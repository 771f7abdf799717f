//! Financial calculators
//!
//! Every calculator here is a pure function over already-validated inputs.
//! None of them fail; invalid combinations are rejected by
//! [`crate::validation`] before a calculator is reached.

mod loan;
mod mortgage;
mod investment;
mod contributions;
mod retirement;
mod gst;
mod engine;

pub use loan::{calculate_loan_payment, LoanQuote};
pub use mortgage::{calculate_mortgage, MortgageQuote};
pub use investment::{calculate_investment_growth, InvestmentProjection};
pub use contributions::{calculate_contributions, normalize_rate, ContributionBreakdown};
pub use retirement::{project_retirement, RetirementProjection};
pub use gst::{gst_exclusive, gst_inclusive, GstBreakdown};
pub use engine::{CalculationResult, FinanceEngine};
