//! Mortgage costs: amortized loan plus LVR and protection insurance

use serde::{Deserialize, Serialize};

use super::loan::calculate_loan_payment;
use crate::assumptions::LendingPolicy;

/// Mortgage repayment breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageQuote {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    /// Loan repayments over the full term (principal + interest)
    pub total_amount: f64,
    /// Loan-to-value ratio as a percentage
    pub lvr: f64,
    pub insurance_monthly: f64,
    pub total_monthly_payment: f64,
    /// Lenders mortgage insurance required (LVR above threshold)
    pub requires_insurance_premium: bool,
}

/// Calculate mortgage repayments for a home purchase
///
/// Caller guarantees `home_price > 0` and `0 <= down_payment < home_price`.
pub fn calculate_mortgage(
    home_price: f64,
    down_payment: f64,
    annual_rate: f64,
    years: f64,
    include_insurance: bool,
    lending: &LendingPolicy,
) -> MortgageQuote {
    let loan_amount = home_price - down_payment;
    let loan = calculate_loan_payment(loan_amount, annual_rate, years);

    let lvr = loan_amount / home_price * 100.0;
    let insurance_monthly = if include_insurance {
        lending.monthly_insurance(loan_amount)
    } else {
        0.0
    };

    MortgageQuote {
        loan_amount,
        monthly_payment: loan.monthly_payment,
        total_interest: loan.total_interest,
        total_amount: loan.total_amount,
        lvr,
        insurance_monthly,
        total_monthly_payment: loan.monthly_payment + insurance_monthly,
        requires_insurance_premium: lending.requires_insurance_premium(lvr),
    }
}
