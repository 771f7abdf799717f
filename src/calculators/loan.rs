//! Fixed-payment loan amortization

use serde::{Deserialize, Serialize};

/// Repayment summary for a fixed-payment loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_amount: f64,
}

/// Calculate the monthly payment and total interest for a loan
///
/// # Arguments
/// * `principal` - Amount borrowed (>= 0)
/// * `annual_rate` - Annual interest rate as a percentage (>= 0)
/// * `years` - Term in years (> 0, may be fractional)
pub fn calculate_loan_payment(principal: f64, annual_rate: f64, years: f64) -> LoanQuote {
    let monthly_rate = annual_rate / 1200.0;
    let months = years * 12.0;

    let (monthly_payment, total_interest) = match annuity_factor(monthly_rate, months) {
        Some(factor) => {
            let payment = principal * factor;
            // Rounding can leave a near-zero rate a hair under principal / n
            (payment, (payment * months - principal).max(0.0))
        }
        // Interest free (or too small to compound): straight division
        None => (principal / months, 0.0),
    };

    LoanQuote {
        monthly_payment,
        total_interest,
        total_amount: principal + total_interest,
    }
}

/// Payment per unit of principal: r(1+r)^n / ((1+r)^n - 1)
///
/// `(1+r)^n - 1` is taken through `ln_1p`/`exp_m1` so tiny rates keep their
/// precision. `None` when the rate does not compound at all in f64.
fn annuity_factor(rate: f64, periods: f64) -> Option<f64> {
    let growth_minus_one = (periods * rate.ln_1p()).exp_m1();
    if growth_minus_one == 0.0 {
        return None;
    }
    Some(rate * (growth_minus_one + 1.0) / growth_minus_one)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_loan() {
        let quote = calculate_loan_payment(50_000.0, 5.5, 10.0);
        assert!((quote.monthly_payment - 542.63).abs() < 0.01, "got {}", quote.monthly_payment);
        assert!((quote.total_interest - 15_115.77).abs() < 0.01);
    }

    #[test]
    fn test_totals_identity() {
        for (p, r, y) in [(50_000.0, 5.5, 10.0), (1.0, 49.9, 1.0), (250_000.0, 0.25, 30.0), (0.0, 7.0, 5.0)] {
            let quote = calculate_loan_payment(p, r, y);
            assert_relative_eq!(quote.total_amount, p + quote.total_interest);
            assert!(quote.total_interest >= 0.0);
        }
    }

    #[test]
    fn test_zero_rate() {
        let quote = calculate_loan_payment(12_000.0, 0.0, 2.0);
        assert_eq!(quote.monthly_payment, 500.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_amount, 12_000.0);
    }

    #[test]
    fn test_tiny_positive_rates_stay_sane() {
        for rate in [1e-12, 1e-16, 1e-300] {
            let quote = calculate_loan_payment(50_000.0, rate, 10.0);
            assert!(quote.monthly_payment.is_finite(), "rate {rate}: {:?}", quote);
            assert!(quote.total_interest >= 0.0, "rate {rate}: {:?}", quote);
            assert_relative_eq!(quote.monthly_payment, 50_000.0 / 120.0, max_relative = 1e-9);
            assert_relative_eq!(quote.total_amount, 50_000.0 + quote.total_interest);
        }
    }

    #[test]
    fn test_fractional_term() {
        // 18 months at 6%
        let quote = calculate_loan_payment(9_000.0, 6.0, 1.5);
        assert!(quote.monthly_payment > 9_000.0 / 18.0);
        assert_relative_eq!(quote.total_amount, quote.monthly_payment * 18.0, max_relative = 1e-12);
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let low = calculate_loan_payment(100_000.0, 4.0, 20.0);
        let high = calculate_loan_payment(100_000.0, 8.0, 20.0);
        assert!(high.monthly_payment > low.monthly_payment);
        assert!(high.total_interest > low.total_interest);
    }
}
