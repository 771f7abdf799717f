//! Investment growth with annual contributions under a flat PIE tax

use serde::{Deserialize, Serialize};

use crate::assumptions::TaxPolicy;

/// Projected value of an investment at the end of its horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub final_value: f64,
    pub total_contributions: f64,
    /// `final_value - total_contributions`; negative when returns are negative
    pub total_growth: f64,
    /// Annual return after tax, as a percentage
    pub effective_annual_return: f64,
    pub tax_paid_estimate: f64,
    pub pre_tax_growth: f64,
}

/// Project an investment forward `years` whole years
///
/// Contributions are made at the end of each year, so the contribution for
/// year `k` (0-based) compounds for `years - k - 1` further years.
///
/// # Arguments
/// * `annual_return_rate` - Percentage, any sign
/// * `include_tax` - Apply the flat PIE tax haircut to the return rate
pub fn calculate_investment_growth(
    initial: f64,
    annual_contribution: f64,
    annual_return_rate: f64,
    years: u32,
    include_tax: bool,
    tax: &TaxPolicy,
) -> InvestmentProjection {
    let rate = annual_return_rate / 100.0;
    let effective_rate = if include_tax {
        rate * (1.0 - tax.investment_tax_rate)
    } else {
        rate
    };
    let growth = 1.0 + effective_rate;

    let mut final_value = initial * growth.powi(years as i32);
    for year in 0..years {
        final_value += annual_contribution * growth.powi((years - year - 1) as i32);
    }

    let total_contributions = initial + annual_contribution * years as f64;
    let total_growth = final_value - total_contributions;

    let (pre_tax_growth, tax_paid_estimate) = if include_tax {
        let pre_tax = total_growth / (1.0 - tax.investment_tax_rate);
        (pre_tax, pre_tax - total_growth)
    } else {
        (total_growth, 0.0)
    };

    InvestmentProjection {
        final_value,
        total_contributions,
        total_growth,
        effective_annual_return: effective_rate * 100.0,
        tax_paid_estimate,
        pre_tax_growth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario_tax_drag() {
        let tax = TaxPolicy::default();
        let taxed = calculate_investment_growth(10_000.0, 5_000.0, 7.0, 20, true, &tax);
        let untaxed = calculate_investment_growth(10_000.0, 5_000.0, 7.0, 20, false, &tax);

        assert!(taxed.final_value < untaxed.final_value);
        assert!(taxed.tax_paid_estimate > 0.0);
        assert_eq!(untaxed.tax_paid_estimate, 0.0);
        assert_eq!(untaxed.pre_tax_growth, untaxed.total_growth);

        assert!((taxed.final_value - 192_766.29).abs() < 0.01);
        assert!((untaxed.final_value - 243_674.31).abs() < 0.01);
        assert_relative_eq!(taxed.effective_annual_return, 5.04, max_relative = 1e-12);
        assert_eq!(taxed.total_contributions, 110_000.0);
    }

    #[test]
    fn test_growth_identity() {
        let tax = TaxPolicy::default();
        for rate in [-10.0, 0.0, 3.5, 12.0] {
            let p = calculate_investment_growth(20_000.0, 1_500.0, rate, 15, true, &tax);
            assert_relative_eq!(p.total_growth, p.final_value - p.total_contributions);
        }
    }

    #[test]
    fn test_negative_returns_shrink() {
        let p = calculate_investment_growth(10_000.0, 0.0, -5.0, 10, false, &TaxPolicy::default());
        assert!(p.total_growth < 0.0);
        assert!(p.final_value < 10_000.0);
    }

    #[test]
    fn test_zero_rate_is_sum_of_contributions() {
        let p = calculate_investment_growth(1_000.0, 250.0, 0.0, 4, true, &TaxPolicy::default());
        assert_eq!(p.final_value, 2_000.0);
        assert_eq!(p.total_growth, 0.0);
        assert_eq!(p.tax_paid_estimate, 0.0);
    }

    #[test]
    fn test_end_of_year_contribution_convention() {
        // One year: the single contribution earns nothing
        let p = calculate_investment_growth(0.0, 1_000.0, 10.0, 1, false, &TaxPolicy::default());
        assert_relative_eq!(p.final_value, 1_000.0);

        // Two years: first contribution compounds once
        let p = calculate_investment_growth(0.0, 1_000.0, 10.0, 2, false, &TaxPolicy::default());
        assert_relative_eq!(p.final_value, 2_100.0, max_relative = 1e-12);
    }
}
