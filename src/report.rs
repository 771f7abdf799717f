//! Text rendering of calculation results
//!
//! Two renderings per result: the multi-line display block shown after a
//! calculation, and the one-line summary recorded in history.

use crate::calculators::CalculationResult;
use crate::format::{format_currency, format_percent, format_rate, trim_number};
use crate::validation::GstDirection;

/// Multi-line display text for a result
pub fn display_lines(result: &CalculationResult) -> Vec<String> {
    match result {
        CalculationResult::Loan { quote, .. } => vec![
            format!("Monthly Payment: {}", format_currency(quote.monthly_payment)),
            format!("Total Interest: {}", format_currency(quote.total_interest)),
            format!("Total Amount: {}", format_currency(quote.total_amount)),
        ],
        CalculationResult::Mortgage { quote, .. } => {
            let lmi = if quote.requires_insurance_premium { " (LMI Required)" } else { "" };
            vec![
                format!("Monthly Payment: {}", format_currency(quote.monthly_payment)),
                format!("+ Insurance: {}", format_currency(quote.insurance_monthly)),
                format!("Total Monthly: {}", format_currency(quote.total_monthly_payment)),
                format!("LVR: {}{}", format_percent(quote.lvr), lmi),
                format!("Total Interest: {}", format_currency(quote.total_interest)),
            ]
        }
        CalculationResult::Investment { request, projection } => {
            let growth_label = if request.include_tax { "Growth (After PIE Tax)" } else { "Growth" };
            vec![
                format!("Final Value: {}", format_currency(projection.final_value)),
                format!("Total Contributions: {}", format_currency(projection.total_contributions)),
                format!("{}: {}", growth_label, format_currency(projection.total_growth)),
                format!("Effective Return: {:.2}%", projection.effective_annual_return),
                format!("Est. Tax Paid: {}", format_currency(projection.tax_paid_estimate)),
            ]
        }
        CalculationResult::Retirement { projection, .. } => {
            let mut lines = vec![
                format!("KiwiSaver at Retirement: {}", format_currency(projection.projected_balance)),
                format!("Annual NZ Super: {}", format_currency(projection.annual_pension_estimate)),
                format!(
                    "Sustainable Withdrawal: {}",
                    format_currency(projection.sustainable_annual_withdrawal)
                ),
                format!("Total Annual Income: {}", format_currency(projection.total_annual_income())),
                format!("Years to Retirement: {}", projection.years_to_retirement),
            ];
            if !projection.pension_eligible {
                lines.push("Note: NZ Super is not available at this retirement age".to_string());
            }
            lines
        }
        CalculationResult::Contributions { breakdown, .. } => vec![
            format!(
                "Employee ({}): {}",
                format_rate(breakdown.employee_rate),
                format_currency(breakdown.employee_contribution)
            ),
            format!("Employer: {}", format_currency(breakdown.employer_contribution)),
            format!("Government: {}", format_currency(breakdown.government_contribution)),
            format!("Total Annual: {}", format_currency(breakdown.total_annual_contribution)),
        ],
        CalculationResult::Gst { breakdown, .. } => vec![
            format!("Excluding GST: {}", format_currency(breakdown.exclusive)),
            format!("GST: {}", format_currency(breakdown.gst)),
            format!("Including GST: {}", format_currency(breakdown.inclusive)),
        ],
    }
}

/// One-line summary recorded in the calculation history (without the date)
pub fn history_summary(result: &CalculationResult) -> String {
    let detail = match result {
        CalculationResult::Loan { request, quote } => format!(
            "Amount: {}, Rate: {}, Term: {} years → Monthly: {}",
            format_currency(request.principal),
            format_rate(request.annual_rate),
            trim_number(request.years),
            format_currency(quote.monthly_payment)
        ),
        CalculationResult::Mortgage { request, quote } => format!(
            "Home: {}, Down: {}, Rate: {} → Monthly: {}, LVR: {}",
            format_currency(request.home_price),
            format_currency(request.down_payment),
            format_rate(request.annual_rate),
            format_currency(quote.total_monthly_payment),
            format_percent(quote.lvr)
        ),
        CalculationResult::Investment { request, projection } => format!(
            "Initial: {}, Annual: {}, Return: {}, Period: {} years → Final: {}",
            format_currency(request.initial),
            format_currency(request.annual_contribution),
            format_rate(request.annual_return_rate),
            request.years,
            format_currency(projection.final_value)
        ),
        CalculationResult::Retirement { request, projection } => format!(
            "Age: {}→{}, Balance: {}, Salary: {} → Retirement Balance: {}",
            request.current_age,
            request.retirement_age,
            format_currency(request.current_balance),
            format_currency(request.annual_salary),
            format_currency(projection.projected_balance)
        ),
        CalculationResult::Contributions { request, breakdown } => format!(
            "Salary: {}, Rate: {} → Annual Total: {}",
            format_currency(request.annual_salary),
            format_rate(breakdown.employee_rate),
            format_currency(breakdown.total_annual_contribution)
        ),
        CalculationResult::Gst { request, breakdown } => match request.direction {
            GstDirection::AddGst => format!(
                "Add GST to {} → GST: {}, Total: {}",
                format_currency(request.amount),
                format_currency(breakdown.gst),
                format_currency(breakdown.inclusive)
            ),
            GstDirection::RemoveGst => format!(
                "Remove GST from {} → GST: {}, Excl: {}",
                format_currency(request.amount),
                format_currency(breakdown.gst),
                format_currency(breakdown.exclusive)
            ),
        },
    };

    format!("{}: {}", result.label(), detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::FinanceEngine;
    use crate::validation::{
        CalculationRequest, GstRequest, InvestmentRequest, LoanRequest, MortgageRequest, RetirementRequest,
    };

    fn run(request: impl Into<CalculationRequest>) -> CalculationResult {
        FinanceEngine::default().run(&request.into())
    }

    #[test]
    fn test_loan_summary() {
        let result = run(LoanRequest::parse("50000", "5.5", "10").unwrap());
        assert_eq!(
            history_summary(&result),
            "Loan: Amount: $50,000.00 NZD, Rate: 5.5%, Term: 10 years → Monthly: $542.63 NZD"
        );
    }

    #[test]
    fn test_mortgage_display_marks_lmi() {
        let at_threshold = run(MortgageRequest::parse("750000", "150000", "6.2", "30", true).unwrap());
        let lines = display_lines(&at_threshold);
        assert_eq!(lines[3], "LVR: 80.0%");
        assert!(history_summary(&at_threshold).ends_with("LVR: 80.0%"));

        let high = run(MortgageRequest::parse("500000", "25000", "6.2", "30", true).unwrap());
        assert_eq!(display_lines(&high)[3], "LVR: 95.0% (LMI Required)");
    }

    #[test]
    fn test_investment_summary() {
        let result = run(InvestmentRequest::parse("10000", "5000", "7", "20", true).unwrap());
        assert_eq!(
            history_summary(&result),
            "Investment: Initial: $10,000.00 NZD, Annual: $5,000.00 NZD, Return: 7%, Period: 20 years → Final: $192,766.29 NZD"
        );
        assert_eq!(display_lines(&result)[3], "Effective Return: 5.04%");
    }

    #[test]
    fn test_retirement_display() {
        let result = run(RetirementRequest::parse("30", "65", "25000", "70000", "3", "5", None).unwrap());
        let lines = display_lines(&result);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "Years to Retirement: 35");
        assert!(history_summary(&result).starts_with("Retirement: Age: 30→65, Balance: $25,000.00 NZD"));

        let early = run(RetirementRequest::parse("30", "60", "25000", "70000", "3", "5", None).unwrap());
        assert_eq!(display_lines(&early).len(), 6);
    }

    #[test]
    fn test_gst_summary() {
        let result = run(GstRequest::parse("100", GstDirection::AddGst).unwrap());
        assert_eq!(
            history_summary(&result),
            "GST: Add GST to $100.00 NZD → GST: $15.00 NZD, Total: $115.00 NZD"
        );
    }
}
