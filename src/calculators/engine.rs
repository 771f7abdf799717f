//! Dispatch of validated requests to the calculators

use serde::{Deserialize, Serialize};

use super::contributions::{calculate_contributions, ContributionBreakdown};
use super::gst::{gst_exclusive, gst_inclusive, GstBreakdown};
use super::investment::{calculate_investment_growth, InvestmentProjection};
use super::loan::{calculate_loan_payment, LoanQuote};
use super::mortgage::{calculate_mortgage, MortgageQuote};
use super::retirement::{project_retirement, RetirementProjection};
use crate::assumptions::Assumptions;
use crate::validation::{
    CalculationRequest, ContributionRequest, GstDirection, GstRequest, InvestmentRequest,
    LoanRequest, MortgageRequest, RetirementRequest,
};

/// Result of one calculation together with the request that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationResult {
    Loan {
        request: LoanRequest,
        quote: LoanQuote,
    },
    Mortgage {
        request: MortgageRequest,
        quote: MortgageQuote,
    },
    Investment {
        request: InvestmentRequest,
        projection: InvestmentProjection,
    },
    Retirement {
        request: RetirementRequest,
        projection: RetirementProjection,
    },
    Contributions {
        request: ContributionRequest,
        breakdown: ContributionBreakdown,
    },
    Gst {
        request: GstRequest,
        breakdown: GstBreakdown,
    },
}

impl CalculationResult {
    /// Short calculator name used in logs and history lines
    pub fn label(&self) -> &'static str {
        match self {
            CalculationResult::Loan { .. } => "Loan",
            CalculationResult::Mortgage { .. } => "Mortgage",
            CalculationResult::Investment { .. } => "Investment",
            CalculationResult::Retirement { .. } => "Retirement",
            CalculationResult::Contributions { .. } => "KiwiSaver",
            CalculationResult::Gst { .. } => "GST",
        }
    }
}

/// Calculation engine bound to one set of policy assumptions
#[derive(Debug, Clone, Default)]
pub struct FinanceEngine {
    assumptions: Assumptions,
}

impl FinanceEngine {
    /// Create an engine with the given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run any validated request
    pub fn run(&self, request: &CalculationRequest) -> CalculationResult {
        match request {
            CalculationRequest::Loan(r) => CalculationResult::Loan {
                quote: self.loan(r),
                request: r.clone(),
            },
            CalculationRequest::Mortgage(r) => CalculationResult::Mortgage {
                quote: self.mortgage(r),
                request: r.clone(),
            },
            CalculationRequest::Investment(r) => CalculationResult::Investment {
                projection: self.investment(r),
                request: r.clone(),
            },
            CalculationRequest::Retirement(r) => CalculationResult::Retirement {
                projection: self.retirement(r),
                request: r.clone(),
            },
            CalculationRequest::Contributions(r) => CalculationResult::Contributions {
                breakdown: self.contributions(r),
                request: r.clone(),
            },
            CalculationRequest::Gst(r) => CalculationResult::Gst {
                breakdown: self.gst(r),
                request: r.clone(),
            },
        }
    }

    pub fn loan(&self, r: &LoanRequest) -> LoanQuote {
        calculate_loan_payment(r.principal, r.annual_rate, r.years)
    }

    pub fn mortgage(&self, r: &MortgageRequest) -> MortgageQuote {
        calculate_mortgage(
            r.home_price,
            r.down_payment,
            r.annual_rate,
            r.years,
            r.include_insurance,
            &self.assumptions.lending,
        )
    }

    pub fn investment(&self, r: &InvestmentRequest) -> InvestmentProjection {
        calculate_investment_growth(
            r.initial,
            r.annual_contribution,
            r.annual_return_rate,
            r.years,
            r.include_tax,
            &self.assumptions.tax,
        )
    }

    pub fn retirement(&self, r: &RetirementRequest) -> RetirementProjection {
        let salary_growth = r
            .salary_growth
            .unwrap_or(self.assumptions.retirement.default_salary_growth);

        let projection = project_retirement(
            r.current_age,
            r.retirement_age,
            r.current_balance,
            r.annual_salary,
            r.employee_rate,
            r.expected_return,
            salary_growth,
            &self.assumptions.savings,
            &self.assumptions.retirement,
        );

        if !projection.pension_eligible {
            log::warn!(
                "Retirement age {} is below the NZ Super age of {}",
                r.retirement_age,
                self.assumptions.retirement.pension_age
            );
        }
        projection
    }

    pub fn contributions(&self, r: &ContributionRequest) -> ContributionBreakdown {
        calculate_contributions(
            r.annual_salary,
            r.employee_rate,
            r.include_employer,
            r.include_government,
            &self.assumptions.savings,
        )
    }

    pub fn gst(&self, r: &GstRequest) -> GstBreakdown {
        match r.direction {
            GstDirection::AddGst => gst_inclusive(r.amount, &self.assumptions.tax),
            GstDirection::RemoveGst => gst_exclusive(r.amount, &self.assumptions.tax),
        }
    }
}
