//! Validated calculation requests built from raw field strings
//!
//! Each `parse` applies [`validate_field`] to every field in order, then the
//! cross-field rules for that calculator. A request that exists is safe to
//! hand to the calculators.

use serde::{Deserialize, Serialize};

use super::{validate_field, Field, FieldKind, ValidationError};

pub const LOAN_AMOUNT: Field = Field::new("Loan Amount (NZD)", FieldKind::Amount);
pub const LOAN_RATE: Field = Field::new("Annual Interest Rate (%)", FieldKind::InterestRate);
pub const LOAN_TERM: Field = Field::new("Loan Term (Years)", FieldKind::Term);

pub const HOME_PRICE: Field = Field::new("Home Price (NZD)", FieldKind::Amount);
pub const DOWN_PAYMENT: Field = Field::new("Down Payment (NZD)", FieldKind::Amount);
pub const MORTGAGE_RATE: Field = Field::new("Annual Interest Rate (%)", FieldKind::InterestRate);
pub const MORTGAGE_TERM: Field = Field::new("Mortgage Term (Years)", FieldKind::Term);

pub const INITIAL_INVESTMENT: Field = Field::new("Initial Investment (NZD)", FieldKind::Amount);
pub const ANNUAL_CONTRIBUTION: Field = Field::new("Annual Contribution (NZD)", FieldKind::Amount);
pub const RETURN_RATE: Field = Field::new("Annual Return Rate (%)", FieldKind::Percentage);
pub const INVESTMENT_PERIOD: Field = Field::new("Investment Period (Years)", FieldKind::Term).whole();

pub const CURRENT_AGE: Field = Field::new("Current Age", FieldKind::Age);
pub const RETIREMENT_AGE: Field = Field::new("Retirement Age", FieldKind::Age);
pub const CURRENT_BALANCE: Field = Field::new("Current KiwiSaver Balance (NZD)", FieldKind::Amount);
pub const ANNUAL_SALARY: Field = Field::new("Annual Salary (NZD)", FieldKind::Amount);
pub const EMPLOYEE_RATE: Field = Field::new("Employee Contribution Rate (%)", FieldKind::Percentage);
pub const EXPECTED_RETURN: Field = Field::new("Expected Annual Return (%)", FieldKind::Percentage);
pub const SALARY_GROWTH: Field = Field::new("Salary Growth (%)", FieldKind::Percentage);

pub const GST_AMOUNT: Field = Field::new("Amount (NZD)", FieldKind::Amount);

/// Fixed-payment loan inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: f64,
    /// Annual rate as a percentage
    pub annual_rate: f64,
    pub years: f64,
}

impl LoanRequest {
    pub fn parse(principal: &str, annual_rate: &str, years: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            principal: validate_field(principal, &LOAN_AMOUNT)?,
            annual_rate: validate_field(annual_rate, &LOAN_RATE)?,
            years: validate_field(years, &LOAN_TERM)?,
        })
    }
}

/// Mortgage inputs; `down_payment < home_price` always holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageRequest {
    pub home_price: f64,
    pub down_payment: f64,
    pub annual_rate: f64,
    pub years: f64,
    pub include_insurance: bool,
}

impl MortgageRequest {
    pub fn parse(
        home_price: &str,
        down_payment: &str,
        annual_rate: &str,
        years: &str,
        include_insurance: bool,
    ) -> Result<Self, ValidationError> {
        let home_price = validate_field(home_price, &HOME_PRICE)?;
        let down_payment = validate_field(down_payment, &DOWN_PAYMENT)?;
        let annual_rate = validate_field(annual_rate, &MORTGAGE_RATE)?;
        let years = validate_field(years, &MORTGAGE_TERM)?;

        if down_payment >= home_price {
            return Err(ValidationError::CrossField {
                field: DOWN_PAYMENT.name.to_string(),
                message: "down payment cannot be greater than or equal to home price".to_string(),
            });
        }

        Ok(Self {
            home_price,
            down_payment,
            annual_rate,
            years,
            include_insurance,
        })
    }
}

/// Investment growth inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    pub initial: f64,
    pub annual_contribution: f64,
    /// Annual return as a percentage
    pub annual_return_rate: f64,
    pub years: u32,
    pub include_tax: bool,
}

impl InvestmentRequest {
    pub fn parse(
        initial: &str,
        annual_contribution: &str,
        annual_return_rate: &str,
        years: &str,
        include_tax: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            initial: validate_field(initial, &INITIAL_INVESTMENT)?,
            annual_contribution: validate_field(annual_contribution, &ANNUAL_CONTRIBUTION)?,
            annual_return_rate: validate_field(annual_return_rate, &RETURN_RATE)?,
            years: validate_field(years, &INVESTMENT_PERIOD)? as u32,
            include_tax,
        })
    }
}

/// Retirement projection inputs; `retirement_age > current_age` always holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementRequest {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_balance: f64,
    pub annual_salary: f64,
    /// Employee contribution rate as a percentage
    pub employee_rate: f64,
    /// Expected annual return as a percentage
    pub expected_return: f64,
    /// Annual salary growth as a percentage; `None` uses the policy default
    pub salary_growth: Option<f64>,
}

impl RetirementRequest {
    pub fn parse(
        current_age: &str,
        retirement_age: &str,
        current_balance: &str,
        annual_salary: &str,
        employee_rate: &str,
        expected_return: &str,
        salary_growth: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let current_age = validate_field(current_age, &CURRENT_AGE)? as u32;
        let retirement_age = validate_field(retirement_age, &RETIREMENT_AGE)? as u32;
        let current_balance = validate_field(current_balance, &CURRENT_BALANCE)?;
        let annual_salary = validate_field(annual_salary, &ANNUAL_SALARY)?;
        let employee_rate = validate_field(employee_rate, &EMPLOYEE_RATE)?;
        let expected_return = validate_field(expected_return, &EXPECTED_RETURN)?;
        let salary_growth = salary_growth
            .map(|raw| validate_field(raw, &SALARY_GROWTH))
            .transpose()?;

        if retirement_age <= current_age {
            return Err(ValidationError::CrossField {
                field: RETIREMENT_AGE.name.to_string(),
                message: "retirement age must be greater than current age".to_string(),
            });
        }

        Ok(Self {
            current_age,
            retirement_age,
            current_balance,
            annual_salary,
            employee_rate,
            expected_return,
            salary_growth,
        })
    }

    /// Whole years between now and retirement
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }
}

/// Savings-scheme contribution inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRequest {
    pub annual_salary: f64,
    /// Employee rate as a percentage or fraction; `None` uses the scheme minimum
    pub employee_rate: Option<f64>,
    pub include_employer: bool,
    pub include_government: bool,
}

impl ContributionRequest {
    pub fn parse(
        annual_salary: &str,
        employee_rate: Option<&str>,
        include_employer: bool,
        include_government: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            annual_salary: validate_field(annual_salary, &ANNUAL_SALARY)?,
            employee_rate: employee_rate
                .map(|raw| validate_field(raw, &EMPLOYEE_RATE))
                .transpose()?,
            include_employer,
            include_government,
        })
    }
}

/// Whether GST is being added to or removed from an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstDirection {
    /// Amount is GST-exclusive; add GST
    AddGst,
    /// Amount is GST-inclusive; extract GST
    RemoveGst,
}

/// GST inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstRequest {
    pub amount: f64,
    pub direction: GstDirection,
}

impl GstRequest {
    pub fn parse(amount: &str, direction: GstDirection) -> Result<Self, ValidationError> {
        Ok(Self {
            amount: validate_field(amount, &GST_AMOUNT)?,
            direction,
        })
    }
}

/// One validated request, tagged by calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationRequest {
    Loan(LoanRequest),
    Mortgage(MortgageRequest),
    Investment(InvestmentRequest),
    Retirement(RetirementRequest),
    Contributions(ContributionRequest),
    Gst(GstRequest),
}

impl CalculationRequest {
    /// Short calculator name used in logs and history lines
    pub fn label(&self) -> &'static str {
        match self {
            CalculationRequest::Loan(_) => "Loan",
            CalculationRequest::Mortgage(_) => "Mortgage",
            CalculationRequest::Investment(_) => "Investment",
            CalculationRequest::Retirement(_) => "Retirement",
            CalculationRequest::Contributions(_) => "KiwiSaver",
            CalculationRequest::Gst(_) => "GST",
        }
    }
}

impl From<LoanRequest> for CalculationRequest {
    fn from(r: LoanRequest) -> Self {
        CalculationRequest::Loan(r)
    }
}

impl From<MortgageRequest> for CalculationRequest {
    fn from(r: MortgageRequest) -> Self {
        CalculationRequest::Mortgage(r)
    }
}

impl From<InvestmentRequest> for CalculationRequest {
    fn from(r: InvestmentRequest) -> Self {
        CalculationRequest::Investment(r)
    }
}

impl From<RetirementRequest> for CalculationRequest {
    fn from(r: RetirementRequest) -> Self {
        CalculationRequest::Retirement(r)
    }
}

impl From<ContributionRequest> for CalculationRequest {
    fn from(r: ContributionRequest) -> Self {
        CalculationRequest::Contributions(r)
    }
}

impl From<GstRequest> for CalculationRequest {
    fn from(r: GstRequest) -> Self {
        CalculationRequest::Gst(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorReason;

    #[test]
    fn test_loan_parse() {
        let req = LoanRequest::parse("50000", "5.5", "10").unwrap();
        assert_eq!(req.principal, 50_000.0);
        assert_eq!(req.annual_rate, 5.5);
        assert_eq!(req.years, 10.0);
    }

    #[test]
    fn test_first_failure_wins() {
        // Principal is empty and rate is garbage: principal is reported
        let err = LoanRequest::parse("", "abc", "10").unwrap_err();
        assert_eq!(err.reason(), ErrorReason::EmptyField);
        assert_eq!(err.field(), "Loan Amount (NZD)");
    }

    #[test]
    fn test_mortgage_down_payment_cross_field() {
        let err = MortgageRequest::parse("750000", "750000", "6.2", "30", true).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::CrossFieldViolation);
        assert_eq!(err.field(), "Down Payment (NZD)");

        let err = MortgageRequest::parse("500000", "600000", "6.2", "30", true).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::CrossFieldViolation);

        // Zero home price can never satisfy down < home
        let err = MortgageRequest::parse("0", "0", "6.2", "30", true).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::CrossFieldViolation);

        assert!(MortgageRequest::parse("750000", "150000", "6.2", "30", true).is_ok());
    }

    #[test]
    fn test_field_errors_precede_cross_field() {
        let err = MortgageRequest::parse("500000", "600000", "70", "30", true).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::OutOfRange);
    }

    #[test]
    fn test_investment_requires_whole_years() {
        let err = InvestmentRequest::parse("10000", "5000", "7", "20.5", true).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::OutOfRange);
        assert_eq!(err.field(), "Investment Period (Years)");

        let req = InvestmentRequest::parse("10000", "5000", "7", "20", true).unwrap();
        assert_eq!(req.years, 20);
    }

    #[test]
    fn test_retirement_age_ordering() {
        let err = RetirementRequest::parse("65", "65", "25000", "70000", "3", "5", None).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::CrossFieldViolation);
        assert_eq!(err.field(), "Retirement Age");

        let err = RetirementRequest::parse("70", "65", "25000", "70000", "3", "5", None).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::CrossFieldViolation);

        let req = RetirementRequest::parse("30", "65", "25000", "70000", "3", "5", Some("2.5")).unwrap();
        assert_eq!(req.years_to_retirement(), 35);
        assert_eq!(req.salary_growth, Some(2.5));
    }

    #[test]
    fn test_contribution_optional_rate() {
        let req = ContributionRequest::parse("60000", None, true, true).unwrap();
        assert_eq!(req.employee_rate, None);

        let err = ContributionRequest::parse("60000", Some("-4"), true, true).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::NegativeValue);
    }

    #[test]
    fn test_request_serde_tag() {
        let req: CalculationRequest = GstRequest::parse("100", GstDirection::AddGst).unwrap().into();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["calculator"], "gst");
        assert_eq!(json["direction"], "add_gst");
    }
}
