//! Personal Finance CLI
//!
//! Command-line front end for the calculation engine. Field values are taken
//! as raw strings and validated exactly as a form would validate them.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use personal_finance::batch::{load_requests, run_batch};
use personal_finance::format::format_currency;
use personal_finance::report::display_lines;
use personal_finance::validation::{
    CalculationRequest, ContributionRequest, GstDirection, GstRequest, InvestmentRequest,
    LoanRequest, MortgageRequest, RetirementRequest,
};
use personal_finance::{CalculationResult, FinanceError, FinanceSession, ValidationError};

#[derive(Debug, Parser)]
#[command(name = "personal-finance", version, about = "Personal finance calculator (NZ edition)")]
struct Cli {
    /// Policy constants CSV overriding the built-in defaults
    #[arg(long, global = true, value_name = "FILE")]
    assumptions: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Export the session history into this directory afterwards
    #[arg(long, global = true, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Print the newest-first history view afterwards
    #[arg(long, global = true)]
    history: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fixed-payment loan
    Loan {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Annual interest rate (%)
        #[arg(allow_hyphen_values = true)]
        rate: String,
        /// Term in years
        #[arg(allow_hyphen_values = true)]
        years: String,
    },
    /// Mortgage with LVR and protection insurance
    Mortgage {
        #[arg(allow_hyphen_values = true)]
        home_price: String,
        #[arg(allow_hyphen_values = true)]
        down_payment: String,
        #[arg(allow_hyphen_values = true)]
        rate: String,
        #[arg(allow_hyphen_values = true)]
        years: String,
        /// Leave out the mortgage protection insurance estimate
        #[arg(long)]
        no_insurance: bool,
    },
    /// Investment growth with annual contributions
    Investment {
        #[arg(allow_hyphen_values = true)]
        initial: String,
        #[arg(allow_hyphen_values = true)]
        annual_contribution: String,
        /// Expected annual return (%)
        #[arg(allow_hyphen_values = true)]
        rate: String,
        /// Whole years
        #[arg(allow_hyphen_values = true)]
        years: String,
        /// Ignore PIE tax
        #[arg(long)]
        no_tax: bool,
    },
    /// KiwiSaver retirement projection
    Retirement {
        #[arg(allow_hyphen_values = true)]
        current_age: String,
        #[arg(allow_hyphen_values = true)]
        retirement_age: String,
        #[arg(allow_hyphen_values = true)]
        balance: String,
        #[arg(allow_hyphen_values = true)]
        salary: String,
        /// Employee contribution rate (%)
        #[arg(allow_hyphen_values = true)]
        employee_rate: String,
        /// Expected annual return (%)
        #[arg(allow_hyphen_values = true)]
        expected_return: String,
        /// Annual salary growth (%)
        #[arg(long, allow_hyphen_values = true)]
        salary_growth: Option<String>,
    },
    /// One year of KiwiSaver contributions
    Contributions {
        #[arg(allow_hyphen_values = true)]
        salary: String,
        /// Employee rate (% or fraction); defaults to the scheme minimum
        #[arg(long, allow_hyphen_values = true)]
        employee_rate: Option<String>,
        #[arg(long)]
        no_employer: bool,
        #[arg(long)]
        no_government: bool,
    },
    /// Add or remove GST
    Gst {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Treat the amount as GST-inclusive and extract the GST
        #[arg(long)]
        remove: bool,
    },
    /// Run every request in a CSV file
    Batch { file: PathBuf },
}

impl Command {
    /// Validate a single-calculation command
    fn to_request(&self) -> Option<Result<CalculationRequest, ValidationError>> {
        let request = match self {
            Command::Loan { amount, rate, years } => LoanRequest::parse(amount, rate, years).map(Into::into),
            Command::Mortgage {
                home_price,
                down_payment,
                rate,
                years,
                no_insurance,
            } => MortgageRequest::parse(home_price, down_payment, rate, years, !no_insurance).map(Into::into),
            Command::Investment {
                initial,
                annual_contribution,
                rate,
                years,
                no_tax,
            } => InvestmentRequest::parse(initial, annual_contribution, rate, years, !no_tax).map(Into::into),
            Command::Retirement {
                current_age,
                retirement_age,
                balance,
                salary,
                employee_rate,
                expected_return,
                salary_growth,
            } => RetirementRequest::parse(
                current_age,
                retirement_age,
                balance,
                salary,
                employee_rate,
                expected_return,
                salary_growth.as_deref(),
            )
            .map(Into::into),
            Command::Contributions {
                salary,
                employee_rate,
                no_employer,
                no_government,
            } => ContributionRequest::parse(salary, employee_rate.as_deref(), !no_employer, !no_government)
                .map(Into::into),
            Command::Gst { amount, remove } => {
                let direction = if *remove { GstDirection::RemoveGst } else { GstDirection::AddGst };
                GstRequest::parse(amount, direction).map(Into::into)
            }
            Command::Batch { .. } => return None,
        };
        Some(request)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<FinanceError>() {
                Some(finance) => eprintln!("Error [{}]: {:#}", finance.reason(), e),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut session = match &cli.assumptions {
        Some(path) => FinanceSession::from_csv_path(path)
            .map_err(FinanceError::from)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => FinanceSession::new(),
    };

    let mut code = ExitCode::SUCCESS;

    match &cli.command {
        Command::Batch { file } => {
            let rows = load_requests(file).with_context(|| format!("reading batch file {}", file.display()))?;
            let report = run_batch(&mut session, rows);

            for (line, result) in &report.results {
                print_result(cli.json, Some(*line), result)?;
            }
            for (line, err) in &report.rejected {
                eprintln!("Line {}: {}", line, err);
            }
            if !report.rejected.is_empty() {
                code = ExitCode::from(2);
            }
        }
        command => match command.to_request() {
            Some(Ok(request)) => {
                let result = session.submit(request);
                print_result(cli.json, None, &result)?;
            }
            Some(Err(e)) => {
                eprintln!("Input error [{}]: {}", e.reason(), e);
                return Ok(ExitCode::from(2));
            }
            None => {}
        },
    }

    if cli.history {
        println!();
        println!("Finance History");
        println!("{}", session.history_view().render());
    }

    if let Some(dir) = &cli.export {
        let path = session.export_to(dir).map_err(FinanceError::from)?;
        println!();
        println!("Export successful. The file is called {}", path.display());
    }

    Ok(code)
}

fn print_result(json: bool, line: Option<u64>, result: &CalculationResult) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }

    match line {
        Some(line) => println!("{} (line {})", result.label(), line),
        None => println!("{}", result.label()),
    }
    println!("{}", "-".repeat(40));
    for text in display_lines(result) {
        println!("  {}", text);
    }

    if let CalculationResult::Mortgage { request, .. } = result {
        println!("  Deposit: {}", format_currency(request.down_payment));
    }
    println!();
    Ok(())
}
