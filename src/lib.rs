//! Personal Finance - calculation and validation engine (New Zealand edition)
//!
//! This library provides:
//! - Input validation of raw field strings with classified errors
//! - Loan amortization and mortgage costs (LVR, protection insurance)
//! - Investment growth under a flat PIE tax
//! - KiwiSaver contributions and retirement projections
//! - GST conversions
//! - Session history with dated text export

pub mod error;
pub mod format;
pub mod assumptions;
pub mod validation;
pub mod calculators;
pub mod report;
pub mod history;
pub mod session;
pub mod batch;

// Re-export commonly used types
pub use error::{ErrorReason, FinanceError};
pub use assumptions::Assumptions;
pub use validation::{CalculationRequest, ValidationError};
pub use calculators::{CalculationResult, FinanceEngine};
pub use history::{History, HistoryEntry, Exporter};
pub use session::FinanceSession;
