//! GST inclusive/exclusive conversions

use serde::{Deserialize, Serialize};

use crate::assumptions::TaxPolicy;

/// An amount split into its GST-exclusive part and the GST on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub exclusive: f64,
    pub gst: f64,
    pub inclusive: f64,
}

/// Add GST to a GST-exclusive amount
pub fn gst_inclusive(amount: f64, tax: &TaxPolicy) -> GstBreakdown {
    let gst = amount * tax.gst_rate;
    GstBreakdown {
        exclusive: amount,
        gst,
        inclusive: amount + gst,
    }
}

/// Extract GST from a GST-inclusive amount
pub fn gst_exclusive(inclusive_amount: f64, tax: &TaxPolicy) -> GstBreakdown {
    let exclusive = inclusive_amount / (1.0 + tax.gst_rate);
    GstBreakdown {
        exclusive,
        gst: inclusive_amount - exclusive,
        inclusive: inclusive_amount,
    }
}
