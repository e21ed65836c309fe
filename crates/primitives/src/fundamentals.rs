//! Point-in-time fundamental observation types.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Date;

/// A sparse, irregularly spaced point-in-time fact for one asset and metric.
///
/// `as_of` is the fiscal reporting date. The observation is treated as valid
/// from `as_of` forward until superseded by a later observation for the same
/// asset and metric; the resolver never consults it before `as_of`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundamentalObservation {
    /// Fiscal reporting date.
    pub as_of: Date,
    /// Reported value.
    pub value: f64,
}

impl FundamentalObservation {
    /// Create a new observation.
    #[must_use]
    pub const fn new(as_of: Date, value: f64) -> Self {
        Self { as_of, value }
    }
}

/// Raw fundamental metrics consumed from the fundamentals source.
///
/// Display names match the source's statement line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum FundamentalMetric {
    /// Total stockholders equity (book value).
    StockholdersEquity,
    /// Net income, trailing fiscal year.
    NetIncome,
    /// Total debt outstanding.
    TotalDebt,
    /// Total assets.
    TotalAssets,
    /// Ordinary shares outstanding.
    OrdinarySharesNumber,
}
