//! Asset type definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Date;

/// Stock ticker symbol, upper-cased on construction.
///
/// Upstream sources are inconsistent about symbol casing; the symbol is the
/// cross-sectional join key, so it is normalized once here and never again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol, trimming whitespace and upper-casing.
    #[must_use]
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_uppercase())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Raw date-indexed observations for a single asset, as delivered by a
/// price source. Dates need not align across assets and values may be
/// unparseable (non-finite); the panel loader handles both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSeries {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// (date, value) observations in source order.
    pub observations: Vec<(Date, f64)>,
}

impl AssetSeries {
    /// Create a new asset series.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, observations: Vec<(Date, f64)>) -> Self {
        Self { symbol: symbol.into(), observations }
    }

    /// Observations with a finite value, in source order.
    #[must_use]
    pub fn parseable(&self) -> Vec<(Date, f64)> {
        self.observations.iter().copied().filter(|(_, v)| v.is_finite()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_upper_cases() {
        let sym = Symbol::new("aapl");
        assert_eq!(sym.as_str(), "AAPL");

        let sym: Symbol = " msft ".into();
        assert_eq!(sym.as_str(), "MSFT");
    }

    #[test]
    fn symbol_from_string() {
        let sym: Symbol = String::from("goog").into();
        assert_eq!(sym.as_str(), "GOOG");
    }

    #[test]
    fn parseable_drops_non_finite() {
        let d = Date::from_ymd_opt(2024, 1, 2).unwrap();
        let series = AssetSeries::new(
            "aapl",
            vec![(d, 100.0), (d.succ_opt().unwrap(), f64::NAN), (d, f64::INFINITY)],
        );
        assert_eq!(series.parseable(), vec![(d, 100.0)]);
    }
}
