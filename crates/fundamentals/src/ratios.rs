//! Derived ratio panels built from resolved fundamentals.

use std::collections::BTreeMap;

use ronda_panel::WidePanel;
use ronda_primitives::{FundamentalMetric, FundamentalObservation, Symbol};

use crate::{FundamentalsError, resolve_panel};

/// Raw fundamental observations grouped by metric and asset.
#[derive(Debug, Clone, Default)]
pub struct FundamentalSet {
    observations: BTreeMap<FundamentalMetric, BTreeMap<Symbol, Vec<FundamentalObservation>>>,
}

impl FundamentalSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation for an asset and metric.
    pub fn add(&mut self, symbol: Symbol, metric: FundamentalMetric, obs: FundamentalObservation) {
        self.observations.entry(metric).or_default().entry(symbol).or_default().push(obs);
    }

    /// Add a full observation series for an asset and metric.
    pub fn add_series(
        &mut self,
        symbol: Symbol,
        metric: FundamentalMetric,
        series: Vec<FundamentalObservation>,
    ) {
        self.observations.entry(metric).or_default().entry(symbol).or_default().extend(series);
    }

    /// Number of observations stored across all metrics and assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.values().flat_map(BTreeMap::values).map(Vec::len).sum()
    }

    /// Whether the set holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve one metric onto the price calendar as a wide panel.
    ///
    /// Assets present in the price panel but absent from the metric get
    /// all-missing columns so every resolved panel shares the price
    /// panel's shape.
    ///
    /// # Errors
    /// Returns `FundamentalsError::MissingMetric` if the metric has no
    /// observations for any asset.
    pub fn resolve_metric(
        &self,
        metric: FundamentalMetric,
        prices: &WidePanel,
    ) -> Result<WidePanel, FundamentalsError> {
        let series = self
            .observations
            .get(&metric)
            .filter(|m| m.values().any(|v| !v.is_empty()))
            .ok_or(FundamentalsError::MissingMetric(metric))?;

        let mut aligned: BTreeMap<Symbol, Vec<FundamentalObservation>> = prices
            .symbols()
            .iter()
            .map(|s| (Symbol::new(s), Vec::new()))
            .collect();
        for (symbol, obs) in series {
            if let Some(slot) = aligned.get_mut(symbol) {
                slot.extend(obs.iter().copied());
            }
        }
        resolve_panel(prices.dates(), &aligned)
    }

    /// Derive the ratio panels the signal library consumes.
    ///
    /// # Errors
    /// Returns `FundamentalsError::MissingMetric` if any required metric
    /// has no observations.
    pub fn derive_ratios(&self, prices: &WidePanel) -> Result<RatioPanels, FundamentalsError> {
        let equity = self.resolve_metric(FundamentalMetric::StockholdersEquity, prices)?;
        let net_income = self.resolve_metric(FundamentalMetric::NetIncome, prices)?;
        let total_debt = self.resolve_metric(FundamentalMetric::TotalDebt, prices)?;
        let total_assets = self.resolve_metric(FundamentalMetric::TotalAssets, prices)?;
        let shares = self.resolve_metric(FundamentalMetric::OrdinarySharesNumber, prices)?;

        let book_value_per_share = equity.divide_by(&shares)?;
        let book_to_price = book_value_per_share.divide_by(prices)?;
        let roe = net_income.divide_by(&equity)?;
        let debt_to_assets = total_debt.divide_by(&total_assets)?;
        let market_cap = prices.multiply_by(&shares)?;

        Ok(RatioPanels { book_to_price, roe, debt_to_assets, market_cap })
    }
}

/// Resolved ratio panels, each aligned to the price calendar.
#[derive(Debug, Clone)]
pub struct RatioPanels {
    /// Book value per share divided by price.
    pub book_to_price: WidePanel,
    /// Net income over stockholders equity.
    pub roe: WidePanel,
    /// Total debt over total assets.
    pub debt_to_assets: WidePanel,
    /// Price times resolved shares outstanding.
    pub market_cap: WidePanel,
}

#[cfg(test)]
mod tests {
    use ronda_primitives::Date;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn price_panel() -> WidePanel {
        WidePanel::from_parts(
            &[ymd(2024, 1, 2), ymd(2024, 1, 3)],
            vec![
                (Symbol::new("AAA"), vec![Some(10.0), Some(20.0)]),
                (Symbol::new("BBB"), vec![Some(50.0), Some(50.0)]),
            ],
        )
        .unwrap()
    }

    fn full_set() -> FundamentalSet {
        let mut set = FundamentalSet::new();
        let d = ymd(2024, 1, 1);
        for (symbol, equity, income, debt, assets, shares) in [
            ("AAA", 1000.0, 100.0, 200.0, 2000.0, 100.0),
            ("BBB", 5000.0, 250.0, 1000.0, 10000.0, 50.0),
        ] {
            let s = Symbol::new(symbol);
            set.add(s.clone(), FundamentalMetric::StockholdersEquity, FundamentalObservation::new(d, equity));
            set.add(s.clone(), FundamentalMetric::NetIncome, FundamentalObservation::new(d, income));
            set.add(s.clone(), FundamentalMetric::TotalDebt, FundamentalObservation::new(d, debt));
            set.add(s.clone(), FundamentalMetric::TotalAssets, FundamentalObservation::new(d, assets));
            set.add(s, FundamentalMetric::OrdinarySharesNumber, FundamentalObservation::new(d, shares));
        }
        set
    }

    #[test]
    fn derive_ratios_computes_expected_values() {
        let ratios = full_set().derive_ratios(&price_panel()).unwrap();

        // AAA book value per share = 1000 / 100 = 10; b/p on day one = 10 / 10.
        assert_eq!(ratios.book_to_price.column_values("AAA").unwrap()[0], Some(1.0));
        assert_eq!(ratios.book_to_price.column_values("AAA").unwrap()[1], Some(0.5));
        // ROE and leverage are price-independent.
        assert_eq!(ratios.roe.column_values("AAA").unwrap()[0], Some(0.1));
        assert_eq!(ratios.debt_to_assets.column_values("BBB").unwrap()[0], Some(0.1));
        // Market cap follows the price.
        assert_eq!(ratios.market_cap.column_values("AAA").unwrap(), vec![Some(1000.0), Some(2000.0)]);
    }

    #[test]
    fn missing_metric_is_an_error() {
        let mut set = FundamentalSet::new();
        set.add(
            Symbol::new("AAA"),
            FundamentalMetric::StockholdersEquity,
            FundamentalObservation::new(ymd(2024, 1, 1), 1000.0),
        );
        let err = set.derive_ratios(&price_panel()).unwrap_err();
        assert!(matches!(err, FundamentalsError::MissingMetric(FundamentalMetric::NetIncome)));
    }

    #[test]
    fn asset_without_observations_gets_missing_ratios() {
        let mut set = full_set();
        // CCC trades but never reports.
        let prices = WidePanel::from_parts(
            &[ymd(2024, 1, 2), ymd(2024, 1, 3)],
            vec![
                (Symbol::new("AAA"), vec![Some(10.0), Some(20.0)]),
                (Symbol::new("BBB"), vec![Some(50.0), Some(50.0)]),
                (Symbol::new("CCC"), vec![Some(5.0), Some(6.0)]),
            ],
        )
        .unwrap();
        set.add_series(Symbol::new("CCC"), FundamentalMetric::StockholdersEquity, vec![]);

        let ratios = set.derive_ratios(&prices).unwrap();
        assert_eq!(ratios.book_to_price.column_values("CCC").unwrap(), vec![None, None]);
        assert_eq!(ratios.market_cap.column_values("CCC").unwrap(), vec![None, None]);
    }

    #[test]
    fn zero_denominator_resolves_to_missing() {
        let mut set = full_set();
        set.add(
            Symbol::new("AAA"),
            FundamentalMetric::StockholdersEquity,
            FundamentalObservation::new(ymd(2024, 1, 3), 0.0),
        );
        let ratios = set.derive_ratios(&price_panel()).unwrap();
        // Equity hits zero on day two: ROE becomes missing, not infinite.
        assert_eq!(ratios.roe.column_values("AAA").unwrap()[0], Some(0.1));
        assert_eq!(ratios.roe.column_values("AAA").unwrap()[1], None);
    }
}
