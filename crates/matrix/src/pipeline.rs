//! End-to-end pipeline from raw series to the assembled matrix.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use ronda_fundamentals::FundamentalSet;
use ronda_math::Normalizer;
use ronda_panel::{WidePanel, align_asset_series};
use ronda_primitives::{AssetSeries, Date, Symbol};
use ronda_signals::{SignalInputs, SignalRegistry};
use tracing::info;

use crate::{MatrixError, MatrixReport, PipelineConfig, assemble, forward_log_returns};

/// Raw inputs to one factor-matrix build.
#[derive(Debug, Clone)]
pub struct PipelineInputs {
    /// Per-asset daily close price series.
    pub prices: Vec<AssetSeries>,
    /// Point-in-time fundamental observations.
    pub fundamentals: FundamentalSet,
    /// Pre-scored per-asset sentiment series, when a source is configured.
    pub sentiment: Option<Vec<AssetSeries>>,
}

/// The assembled matrix and its completeness report.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Long-format factor matrix.
    pub matrix: DataFrame,
    /// What was kept and what was discarded along the way.
    pub report: MatrixReport,
}

/// Orchestrates loading, resolution, signal computation, normalization,
/// and assembly.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom configuration.
    #[must_use]
    pub const fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full build.
    ///
    /// # Errors
    /// Fails on unloadable prices, missing fundamental metrics, signal
    /// errors, or an empty assembled matrix.
    pub fn run(&self, inputs: PipelineInputs) -> Result<PipelineOutput, MatrixError> {
        let panel = align_asset_series(inputs.prices)?;
        let (prices, dropped) = panel.drop_sparse_columns(self.config.max_missing)?;
        info!(
            assets = prices.n_assets(),
            dates = prices.n_rows(),
            dropped = dropped.len(),
            "loaded price panel"
        );

        let ratios = inputs.fundamentals.derive_ratios(&prices)?;
        let sentiment = inputs
            .sentiment
            .map(|series| align_to_calendar(&prices, series))
            .transpose()?;

        let signal_inputs = SignalInputs {
            book_to_price: ratios.book_to_price,
            market_cap: ratios.market_cap,
            roe: ratios.roe,
            debt_to_assets: ratios.debt_to_assets,
            sentiment,
            prices: prices.clone(),
        };
        let registry =
            SignalRegistry::standard(self.config.momentum.clone(), self.config.low_vol.clone());
        let raw = registry.compute_all(&signal_inputs)?;

        let factors: Vec<(&'static str, WidePanel)> = if self.config.standardize {
            let normalizer = Normalizer::with_config(self.config.normalizer.clone());
            raw.into_iter()
                .map(|(name, panel)| Ok((name, normalizer.normalize(&panel)?)))
                .collect::<Result<_, MatrixError>>()?
        } else {
            raw
        };

        let forward = forward_log_returns(&prices, self.config.horizon)?;
        let (matrix, mut report) = assemble(&factors, &prices, &forward)?;
        report.dropped_assets = dropped;
        Ok(PipelineOutput { matrix, report })
    }
}

/// Align raw sentiment series onto the price panel's calendar and
/// universe by exact-date lookup. Assets outside the universe are
/// ignored; universe assets without sentiment get missing columns.
fn align_to_calendar(
    prices: &WidePanel,
    series: Vec<AssetSeries>,
) -> Result<WidePanel, MatrixError> {
    let mut by_symbol: BTreeMap<Symbol, BTreeMap<Date, f64>> = BTreeMap::new();
    for s in series {
        let symbol = s.symbol.clone();
        by_symbol.entry(symbol).or_default().extend(s.parseable());
    }

    let parts = prices
        .symbols()
        .iter()
        .map(|name| {
            let symbol = Symbol::new(name);
            let values = by_symbol.get(&symbol).map_or_else(
                || vec![None; prices.n_rows()],
                |obs| prices.dates().iter().map(|d| obs.get(d).copied()).collect(),
            );
            (symbol, values)
        })
        .collect();
    Ok(WidePanel::from_parts(prices.dates(), parts)?)
}
