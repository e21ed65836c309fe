//! Example: Full Ronda Factor-Matrix Pipeline
//!
//! Demonstrates the complete ronda workflow on synthetic data:
//! 1. Building a daily close-price panel for a small universe
//! 2. Supplying point-in-time fundamental observations
//! 3. Running the pipeline (signals, normalization, forward returns)
//! 4. Printing the assembled matrix and its completeness report
//!
//! Run with: `cargo run --example full_pipeline --features full`

use chrono::Days;
use ronda::{
    fundamentals::FundamentalSet,
    matrix::{Pipeline, PipelineConfig, PipelineInputs},
    primitives::{AssetSeries, Date, FundamentalMetric, FundamentalObservation, Symbol},
    signals::{LowVolConfig, MomentumConfig},
};

/// Trading days of synthetic history (~6 months).
const TRADING_DAYS: usize = 126;

/// Synthetic universe: (symbol, start price, daily drift, wobble amplitude).
const UNIVERSE: &[(&str, f64, f64, f64)] = &[
    ("ALFA", 120.0, 0.30, 2.5),
    ("BRVO", 45.0, -0.05, 1.0),
    ("CRLY", 310.0, 0.10, 6.0),
    ("DLTA", 18.0, 0.02, 0.4),
    ("ECHO", 77.0, -0.12, 3.1),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== ronda: full pipeline example ===\n");

    let inputs = PipelineInputs {
        prices: synthetic_prices(),
        fundamentals: synthetic_fundamentals(),
        sentiment: None,
    };

    let config = PipelineConfig {
        momentum: MomentumConfig { lookback: 63, skip: 5 },
        low_vol: LowVolConfig { window: 21 },
        horizon: 5,
        ..Default::default()
    };

    let output = Pipeline::with_config(config).run(inputs)?;

    println!("first rows of the assembled matrix:");
    println!("{}", output.matrix.head(Some(10)));

    let report = &output.report;
    println!("\ncompleteness report:");
    println!("  candidate rows: {}", report.candidate_rows);
    println!("  kept rows:      {}", report.kept_rows);
    println!("  discarded:      {:.1}%", 100.0 * report.discard_fraction());
    if let (Some(first), Some(last)) = (report.first_date, report.last_date) {
        println!("  coverage:       {first} through {last}");
    }
    for (column, missing) in &report.missing_per_column {
        println!("  missing in {column}: {missing}");
    }

    Ok(())
}

fn calendar() -> Vec<Date> {
    let start = Date::from_ymd_opt(2024, 1, 2).expect("valid date");
    (0..TRADING_DAYS).map(|i| start + Days::new(i as u64)).collect()
}

/// Deterministic wobbly price paths, distinct per asset.
fn synthetic_prices() -> Vec<AssetSeries> {
    let dates = calendar();
    UNIVERSE
        .iter()
        .map(|(symbol, start, drift, wobble)| {
            let observations = dates
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let t = i as f64;
                    let price = start + drift * t + wobble * (t * 0.7).sin();
                    (*d, price)
                })
                .collect();
            AssetSeries::new(Symbol::new(symbol), observations)
        })
        .collect()
}

/// One annual report before the calendar plus one quarterly update inside it.
fn synthetic_fundamentals() -> FundamentalSet {
    let mut set = FundamentalSet::new();
    let annual = Date::from_ymd_opt(2023, 12, 15).expect("valid date");
    let quarterly = Date::from_ymd_opt(2024, 3, 20).expect("valid date");

    for (i, (symbol, start, ..)) in UNIVERSE.iter().enumerate() {
        let s = Symbol::new(symbol);
        let equity = start * 40.0;
        let growth = 1.0 + 0.02 * i as f64;
        for (as_of, scale) in [(annual, 1.0), (quarterly, growth)] {
            set.add(
                s.clone(),
                FundamentalMetric::StockholdersEquity,
                FundamentalObservation::new(as_of, equity * scale),
            );
            set.add(
                s.clone(),
                FundamentalMetric::NetIncome,
                FundamentalObservation::new(as_of, equity * scale * (0.04 + 0.03 * i as f64)),
            );
            set.add(
                s.clone(),
                FundamentalMetric::TotalDebt,
                FundamentalObservation::new(as_of, equity * (0.55 - 0.08 * i as f64)),
            );
            set.add(
                s.clone(),
                FundamentalMetric::TotalAssets,
                FundamentalObservation::new(as_of, equity * 2.4),
            );
            set.add(
                s.clone(),
                FundamentalMetric::OrdinarySharesNumber,
                FundamentalObservation::new(as_of, 1_000.0 + 50.0 * i as f64),
            );
        }
    }
    set
}
