//! Momentum signal.

use polars::prelude::*;
use ronda_panel::WidePanel;

use crate::{Signal, SignalError, SignalInputs, expr_util::map_columns};

/// Configuration for the momentum signal.
#[derive(Debug, Clone)]
pub struct MomentumConfig {
    /// Look-back period in trading days.
    pub lookback: usize,
    /// Most recent days to skip (avoids short-term reversal).
    pub skip: usize,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            lookback: 252, // ~1 year
            skip: 21,      // ~1 month
        }
    }
}

/// Price momentum: the trailing log return from `lookback` to `skip`
/// days ago, lagged one day.
///
/// The score at row `t` is `ln P(t-1-skip) - ln P(t-1-lookback)`, so the
/// first `lookback + 1` rows of each column are missing.
#[derive(Debug, Clone, Default)]
pub struct MomentumSignal {
    config: MomentumConfig,
}

impl MomentumSignal {
    /// Create a momentum signal with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a momentum signal with custom configuration.
    #[must_use]
    pub const fn with_config(config: MomentumConfig) -> Self {
        Self { config }
    }
}

impl Signal for MomentumSignal {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["prices"]
    }

    fn compute(&self, inputs: &SignalInputs) -> Result<WidePanel, SignalError> {
        if self.config.skip >= self.config.lookback {
            return Err(SignalError::InvalidConfig {
                signal: self.name(),
                reason: format!(
                    "lookback ({}) must exceed skip ({})",
                    self.config.lookback, self.config.skip
                ),
            });
        }
        let lookback = self.config.lookback as i64;
        let skip = self.config.skip as i64;
        map_columns(&inputs.prices, |price| {
            let log_price = price.log(std::f64::consts::E);
            (log_price.clone().shift(lit(skip)) - log_price.shift(lit(lookback))).shift(lit(1))
        })
    }
}
