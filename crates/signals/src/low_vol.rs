//! Low-volatility signal.

use polars::prelude::*;
use ronda_panel::WidePanel;

use crate::{Signal, SignalError, SignalInputs, expr_util::map_columns};

/// Configuration for the low-volatility signal.
#[derive(Debug, Clone)]
pub struct LowVolConfig {
    /// Rolling window over daily log returns, in trading days.
    pub window: usize,
}

impl Default for LowVolConfig {
    fn default() -> Self {
        Self { window: 252 }
    }
}

/// Negative trailing volatility of daily log returns, lagged one day.
///
/// The rolling standard deviation (sample, full window required) is
/// negated so calm assets score high. The first `window + 1` rows of
/// each column are missing.
#[derive(Debug, Clone, Default)]
pub struct LowVolSignal {
    config: LowVolConfig,
}

impl LowVolSignal {
    /// Create a low-volatility signal with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a low-volatility signal with custom configuration.
    #[must_use]
    pub const fn with_config(config: LowVolConfig) -> Self {
        Self { config }
    }
}

impl Signal for LowVolSignal {
    fn name(&self) -> &'static str {
        "low_vol"
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["prices"]
    }

    fn compute(&self, inputs: &SignalInputs) -> Result<WidePanel, SignalError> {
        if self.config.window < 2 {
            return Err(SignalError::InvalidConfig {
                signal: self.name(),
                reason: format!("window ({}) must be at least 2", self.config.window),
            });
        }
        let window = self.config.window;
        map_columns(&inputs.prices, |price| {
            let log_price = price.log(std::f64::consts::E);
            let log_return = log_price.clone() - log_price.shift(lit(1));
            log_return
                .rolling_std(RollingOptionsFixedWindow {
                    window_size: window,
                    min_periods: window,
                    ..Default::default()
                })
                .shift(lit(1))
                * lit(-1.0)
        })
    }
}
