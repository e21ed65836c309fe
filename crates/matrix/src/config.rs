//! Pipeline configuration.

use ronda_math::NormalizerConfig;
use ronda_signals::{LowVolConfig, MomentumConfig};

/// End-to-end configuration for one factor-matrix build.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Momentum signal windows.
    pub momentum: MomentumConfig,
    /// Low-volatility signal window.
    pub low_vol: LowVolConfig,
    /// Forward-return horizon in trading days.
    pub horizon: usize,
    /// Maximum tolerated missing fraction per asset price column.
    pub max_missing: f64,
    /// Cross-sectional normalizer settings.
    pub normalizer: NormalizerConfig,
    /// Standardize raw scores cross-sectionally (disable to emit raw
    /// scores, e.g. for signal diagnostics).
    pub standardize: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            momentum: MomentumConfig::default(),
            low_vol: LowVolConfig::default(),
            horizon: 63, // ~1 quarter
            max_missing: 0.05,
            normalizer: NormalizerConfig::default(),
            standardize: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_trading_calendar_shaped() {
        let config = PipelineConfig::default();
        assert_eq!(config.momentum.lookback, 252);
        assert_eq!(config.momentum.skip, 21);
        assert_eq!(config.low_vol.window, 252);
        assert_eq!(config.horizon, 63);
        assert!(config.standardize);
        assert!(config.normalizer.winsorize.is_none());
    }
}
