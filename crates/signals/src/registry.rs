//! Registry running the full signal library over one input bundle.

use ronda_panel::WidePanel;
use tracing::{debug, info};

use crate::{
    LowVolConfig, LowVolSignal, MomentumConfig, MomentumSignal, QualitySignal, SentimentSignal,
    Signal, SignalError, SignalInputs, SizeSignal, ValueSignal,
};

/// An ordered collection of signals computed against one input bundle.
pub struct SignalRegistry {
    signals: Vec<Box<dyn Signal>>,
}

impl SignalRegistry {
    /// Build the standard library with the given window configurations.
    ///
    /// Order is stable and determines factor column order downstream.
    #[must_use]
    pub fn standard(momentum: MomentumConfig, low_vol: LowVolConfig) -> Self {
        Self {
            signals: vec![
                Box::new(MomentumSignal::with_config(momentum)),
                Box::new(ValueSignal::new()),
                Box::new(SizeSignal::new()),
                Box::new(QualitySignal::new()),
                Box::new(LowVolSignal::with_config(low_vol)),
                Box::new(SentimentSignal::new()),
            ],
        }
    }

    /// Build an empty registry to fill with custom signals.
    #[must_use]
    pub const fn new() -> Self {
        Self { signals: Vec::new() }
    }

    /// Append a signal.
    pub fn push(&mut self, signal: Box<dyn Signal>) {
        self.signals.push(signal);
    }

    /// Names of the registered signals, in computation order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.signals.iter().map(|s| s.name()).collect()
    }

    /// Compute every registered signal's raw score panel.
    ///
    /// The sentiment signal is skipped, not failed, when no sentiment
    /// panel was supplied. Inputs are alignment-checked first.
    ///
    /// # Errors
    /// Fails on misaligned inputs or any individual signal failure.
    pub fn compute_all(
        &self,
        inputs: &SignalInputs,
    ) -> Result<Vec<(&'static str, WidePanel)>, SignalError> {
        inputs.validate()?;
        let mut scores = Vec::with_capacity(self.signals.len());
        for signal in &self.signals {
            if signal.name() == "sentiment" && inputs.sentiment.is_none() {
                debug!("no sentiment panel supplied, skipping sentiment signal");
                continue;
            }
            let panel = signal.compute(inputs)?;
            info!(signal = signal.name(), assets = panel.n_assets(), "computed raw scores");
            scores.push((signal.name(), panel));
        }
        Ok(scores)
    }
}

impl std::fmt::Debug for SignalRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalRegistry").field("signals", &self.names()).finish()
    }
}

impl Default for SignalRegistry {
    fn default() -> Self {
        Self::standard(MomentumConfig::default(), LowVolConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::testutil::{constant_inputs, dates, panel_of};

    #[test]
    fn standard_order_is_stable() {
        let registry = SignalRegistry::default();
        assert_eq!(
            registry.names(),
            vec!["momentum", "value", "size", "quality", "low_vol", "sentiment"]
        );
    }

    #[test]
    fn compute_all_skips_sentiment_when_absent() {
        let n = 8;
        let inputs = constant_inputs(n);
        let registry = SignalRegistry::standard(
            MomentumConfig { lookback: 4, skip: 1 },
            LowVolConfig { window: 3 },
        );

        let scores = registry.compute_all(&inputs).unwrap();
        let names: Vec<&str> = scores.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["momentum", "value", "size", "quality", "low_vol"]);
    }

    #[test]
    fn compute_all_includes_sentiment_when_present() {
        let n = 8;
        let mut inputs = constant_inputs(n);
        let ds = dates(n);
        inputs.sentiment = Some(panel_of(
            &ds,
            vec![("AAA", vec![Some(0.1); n]), ("BBB", vec![Some(-0.1); n])],
        ));
        let registry = SignalRegistry::standard(
            MomentumConfig { lookback: 4, skip: 1 },
            LowVolConfig { window: 3 },
        );

        let scores = registry.compute_all(&inputs).unwrap();
        assert_eq!(scores.len(), 6);
        assert_eq!(scores.last().unwrap().0, "sentiment");
    }

    #[test]
    fn compute_all_rejects_misaligned_inputs() {
        let mut inputs = constant_inputs(4);
        inputs.market_cap =
            panel_of(&dates(4), vec![("AAA", vec![Some(1e9); 4])]);
        let registry = SignalRegistry::default();
        assert!(registry.compute_all(&inputs).is_err());
    }
}
