//! Quality signal.

use ronda_math::rank_pct_xsection;
use ronda_panel::WidePanel;

use crate::{Signal, SignalError, SignalInputs};

/// Profitability-minus-leverage quality composite.
///
/// Each date's cross-section ranks ROE ascending and debt-to-assets
/// ascending on [0, 1], then scores `rank(roe) - rank(debt_to_assets)`.
/// A profitable, lightly levered asset scores near +1; an unprofitable,
/// heavily levered one near -1. An asset missing either input on a date
/// gets a missing score there.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualitySignal;

impl QualitySignal {
    /// Create a quality signal.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Signal for QualitySignal {
    fn name(&self) -> &'static str {
        "quality"
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["roe", "debt_to_assets"]
    }

    fn compute(&self, inputs: &SignalInputs) -> Result<WidePanel, SignalError> {
        let profitability = rank_pct_xsection(&inputs.roe)?;
        let leverage = rank_pct_xsection(&inputs.debt_to_assets)?;
        Ok(profitability.subtract(&leverage)?)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::traits::testutil::{constant_inputs, dates, panel_of};

    #[test]
    fn quality_spans_plus_minus_one() {
        // AAA: low ROE, high leverage. BBB: high ROE, low leverage.
        let inputs = constant_inputs(2);
        let scores = QualitySignal::new().compute(&inputs).unwrap();
        assert_relative_eq!(scores.column_values("AAA").unwrap()[0].unwrap(), -1.0);
        assert_relative_eq!(scores.column_values("BBB").unwrap()[0].unwrap(), 1.0);
    }

    #[test]
    fn missing_input_makes_score_missing() {
        let ds = dates(1);
        let mut inputs = constant_inputs(1);
        inputs.roe = panel_of(&ds, vec![("AAA", vec![None]), ("BBB", vec![Some(0.3)])]);

        let scores = QualitySignal::new().compute(&inputs).unwrap();
        assert_eq!(scores.column_values("AAA").unwrap()[0], None);
        // BBB is the lone ranked name on both inputs: 0.5 - rank(d2a).
        assert!(scores.column_values("BBB").unwrap()[0].is_some());
    }
}
