//! Size signal.

use polars::prelude::*;
use ronda_panel::WidePanel;

use crate::{Signal, SignalError, SignalInputs, expr_util::map_columns};

/// Negative log market cap.
///
/// The sign convention makes small-cap assets score high, matching the
/// direction of the historical size premium. Non-positive market caps
/// resolve to missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeSignal;

impl SizeSignal {
    /// Create a size signal.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Signal for SizeSignal {
    fn name(&self) -> &'static str {
        "size"
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["market_cap"]
    }

    fn compute(&self, inputs: &SignalInputs) -> Result<WidePanel, SignalError> {
        map_columns(&inputs.market_cap, |cap| cap.log(std::f64::consts::E) * lit(-1.0))
    }
}
