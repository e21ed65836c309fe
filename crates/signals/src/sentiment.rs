//! Sentiment signal.

use ronda_panel::WidePanel;

use crate::{Signal, SignalError, SignalInputs};

/// Pre-scored sentiment passthrough.
///
/// The sentiment panel arrives already scored by an upstream source and
/// aligned to the price calendar; this signal only surfaces it under
/// the standard factor name. Computing a sentiment score without a
/// supplied panel is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentSignal;

impl SentimentSignal {
    /// Create a sentiment signal.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Signal for SentimentSignal {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["sentiment"]
    }

    fn compute(&self, inputs: &SignalInputs) -> Result<WidePanel, SignalError> {
        inputs.sentiment.clone().ok_or(SignalError::MissingInput {
            signal: "sentiment",
            input: "sentiment score panel",
        })
    }
}
