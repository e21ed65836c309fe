//! Value signal.

use ronda_panel::WidePanel;

use crate::{Signal, SignalError, SignalInputs};

/// Book-to-price value signal.
///
/// The ratio panel is already point-in-time correct (fundamentals become
/// visible on their as-of date), so the score is the ratio itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSignal;

impl ValueSignal {
    /// Create a value signal.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Signal for ValueSignal {
    fn name(&self) -> &'static str {
        "value"
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["book_to_price"]
    }

    fn compute(&self, inputs: &SignalInputs) -> Result<WidePanel, SignalError> {
        Ok(inputs.book_to_price.clone())
    }
}
