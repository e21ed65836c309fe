//! Error types for signal computation.

/// Errors that can occur while computing factor signals.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    /// A signal's required input panel was not supplied.
    #[error("missing required input for signal '{signal}': {input}")]
    MissingInput {
        /// Signal name.
        signal: &'static str,
        /// Missing input panel name.
        input: &'static str,
    },

    /// Invalid signal configuration.
    #[error("invalid configuration for signal '{signal}': {reason}")]
    InvalidConfig {
        /// Signal name.
        signal: &'static str,
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Panel error.
    #[error("panel error: {0}")]
    Panel(#[from] ronda_panel::PanelError),

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] ronda_math::MathError),

    /// Polars computation error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SignalError::MissingInput { signal: "sentiment", input: "sentiment scores" };
        assert!(err.to_string().contains("sentiment"));

        let err = SignalError::InvalidConfig {
            signal: "momentum",
            reason: "lookback must exceed skip".into(),
        };
        assert!(err.to_string().contains("momentum"));
    }
}
