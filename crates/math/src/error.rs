//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Invalid percentile value.
    #[error("invalid percentile: {0} (must be in (0, 0.5))")]
    InvalidPercentile(f64),

    /// Panel error.
    #[error("panel error: {0}")]
    Panel(#[from] ronda_panel::PanelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MathError::InvalidPercentile(0.6);
        assert!(err.to_string().contains("0.6"));
    }
}
