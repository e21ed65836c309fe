//! Error types for matrix assembly and the pipeline.

/// Errors that can occur while assembling the factor matrix.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// Invalid pipeline or assembly configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The assembled matrix has no complete rows.
    #[error("assembled matrix is empty after completeness filtering")]
    EmptyMatrix,

    /// Panel error.
    #[error("panel error: {0}")]
    Panel(#[from] ronda_panel::PanelError),

    /// Fundamental resolution error.
    #[error("fundamentals error: {0}")]
    Fundamentals(#[from] ronda_fundamentals::FundamentalsError),

    /// Signal computation error.
    #[error("signal error: {0}")]
    Signal(#[from] ronda_signals::SignalError),

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] ronda_math::MathError),

    /// Polars computation error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
