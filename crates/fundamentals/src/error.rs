//! Error types for fundamental resolution.

use ronda_primitives::FundamentalMetric;

/// Errors that can occur while resolving fundamentals.
#[derive(Debug, thiserror::Error)]
pub enum FundamentalsError {
    /// A required metric has no observations for any asset.
    #[error("no observations for required metric: {0}")]
    MissingMetric(FundamentalMetric),

    /// Panel error.
    #[error("panel error: {0}")]
    Panel(#[from] ronda_panel::PanelError),
}
