//! Error types for panel construction and alignment.

/// Errors that can occur while building or aligning wide panels.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A required column is absent from the input frame.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A column has an unusable dtype.
    #[error("column {column} has dtype {dtype}, expected {expected}")]
    BadDtype {
        /// Offending column name.
        column: String,
        /// Observed dtype.
        dtype: String,
        /// Required dtype.
        expected: String,
    },

    /// The date axis contains a null entry.
    #[error("null date at row {row}")]
    NullDate {
        /// Offending row index.
        row: usize,
    },

    /// The date axis is not strictly increasing.
    #[error("date index is not strictly increasing at row {row}")]
    NonMonotonicDates {
        /// First offending row index.
        row: usize,
    },

    /// Two asset columns collapse to the same upper-cased symbol.
    #[error("duplicate symbol column after normalization: {0}")]
    DuplicateSymbol(String),

    /// A column's length does not match the date axis.
    #[error("column {symbol} has {actual} values, date axis has {expected}")]
    LengthMismatch {
        /// Offending symbol.
        symbol: String,
        /// Date axis length.
        expected: usize,
        /// Column length.
        actual: usize,
    },

    /// Two panels presented to a joining step have different date axes.
    #[error("misaligned date axes: {0}")]
    Misaligned(String),

    /// Completeness threshold outside [0, 1].
    #[error("invalid missing-fraction threshold: {0} (must be in [0, 1])")]
    InvalidThreshold(f64),

    /// No usable input.
    #[error("empty panel: no asset columns")]
    EmptyPanel,

    /// I/O error while persisting a panel.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
