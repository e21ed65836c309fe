//! Cross-sectional statistical operations.
//!
//! All operations treat NaN as missing: missing inputs stay missing in the
//! output and are excluded from means, stdevs, and rank denominators.

use ndarray::Array1;
use ronda_panel::WidePanel;
use ronda_primitives::Symbol;

use crate::MathError;

/// Z-score one cross-section using the population (ddof=0) standard deviation.
///
/// With fewer than 2 non-missing values, or a zero stdev, every output is
/// missing: a degenerate cross-section carries no ordering information and
/// must not leak NaN into downstream joins.
#[must_use]
pub fn zscore(data: &Array1<f64>) -> Array1<f64> {
    let valid: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    let n = valid.len() as f64;
    if valid.len() < 2 {
        return Array1::from_elem(data.len(), f64::NAN);
    }
    let mean = valid.iter().sum::<f64>() / n;
    let var = valid.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std = var.sqrt();
    if std == 0.0 {
        return Array1::from_elem(data.len(), f64::NAN);
    }
    data.mapv(|x| if x.is_finite() { (x - mean) / std } else { f64::NAN })
}

/// Ascending percentile rank of one cross-section, mapped to [0, 1] as
/// `(rank - 1) / (n - 1)` with average ranks for ties.
///
/// Missing values stay missing and are excluded from the denominator. A
/// cross-section with a single non-missing value ranks it 0.5 (neutral).
#[must_use]
pub fn rank_pct(data: &Array1<f64>) -> Array1<f64> {
    let mut valid: Vec<(usize, f64)> =
        data.iter().copied().enumerate().filter(|(_, x)| x.is_finite()).collect();
    let n = valid.len();
    let mut out = Array1::from_elem(data.len(), f64::NAN);
    if n == 0 {
        return out;
    }
    if n == 1 {
        out[valid[0].0] = 0.5;
        return out;
    }

    valid.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    // One-based average ranks over runs of equal values.
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && valid[j + 1].1 == valid[i].1 {
            j += 1;
        }
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        let pct = (avg_rank - 1.0) / (n as f64 - 1.0);
        for k in i..=j {
            out[valid[k].0] = pct;
        }
        i = j + 1;
    }
    out
}

/// Z-score a panel within each date independently.
///
/// # Errors
/// Fails only on panel invariant violations.
pub fn zscore_xsection(panel: &WidePanel) -> Result<WidePanel, MathError> {
    map_rows(panel, |row| Ok(zscore(row)))
}

/// Percentile-rank a panel within each date independently.
///
/// # Errors
/// Fails only on panel invariant violations.
pub fn rank_pct_xsection(panel: &WidePanel) -> Result<WidePanel, MathError> {
    map_rows(panel, |row| Ok(rank_pct(row)))
}

/// Apply a fallible cross-sectional transform to every date row of a panel.
pub(crate) fn map_rows(
    panel: &WidePanel,
    f: impl Fn(&Array1<f64>) -> Result<Array1<f64>, MathError>,
) -> Result<WidePanel, MathError> {
    let symbols = panel.symbols();
    let n_rows = panel.n_rows();

    let columns: Vec<Vec<Option<f64>>> = symbols
        .iter()
        .map(|s| panel.column_values(s))
        .collect::<Result<_, _>>()?;

    let mut out: Vec<Vec<Option<f64>>> =
        symbols.iter().map(|_| Vec::with_capacity(n_rows)).collect();
    for row in 0..n_rows {
        let xs: Array1<f64> =
            Array1::from_iter(columns.iter().map(|c| c[row].unwrap_or(f64::NAN)));
        let transformed = f(&xs)?;
        for (j, v) in transformed.iter().enumerate() {
            out[j].push(v.is_finite().then_some(*v));
        }
    }

    let parts = symbols
        .iter()
        .zip(out)
        .map(|(s, values)| (Symbol::new(s), values))
        .collect();
    Ok(WidePanel::from_parts(panel.dates(), parts)?)
}

/// Configuration for the cross-sectional normalizer.
#[derive(Debug, Clone, Default)]
pub struct NormalizerConfig {
    /// Symmetric winsorization percentile applied before z-scoring
    /// (None to disable).
    pub winsorize: Option<f64>,
}

/// Cross-sectional normalizer: optional winsorization, then per-date
/// population z-scoring.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer with default configuration (no winsorization).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with custom configuration.
    #[must_use]
    pub const fn with_config(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Standardize a factor panel within each date.
    ///
    /// # Errors
    /// Fails on an invalid winsorization percentile.
    pub fn normalize(&self, panel: &WidePanel) -> Result<WidePanel, MathError> {
        let panel = match self.config.winsorize {
            Some(pct) => crate::winsorize_xsection(panel, pct)?,
            None => panel.clone(),
        };
        zscore_xsection(&panel)
    }
}
