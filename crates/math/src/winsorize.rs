//! Winsorization operations for outlier handling.

use ndarray::Array1;
use ronda_panel::WidePanel;

use crate::MathError;

/// Winsorize a 1D array to symmetric percentiles.
///
/// Values below the lower percentile are clipped to that value, values
/// above the upper percentile are clipped to that value. Missing (NaN)
/// entries stay missing and are excluded from the bound computation.
///
/// # Errors
/// Returns `MathError::InvalidPercentile` if percentile is not in (0, 0.5).
pub fn winsorize(data: &Array1<f64>, percentile: f64) -> Result<Array1<f64>, MathError> {
    if percentile <= 0.0 || percentile >= 0.5 {
        return Err(MathError::InvalidPercentile(percentile));
    }

    if data.is_empty() {
        return Ok(data.clone());
    }

    let mut valid_values: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    if valid_values.is_empty() {
        return Ok(data.clone());
    }

    valid_values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = valid_values.len();
    let lower_idx = ((n as f64) * percentile).floor() as usize;
    let upper_idx = ((n as f64) * (1.0 - percentile)).ceil() as usize;

    let lower_bound = valid_values[lower_idx];
    let upper_bound = valid_values[upper_idx.saturating_sub(1).min(n - 1)];

    Ok(data.mapv(|x| if x.is_nan() { x } else { x.clamp(lower_bound, upper_bound) }))
}

/// Winsorize a panel within each date independently.
///
/// # Errors
/// Returns `MathError::InvalidPercentile` if percentile is not in (0, 0.5).
pub fn winsorize_xsection(panel: &WidePanel, percentile: f64) -> Result<WidePanel, MathError> {
    // Checked up front so an empty panel still rejects a bad percentile.
    if percentile <= 0.0 || percentile >= 0.5 {
        return Err(MathError::InvalidPercentile(percentile));
    }
    crate::cross_section::map_rows(panel, |row| winsorize(row, percentile))
}
