//! Point-in-time resolution of sparse observations onto a trading calendar.

use std::collections::BTreeMap;

use ronda_panel::WidePanel;
use ronda_primitives::{Date, FundamentalObservation, Symbol};
use tracing::warn;

use crate::FundamentalsError;

/// Resolve one asset's observations onto a calendar via as-of lookup.
///
/// Each calendar date takes the value of the latest observation whose
/// `as_of` date is on or before it. Dates before the first observation
/// resolve to missing. When two observations share an `as_of` date the
/// later-supplied one wins. Non-finite values are discarded.
///
/// Runs in O(dates + observations) after sorting: the calendar is
/// increasing, so a single pointer sweeps the sorted observations once.
#[must_use]
pub fn resolve_series(dates: &[Date], observations: &[FundamentalObservation]) -> Vec<Option<f64>> {
    let mut obs: Vec<FundamentalObservation> =
        observations.iter().copied().filter(|o| o.value.is_finite()).collect();
    // Stable sort: equal as-of dates keep supply order, and the pointer
    // sweep below takes the last of each run.
    obs.sort_by_key(|o| o.as_of);

    let mut ptr = 0;
    let mut current: Option<f64> = None;
    dates
        .iter()
        .map(|date| {
            while ptr < obs.len() && obs[ptr].as_of <= *date {
                current = Some(obs[ptr].value);
                ptr += 1;
            }
            current
        })
        .collect()
}

/// Resolve one metric's observations for every asset into a wide panel
/// aligned to the given calendar.
///
/// Assets with no finite observations produce an all-missing column.
///
/// # Errors
/// Fails if the panel cannot be constructed.
pub fn resolve_panel(
    dates: &[Date],
    series: &BTreeMap<Symbol, Vec<FundamentalObservation>>,
) -> Result<WidePanel, FundamentalsError> {
    let parts = series
        .iter()
        .map(|(symbol, observations)| {
            let resolved = resolve_series(dates, observations);
            if resolved.iter().all(Option::is_none) {
                warn!(symbol = %symbol, "no resolvable observations on this calendar");
            }
            (symbol.clone(), resolved)
        })
        .collect();
    Ok(WidePanel::from_parts(dates, parts)?)
}
