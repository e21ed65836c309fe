//! Panel loader: union-of-dates alignment over raw per-asset series.

use std::collections::{BTreeMap, BTreeSet};

use ronda_primitives::{AssetSeries, Date};
use tracing::{debug, warn};

use crate::{PanelError, WidePanel};

/// Align raw per-asset series into one wide panel on the union of all dates.
///
/// Input dates need not align across assets; a date an asset did not trade
/// becomes a missing cell, never an interpolated one. An asset with no
/// parseable observations is dropped with a diagnostic rather than failing
/// the batch. Duplicate dates within one series keep the later-supplied
/// observation.
///
/// # Errors
/// Fails when no asset contributes any parseable observation, or when two
/// series collapse to the same symbol.
pub fn align_asset_series(series: Vec<AssetSeries>) -> Result<WidePanel, PanelError> {
    let mut per_asset: Vec<(ronda_primitives::Symbol, BTreeMap<Date, f64>)> = Vec::new();
    let mut all_dates: BTreeSet<Date> = BTreeSet::new();

    for s in series {
        let observations = s.parseable();
        if observations.is_empty() {
            warn!(symbol = %s.symbol, "dropping asset with no parseable observations");
            continue;
        }
        let mut by_date = BTreeMap::new();
        for (date, value) in observations {
            if by_date.insert(date, value).is_some() {
                debug!(symbol = %s.symbol, %date, "duplicate date, keeping later observation");
            }
            all_dates.insert(date);
        }
        per_asset.push((s.symbol, by_date));
    }

    if per_asset.is_empty() {
        return Err(PanelError::EmptyPanel);
    }

    let dates: Vec<Date> = all_dates.into_iter().collect();
    let columns = per_asset
        .into_iter()
        .map(|(symbol, by_date)| {
            let values = dates.iter().map(|d| by_date.get(d).copied()).collect();
            (symbol, values)
        })
        .collect();

    WidePanel::from_parts(&dates, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn union_alignment_introduces_missing_cells() {
        let panel = align_asset_series(vec![
            AssetSeries::new("aapl", vec![(ymd(2024, 1, 2), 100.0), (ymd(2024, 1, 3), 101.0)]),
            AssetSeries::new("msft", vec![(ymd(2024, 1, 3), 300.0), (ymd(2024, 1, 4), 301.0)]),
        ])
        .unwrap();

        assert_eq!(panel.dates(), &[ymd(2024, 1, 2), ymd(2024, 1, 3), ymd(2024, 1, 4)]);
        assert_eq!(panel.column_values("AAPL").unwrap(), vec![Some(100.0), Some(101.0), None]);
        assert_eq!(panel.column_values("MSFT").unwrap(), vec![None, Some(300.0), Some(301.0)]);
    }

    #[test]
    fn unparseable_asset_dropped_not_fatal() {
        let panel = align_asset_series(vec![
            AssetSeries::new("good", vec![(ymd(2024, 1, 2), 1.0)]),
            AssetSeries::new("bad", vec![(ymd(2024, 1, 2), f64::NAN)]),
        ])
        .unwrap();
        assert_eq!(panel.symbols(), &["GOOD".to_string()]);
    }

    #[test]
    fn all_unparseable_is_an_error() {
        let err = align_asset_series(vec![AssetSeries::new(
            "bad",
            vec![(ymd(2024, 1, 2), f64::NAN)],
        )])
        .unwrap_err();
        assert!(matches!(err, PanelError::EmptyPanel));

        assert!(matches!(align_asset_series(vec![]), Err(PanelError::EmptyPanel)));
    }

    #[test]
    fn duplicate_date_keeps_later_observation() {
        let panel = align_asset_series(vec![AssetSeries::new(
            "a",
            vec![(ymd(2024, 1, 2), 1.0), (ymd(2024, 1, 2), 2.0)],
        )])
        .unwrap();
        assert_eq!(panel.column_values("A").unwrap(), vec![Some(2.0)]);
    }
}
