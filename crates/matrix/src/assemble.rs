//! Long-format matrix assembly.

use std::path::Path;

use polars::prelude::*;
use ronda_panel::{WidePanel, days_to_date};
use tracing::info;

use crate::{MatrixError, MatrixReport};

/// Assemble the long-format factor matrix.
///
/// Each wide panel is melted to `(date, symbol, value)` rows and the
/// pieces are inner-joined on `(date, symbol)`. Rows missing any factor
/// score, the price, or the forward return are discarded; the report
/// records how much each column contributed to the discards. The result
/// is sorted by date then symbol, with columns ordered
/// `date, symbol, <factors...>, price, fwd_return`.
///
/// # Errors
/// Fails on an empty factor list, misaligned calendars, or when no
/// complete row survives.
pub fn assemble(
    factors: &[(&'static str, WidePanel)],
    prices: &WidePanel,
    forward: &WidePanel,
) -> Result<(DataFrame, MatrixReport), MatrixError> {
    if factors.is_empty() {
        return Err(MatrixError::InvalidConfig("no factor panels to assemble".into()));
    }
    prices.ensure_aligned(forward)?;

    let mut lf = prices.to_long("price")?.lazy();
    for (name, panel) in factors {
        prices.ensure_aligned(panel)?;
        lf = lf.join(
            panel.to_long(name)?.lazy(),
            [col("date"), col("symbol")],
            [col("date"), col("symbol")],
            JoinArgs::new(JoinType::Inner),
        );
    }
    lf = lf.join(
        forward.to_long("fwd_return")?.lazy(),
        [col("date"), col("symbol")],
        [col("date"), col("symbol")],
        JoinArgs::new(JoinType::Inner),
    );

    let mut order: Vec<Expr> = vec![col("date"), col("symbol")];
    order.extend(factors.iter().map(|(name, _)| col(*name)));
    order.push(col("price"));
    order.push(col("fwd_return"));

    let candidate = lf.select(order).collect()?;
    let candidate_rows = candidate.height();
    let missing_per_column: Vec<(String, usize)> = candidate
        .get_columns()
        .iter()
        .filter(|c| c.name().as_str() != "date" && c.name().as_str() != "symbol")
        .map(|c| (c.name().to_string(), c.null_count()))
        .collect();

    let matrix = candidate
        .lazy()
        .drop_nulls(None)
        .sort(["date", "symbol"], SortMultipleOptions::default())
        .collect()?;
    let kept_rows = matrix.height();
    if kept_rows == 0 {
        return Err(MatrixError::EmptyMatrix);
    }

    let days = matrix.column("date")?.cast(&DataType::Int32)?;
    let days = days.i32()?;
    let report = MatrixReport {
        candidate_rows,
        kept_rows,
        missing_per_column,
        dropped_assets: Vec::new(),
        first_date: days.get(0).and_then(days_to_date),
        last_date: days.get(kept_rows - 1).and_then(days_to_date),
    };
    info!(
        candidate_rows,
        kept_rows,
        discard_fraction = report.discard_fraction(),
        "assembled factor matrix"
    );
    Ok((matrix, report))
}

/// Persist an assembled matrix as CSV, dates in ISO-8601.
///
/// # Errors
/// Fails on filesystem or serialization errors.
pub fn write_matrix_csv(matrix: &DataFrame, path: &Path) -> Result<(), MatrixError> {
    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut matrix.clone())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use ronda_primitives::{Date, Symbol};

    use super::*;

    fn dates(n: usize) -> Vec<Date> {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n).map(|i| start + chrono::Days::new(i as u64)).collect()
    }

    fn panel_of(ds: &[Date], cols: Vec<(&str, Vec<Option<f64>>)>) -> WidePanel {
        WidePanel::from_parts(ds, cols.into_iter().map(|(s, v)| (Symbol::new(s), v)).collect())
            .unwrap()
    }

    #[test]
    fn only_complete_rows_survive() {
        let ds = dates(2);
        let prices = panel_of(&ds, vec![
            ("AAA", vec![Some(10.0), Some(11.0)]),
            ("BBB", vec![Some(20.0), Some(21.0)]),
        ]);
        let factor = panel_of(&ds, vec![
            ("AAA", vec![Some(0.5), None]),
            ("BBB", vec![Some(0.2), Some(0.3)]),
        ]);
        let forward = panel_of(&ds, vec![
            ("AAA", vec![Some(0.01), Some(0.02)]),
            ("BBB", vec![None, Some(0.04)]),
        ]);

        let (matrix, report) = assemble(&[("alpha", factor)], &prices, &forward).unwrap();
        // Candidate grid is 2 dates x 2 assets; two cells drop rows.
        assert_eq!(report.candidate_rows, 4);
        assert_eq!(report.kept_rows, 2);
        assert_eq!(matrix.height(), 2);
        let missing: Vec<usize> =
            report.missing_per_column.iter().map(|(_, n)| *n).collect();
        assert_eq!(report.missing_per_column[0].0, "alpha");
        assert_eq!(missing, vec![1, 0, 1]);
    }

    #[test]
    fn column_order_is_fixed() {
        let ds = dates(1);
        let prices = panel_of(&ds, vec![("AAA", vec![Some(10.0)])]);
        let f1 = panel_of(&ds, vec![("AAA", vec![Some(1.0)])]);
        let f2 = panel_of(&ds, vec![("AAA", vec![Some(2.0)])]);
        let forward = panel_of(&ds, vec![("AAA", vec![Some(0.1)])]);

        let (matrix, _) =
            assemble(&[("momentum", f1), ("value", f2)], &prices, &forward).unwrap();
        let names: Vec<&str> =
            matrix.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["date", "symbol", "momentum", "value", "price", "fwd_return"]);
    }

    #[test]
    fn rows_sorted_by_date_then_symbol() {
        let ds = dates(2);
        let prices = panel_of(&ds, vec![
            ("BBB", vec![Some(20.0), Some(21.0)]),
            ("AAA", vec![Some(10.0), Some(11.0)]),
        ]);
        let factor = panel_of(&ds, vec![
            ("BBB", vec![Some(0.2), Some(0.3)]),
            ("AAA", vec![Some(0.5), Some(0.6)]),
        ]);
        let forward = panel_of(&ds, vec![
            ("BBB", vec![Some(0.03), Some(0.04)]),
            ("AAA", vec![Some(0.01), Some(0.02)]),
        ]);

        let (matrix, _) = assemble(&[("alpha", factor)], &prices, &forward).unwrap();
        let symbols: Vec<String> = matrix
            .column("symbol")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|s| s.unwrap().to_string())
            .collect();
        assert_eq!(symbols, vec!["AAA", "BBB", "AAA", "BBB"]);
    }

    #[test]
    fn all_missing_factor_is_an_error() {
        let ds = dates(1);
        let prices = panel_of(&ds, vec![("AAA", vec![Some(10.0)])]);
        let factor = panel_of(&ds, vec![("AAA", vec![None])]);
        let forward = panel_of(&ds, vec![("AAA", vec![Some(0.1)])]);

        assert!(matches!(
            assemble(&[("alpha", factor)], &prices, &forward),
            Err(MatrixError::EmptyMatrix)
        ));
    }

    #[test]
    fn empty_factor_list_is_rejected() {
        let ds = dates(1);
        let prices = panel_of(&ds, vec![("AAA", vec![Some(10.0)])]);
        let forward = panel_of(&ds, vec![("AAA", vec![Some(0.1)])]);
        assert!(matches!(
            assemble(&[], &prices, &forward),
            Err(MatrixError::InvalidConfig(_))
        ));
    }
}
