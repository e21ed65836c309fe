//! Forward log returns.

use polars::prelude::*;
use ronda_panel::WidePanel;

use crate::MatrixError;

/// N-day-ahead log return: `ln P(t+horizon) - ln P(t)` at row `t`.
///
/// The last `horizon` rows of each column are missing, as is any row
/// where either endpoint price is missing or non-positive. This is the
/// supervised target, not a feature, so it looks forward by design.
///
/// # Errors
/// Returns `MatrixError::InvalidConfig` for a zero horizon.
pub fn forward_log_returns(prices: &WidePanel, horizon: usize) -> Result<WidePanel, MatrixError> {
    if horizon == 0 {
        return Err(MatrixError::InvalidConfig("forward horizon must be positive".into()));
    }
    let horizon = horizon as i64;

    let mut exprs: Vec<Expr> = Vec::with_capacity(prices.n_assets() + 1);
    exprs.push(col("date"));
    for symbol in prices.symbols() {
        let log_price = col(symbol.as_str()).log(std::f64::consts::E);
        exprs.push(
            (log_price.clone().shift(lit(-horizon)) - log_price)
                .fill_nan(lit(NULL))
                .alias(symbol.as_str()),
        );
    }
    let df = prices.frame().clone().lazy().select(exprs).collect()?;
    Ok(WidePanel::new(df)?)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ronda_primitives::{Date, Symbol};

    use super::*;

    fn panel(prices: Vec<Option<f64>>) -> WidePanel {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let dates: Vec<Date> =
            (0..prices.len()).map(|i| start + chrono::Days::new(i as u64)).collect();
        WidePanel::from_parts(&dates, vec![(Symbol::new("AAA"), prices)]).unwrap()
    }

    #[test]
    fn forward_return_looks_ahead() {
        let p = panel(vec![Some(100.0), Some(110.0), Some(121.0), Some(133.1)]);
        let fwd = forward_log_returns(&p, 1).unwrap();
        let col = fwd.column_values("AAA").unwrap();
        assert_relative_eq!(col[0].unwrap(), (110.0f64 / 100.0).ln(), epsilon = 1e-12);
        assert_relative_eq!(col[2].unwrap(), (133.1f64 / 121.0).ln(), epsilon = 1e-12);
        assert_eq!(col[3], None);
    }

    #[test]
    fn tail_rows_are_missing() {
        let p = panel((0..10).map(|i| Some(100.0 + f64::from(i))).collect());
        let fwd = forward_log_returns(&p, 3).unwrap();
        let col = fwd.column_values("AAA").unwrap();
        assert!(col[..7].iter().all(Option::is_some));
        assert!(col[7..].iter().all(Option::is_none));
    }

    #[test]
    fn missing_endpoint_is_missing() {
        let p = panel(vec![Some(100.0), None, Some(121.0)]);
        let fwd = forward_log_returns(&p, 1).unwrap();
        let col = fwd.column_values("AAA").unwrap();
        assert_eq!(col[0], None);
        assert!(col[1].is_none());
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let p = panel(vec![Some(100.0), Some(101.0)]);
        assert!(matches!(
            forward_log_returns(&p, 0),
            Err(MatrixError::InvalidConfig(_))
        ));
    }
}
