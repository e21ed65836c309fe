//! Shared lazy-expression plumbing for per-asset column transforms.

use polars::prelude::*;
use ronda_panel::WidePanel;

use crate::SignalError;

/// Apply the same expression transform to every asset column of a wide
/// panel, keeping the date column. Non-finite results become missing.
pub(crate) fn map_columns(
    panel: &WidePanel,
    f: impl Fn(Expr) -> Expr,
) -> Result<WidePanel, SignalError> {
    let mut exprs: Vec<Expr> = Vec::with_capacity(panel.n_assets() + 1);
    exprs.push(col("date"));
    for symbol in panel.symbols() {
        exprs.push(f(col(symbol.as_str())).fill_nan(lit(NULL)).alias(symbol.as_str()));
    }
    let df = panel.frame().clone().lazy().select(exprs).collect()?;
    Ok(WidePanel::new(df)?)
}
