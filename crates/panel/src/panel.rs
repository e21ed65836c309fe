//! Wide date-by-asset panel.

use std::collections::HashSet;
use std::path::Path;

use polars::prelude::*;
use ronda_primitives::{Date, Symbol};

use crate::PanelError;

/// Days between 0001-01-01 (chrono's CE epoch) and 1970-01-01 (polars' date epoch).
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Convert a calendar date to polars' physical date representation.
#[must_use]
pub fn date_to_days(date: Date) -> i32 {
    use chrono::Datelike;
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Convert polars' physical date representation back to a calendar date.
#[must_use]
pub fn days_to_date(days: i32) -> Option<Date> {
    Date::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

/// A 2-D table: rows are trading dates (strictly increasing, unique),
/// columns are upper-cased asset symbols in ascending order, cells are
/// `f64` observations or missing (null).
///
/// The column set and date axis are fixed at construction; every transform
/// produces a new panel. Non-finite cells are normalized to null on entry so
/// that missingness is always explicit.
#[derive(Debug, Clone)]
pub struct WidePanel {
    df: DataFrame,
    symbols: Vec<String>,
    dates: Vec<Date>,
}

impl WidePanel {
    /// Validate a raw frame into a panel.
    ///
    /// The frame must carry a `date` column of dtype `Date`; every other
    /// column is cast to `Float64`, renamed to its upper-cased symbol,
    /// and reordered into ascending symbol order.
    ///
    /// # Errors
    /// Fails on a missing/untyped date column, a non-strictly-increasing
    /// date axis, or symbol collisions after upper-casing.
    pub fn new(df: DataFrame) -> Result<Self, PanelError> {
        let date_col =
            df.column("date").map_err(|_| PanelError::MissingColumn("date".to_string()))?;
        if date_col.dtype() != &DataType::Date {
            return Err(PanelError::BadDtype {
                column: "date".to_string(),
                dtype: date_col.dtype().to_string(),
                expected: DataType::Date.to_string(),
            });
        }

        let dates = extract_dates(date_col)?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut assets: Vec<(String, Column)> =
            Vec::with_capacity(df.width().saturating_sub(1));
        for name in df.get_column_names() {
            if name.as_str() == "date" {
                continue;
            }
            let upper = name.to_uppercase();
            if !seen.insert(upper.clone()) {
                return Err(PanelError::DuplicateSymbol(upper));
            }
            let mut column = df.column(name)?.cast(&DataType::Float64)?;
            column.rename(upper.clone().into());
            assets.push((upper, column));
        }
        // Canonical column order: ascending symbols, regardless of supply
        // order, so panels built from different sources always align.
        assets.sort_by(|a, b| a.0.cmp(&b.0));

        let mut symbols = Vec::with_capacity(assets.len());
        let mut columns: Vec<Column> = vec![date_col.clone()];
        for (upper, column) in assets {
            symbols.push(upper);
            columns.push(column);
        }

        // Non-finite observations become explicit missing values.
        let exprs: Vec<Expr> =
            symbols.iter().map(|s| col(s.as_str()).fill_nan(lit(NULL)).alias(s.as_str())).collect();
        let mut df = DataFrame::new(columns)?;
        if !exprs.is_empty() {
            df = df.lazy().with_columns(exprs).collect()?;
        }

        Ok(Self { df, symbols, dates })
    }

    /// Build a panel from a date axis and per-symbol value columns.
    ///
    /// # Errors
    /// Fails when a column's length differs from the date axis, or on any
    /// `new` validation failure.
    pub fn from_parts(
        dates: &[Date],
        columns: Vec<(Symbol, Vec<Option<f64>>)>,
    ) -> Result<Self, PanelError> {
        let days: Vec<i32> = dates.iter().map(|d| date_to_days(*d)).collect();
        let date_col: Column = Series::new("date".into(), days).cast(&DataType::Date)?.into();

        let mut frame_cols = vec![date_col];
        for (symbol, values) in columns {
            if values.len() != dates.len() {
                return Err(PanelError::LengthMismatch {
                    symbol: symbol.to_string(),
                    expected: dates.len(),
                    actual: values.len(),
                });
            }
            let clean: Vec<Option<f64>> =
                values.into_iter().map(|v| v.filter(|x| x.is_finite())).collect();
            frame_cols.push(Column::new(symbol.as_str().into(), clean));
        }

        Self::new(DataFrame::new(frame_cols)?)
    }

    /// The underlying frame (date column plus one `Float64` column per symbol).
    #[must_use]
    pub const fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Consume self and return the underlying frame.
    #[must_use]
    pub fn into_frame(self) -> DataFrame {
        self.df
    }

    /// Number of trading dates.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.dates.len()
    }

    /// Number of asset columns.
    #[must_use]
    pub fn n_assets(&self) -> usize {
        self.symbols.len()
    }

    /// Upper-cased symbols, ascending.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// The date axis, ascending.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Values of one symbol column, aligned to the date axis.
    ///
    /// # Errors
    /// Fails when the symbol is not a column of this panel.
    pub fn column_values(&self, symbol: &str) -> Result<Vec<Option<f64>>, PanelError> {
        let column = self
            .df
            .column(symbol)
            .map_err(|_| PanelError::MissingColumn(symbol.to_string()))?;
        Ok(column.f64()?.into_iter().collect())
    }

    /// Check that `other` shares this panel's date axis exactly.
    ///
    /// # Errors
    /// Returns [`PanelError::Misaligned`] describing the first divergence.
    pub fn ensure_aligned(&self, other: &Self) -> Result<(), PanelError> {
        if self.dates.len() != other.dates.len() {
            return Err(PanelError::Misaligned(format!(
                "left has {} rows, right has {}",
                self.dates.len(),
                other.dates.len()
            )));
        }
        for (row, (a, b)) in self.dates.iter().zip(&other.dates).enumerate() {
            if a != b {
                return Err(PanelError::Misaligned(format!(
                    "row {row}: left date {a}, right date {b}"
                )));
            }
        }
        Ok(())
    }

    /// Missing fraction per symbol column.
    ///
    /// # Errors
    /// Fails when an invariant column is unexpectedly absent.
    pub fn missing_fraction(&self) -> Result<Vec<(String, f64)>, PanelError> {
        let n = self.n_rows();
        let mut out = Vec::with_capacity(self.symbols.len());
        for s in &self.symbols {
            let nulls = self
                .df
                .column(s)
                .map_err(|_| PanelError::MissingColumn(s.clone()))?
                .null_count();
            let frac = if n == 0 { 0.0 } else { nulls as f64 / n as f64 };
            out.push((s.clone(), frac));
        }
        Ok(out)
    }

    /// Drop symbol columns whose missing fraction exceeds `max_missing`,
    /// returning the filtered panel and the dropped symbols.
    ///
    /// # Errors
    /// Fails when the threshold is outside [0, 1].
    pub fn drop_sparse_columns(
        &self,
        max_missing: f64,
    ) -> Result<(Self, Vec<String>), PanelError> {
        if !(0.0..=1.0).contains(&max_missing) {
            return Err(PanelError::InvalidThreshold(max_missing));
        }

        let mut kept: Vec<String> = vec!["date".to_string()];
        let mut dropped = Vec::new();
        for (symbol, frac) in self.missing_fraction()? {
            if frac > max_missing {
                tracing::warn!(%symbol, missing = frac, "dropping sparse column");
                dropped.push(symbol);
            } else {
                kept.push(symbol);
            }
        }

        let filtered = Self::new(self.df.select(kept)?)?;
        Ok((filtered, dropped))
    }

    /// Reshape to long format: one `(date, symbol, <value_name>)` row per cell.
    ///
    /// # Errors
    /// Fails on a panel with no asset columns.
    pub fn to_long(&self, value_name: &str) -> Result<DataFrame, PanelError> {
        if self.symbols.is_empty() {
            return Err(PanelError::EmptyPanel);
        }
        let parts: Vec<LazyFrame> = self
            .symbols
            .iter()
            .map(|s| {
                self.df.clone().lazy().select([
                    col("date"),
                    lit(s.as_str()).alias("symbol"),
                    col(s.as_str()).alias(value_name),
                ])
            })
            .collect();
        Ok(concat(parts, UnionArgs::default())?.collect()?)
    }

    /// Elementwise `self / other` over the symbol intersection. A zero
    /// denominator yields missing, not infinity.
    ///
    /// # Errors
    /// Fails when date axes are misaligned.
    pub fn divide_by(&self, other: &Self) -> Result<Self, PanelError> {
        self.zip_with(other, |a, b| a / b)
    }

    /// Elementwise `self * other` over the symbol intersection.
    ///
    /// # Errors
    /// Fails when date axes are misaligned.
    pub fn multiply_by(&self, other: &Self) -> Result<Self, PanelError> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Elementwise `self - other` over the symbol intersection.
    ///
    /// # Errors
    /// Fails when date axes are misaligned.
    pub fn subtract(&self, other: &Self) -> Result<Self, PanelError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, PanelError> {
        self.ensure_aligned(other)?;
        let mut columns = Vec::new();
        for s in &self.symbols {
            if !other.symbols.iter().any(|o| o == s) {
                continue;
            }
            let a = self.column_values(s)?;
            let b = other.column_values(s)?;
            let merged: Vec<Option<f64>> = a
                .into_iter()
                .zip(b)
                .map(|(x, y)| match (x, y) {
                    (Some(x), Some(y)) => {
                        let v = f(x, y);
                        v.is_finite().then_some(v)
                    }
                    _ => None,
                })
                .collect();
            columns.push((Symbol::new(s), merged));
        }
        Self::from_parts(&self.dates, columns)
    }

    /// Persist the panel as CSV, dates in ISO-8601, full float precision.
    ///
    /// # Errors
    /// Fails on filesystem or serialization errors.
    pub fn write_csv(&self, path: &Path) -> Result<(), PanelError> {
        let mut file = std::fs::File::create(path)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut self.df.clone())?;
        Ok(())
    }
}

fn extract_dates(date_col: &Column) -> Result<Vec<Date>, PanelError> {
    let days = date_col.cast(&DataType::Int32)?;
    let days = days.i32()?;
    let mut dates = Vec::with_capacity(days.len());
    let mut prev: Option<i32> = None;
    for (row, d) in days.into_iter().enumerate() {
        let d = d.ok_or(PanelError::NullDate { row })?;
        if let Some(p) = prev {
            if d <= p {
                return Err(PanelError::NonMonotonicDates { row });
            }
        }
        prev = Some(d);
        dates.push(days_to_date(d).ok_or(PanelError::NullDate { row })?);
    }
    Ok(dates)
}
