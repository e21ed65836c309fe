//! Completeness reporting for the assembled matrix.

use ronda_primitives::Date;

/// What the assembler kept and what it discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixReport {
    /// Candidate rows before the completeness filter (full date-asset grid).
    pub candidate_rows: usize,
    /// Complete rows kept in the final matrix.
    pub kept_rows: usize,
    /// Missing-cell count per column, measured over the candidate grid.
    pub missing_per_column: Vec<(String, usize)>,
    /// Asset columns dropped by the sparsity filter before assembly.
    pub dropped_assets: Vec<String>,
    /// First date in the final matrix.
    pub first_date: Option<Date>,
    /// Last date in the final matrix.
    pub last_date: Option<Date>,
}

impl MatrixReport {
    /// Fraction of candidate rows discarded by the completeness filter.
    #[must_use]
    pub fn discard_fraction(&self) -> f64 {
        if self.candidate_rows == 0 {
            return 0.0;
        }
        1.0 - self.kept_rows as f64 / self.candidate_rows as f64
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn discard_fraction_handles_empty_grid() {
        let report = MatrixReport {
            candidate_rows: 0,
            kept_rows: 0,
            missing_per_column: vec![],
            dropped_assets: vec![],
            first_date: None,
            last_date: None,
        };
        assert_relative_eq!(report.discard_fraction(), 0.0);
    }

    #[test]
    fn discard_fraction_ratio() {
        let report = MatrixReport {
            candidate_rows: 100,
            kept_rows: 75,
            missing_per_column: vec![("momentum".into(), 25)],
            dropped_assets: vec![],
            first_date: None,
            last_date: None,
        };
        assert_relative_eq!(report.discard_fraction(), 0.25);
    }
}
