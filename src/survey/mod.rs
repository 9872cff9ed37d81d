//! Survey table: the immutable, cleaned respondent data.
//!
//! DESIGN
//! ======
//! The table is stored column-wise: two optional string columns for the
//! filter attributes and one `Option<f64>` vector per satisfaction column.
//! It is built once by the loader and never mutated afterwards. Filtering
//! produces a `RowSubset`, a borrowed list of row indices, so every request
//! derives its own view without copying or touching the base table.

pub mod columns;
pub mod load;
pub mod scores;

use std::collections::BTreeSet;

// =============================================================================
// TABLE
// =============================================================================

/// One cleaned satisfaction column. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyTable {
    facilities: Vec<Option<String>>,
    sexes: Vec<Option<String>>,
    columns: Vec<ScoreColumn>,
}

impl SurveyTable {
    /// Assemble a table from already-cleaned columns.
    ///
    /// Every column must have one entry per respondent; shorter columns read
    /// as missing past their end.
    #[must_use]
    pub fn new(facilities: Vec<Option<String>>, sexes: Vec<Option<String>>, columns: Vec<ScoreColumn>) -> Self {
        Self { facilities, sexes, columns }
    }

    /// Number of respondents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ScoreColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn columns(&self) -> &[ScoreColumn] {
        &self.columns
    }

    #[must_use]
    pub fn facility(&self, row: usize) -> Option<&str> {
        self.facilities.get(row).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn sex(&self, row: usize) -> Option<&str> {
        self.sexes.get(row).and_then(Option::as_deref)
    }

    /// Distinct non-missing facility names, sorted ascending.
    #[must_use]
    pub fn distinct_facilities(&self) -> Vec<String> {
        distinct_sorted(&self.facilities)
    }

    /// Distinct non-missing sex values, sorted ascending.
    #[must_use]
    pub fn distinct_sexes(&self) -> Vec<String> {
        distinct_sorted(&self.sexes)
    }

    /// Largest non-missing value of `column` over the whole table.
    #[must_use]
    pub fn column_max(&self, column: &str) -> Option<f64> {
        self.column(column)?
            .values
            .iter()
            .flatten()
            .copied()
            .reduce(f64::max)
    }

    /// View over every row.
    #[must_use]
    pub fn all_rows(&self) -> RowSubset<'_> {
        RowSubset { table: self, rows: (0..self.len()).collect() }
    }

    /// View over the rows for which `keep` returns true.
    pub fn select<F>(&self, keep: F) -> RowSubset<'_>
    where
        F: Fn(&SurveyTable, usize) -> bool,
    {
        self.all_rows().refine(keep)
    }
}

fn distinct_sorted(values: &[Option<String>]) -> Vec<String> {
    values
        .iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// =============================================================================
// ROW SUBSET
// =============================================================================

/// Read-only view of a subset of rows, in table order.
#[derive(Debug, Clone)]
pub struct RowSubset<'a> {
    table: &'a SurveyTable,
    rows: Vec<usize>,
}

impl RowSubset<'_> {
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Narrow the view further. Row order is preserved.
    #[must_use]
    pub fn refine<F>(self, keep: F) -> Self
    where
        F: Fn(&SurveyTable, usize) -> bool,
    {
        let table = self.table;
        let rows = self.rows.into_iter().filter(|&row| keep(table, row)).collect();
        Self { table, rows }
    }

    /// Arithmetic mean of the non-missing values of `column` in this view.
    ///
    /// `None` when the column is unknown or has no values in the view.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self, column: &str) -> Option<f64> {
        let values = &self.table.column(column)?.values;
        // Running mean; a plain sum overflows near f64::MAX.
        let (mean, count) = self
            .rows
            .iter()
            .filter_map(|&row| values.get(row).copied().flatten())
            .fold((0.0_f64, 0_usize), |(mean, count), v| {
                let count = count + 1;
                (mean + (v - mean) / count as f64, count)
            });

        (count > 0).then_some(mean)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
