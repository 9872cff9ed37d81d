//! Survey CSV loader and cleaner.
//!
//! DESIGN
//! ======
//! Loading runs once at startup. The header row is checked against the
//! fixed required-column list before any record is read; a missing file or
//! column is returned as an error and treated as fatal by `main`.
//!
//! Each satisfaction column is then cleaned independently:
//! - if every present cell already parses as a number, it is parsed as-is;
//! - otherwise known labels are replaced by their score and everything else
//!   is coerced to a number, with unparseable residue becoming missing.
//!
//! ERROR HANDLING
//! ==============
//! Values dropped to missing are not errors. They are counted per column,
//! logged at `warn`, and returned in the `CleaningReport`.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::columns::{self, FACILITY_COLUMN, SEX_COLUMN};
use super::scores::{MappingError, ScoreMapping};
use super::{ScoreColumn, SurveyTable};

/// Cell values read as missing regardless of column.
const MISSING_TOKENS: [&str; 9] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "#N/A", "None"];

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("survey file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read survey csv {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("required columns missing from survey data: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("failed to load score mapping {}: {source}", path.display())]
    Mapping { path: PathBuf, source: MappingError },
}

/// What cleaning did to one satisfaction column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    pub column: String,
    /// True when the column held text and went through the label mapping.
    pub mapped: bool,
    /// Present cells that could not be mapped or parsed.
    pub dropped: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub columns: Vec<ColumnReport>,
}

impl CleaningReport {
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|c| c.column == name)
    }

    /// Total number of cells dropped to missing across all columns.
    #[must_use]
    pub fn total_dropped(&self) -> usize {
        self.columns.iter().map(|c| c.dropped).sum()
    }
}

#[derive(Debug, Clone)]
pub struct LoadedSurvey {
    pub table: SurveyTable,
    pub report: CleaningReport,
}

// =============================================================================
// LOADING
// =============================================================================

/// Load and clean the survey CSV at `path`.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be parsed as CSV, or
/// lacks any required column.
pub fn load_survey(path: &Path, mapping: &ScoreMapping) -> Result<LoadedSurvey, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound { path: path.to_path_buf() });
    }

    let file = std::fs::File::open(path).map_err(|e| LoadError::Csv { path: path.to_path_buf(), source: e.into() })?;
    let loaded = load_survey_from_reader(file, path, mapping)?;

    info!(path = %path.display(), rows = loaded.table.len(), "survey data loaded");
    Ok(loaded)
}

/// Load and clean survey CSV from any reader. `source` names the input in
/// errors and logs.
///
/// # Errors
///
/// Returns an error if the input cannot be parsed as CSV or lacks any
/// required column.
pub fn load_survey_from_reader<R: Read>(
    reader: R,
    source: &Path,
    mapping: &ScoreMapping,
) -> Result<LoadedSurvey, LoadError> {
    let csv_err = |e: csv::Error| LoadError::Csv { path: source.to_path_buf(), source: e };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let missing: Vec<String> = columns::required_columns()
        .filter(|name| !headers.iter().any(|h| h == name))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns { missing });
    }

    let index_of = |name: &str| headers.iter().position(|h| h == name);
    let required: Vec<(&'static str, Option<usize>)> =
        columns::required_columns().map(|name| (name, index_of(name))).collect();

    let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); required.len()];
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        for ((_, idx), cells) in required.iter().zip(raw.iter_mut()) {
            cells.push(idx.and_then(|i| record.get(i)).and_then(present));
        }
    }

    let mut by_name: Vec<(&'static str, Vec<Option<String>>)> =
        required.iter().map(|(name, _)| *name).zip(raw).collect();
    let mut take = |name: &str| {
        by_name
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, cells)| std::mem::take(cells))
            .unwrap_or_default()
    };

    let facilities = take(FACILITY_COLUMN);
    let sexes = take(SEX_COLUMN);

    let mut report = CleaningReport::default();
    let mut score_columns = Vec::new();
    for name in columns::satisfaction_columns() {
        let (values, column_report) = clean_column(name, &take(name), mapping);
        score_columns.push(ScoreColumn { name: name.to_string(), values });
        report.columns.push(column_report);
    }

    Ok(LoadedSurvey { table: SurveyTable::new(facilities, sexes, score_columns), report })
}

// =============================================================================
// CLEANING
// =============================================================================

/// Convert one raw column to scores.
pub fn clean_column(name: &str, cells: &[Option<String>], mapping: &ScoreMapping) -> (Vec<Option<f64>>, ColumnReport) {
    let already_numeric = cells.iter().flatten().all(|cell| parse_number(cell).is_some());

    if already_numeric {
        let values = cells.iter().map(|cell| cell.as_deref().and_then(parse_number)).collect();
        return (values, ColumnReport { column: name.to_string(), mapped: false, dropped: 0 });
    }

    info!(column = name, "mapping column");

    #[allow(clippy::cast_precision_loss)]
    let values: Vec<Option<f64>> = cells
        .iter()
        .map(|cell| {
            let cell = cell.as_deref()?;
            mapping
                .score(cell)
                .map(|score| score as f64)
                .or_else(|| parse_number(cell))
        })
        .collect();

    let dropped = cells
        .iter()
        .zip(&values)
        .filter(|(cell, value)| cell.is_some() && value.is_none())
        .count();
    if dropped > 0 {
        warn!(column = name, dropped, "values could not be mapped and became missing");
    }

    (values, ColumnReport { column: name.to_string(), mapped: true, dropped })
}

/// Parse a cell as a finite number.
#[must_use]
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalize a raw cell, mapping missing-value tokens to `None`.
fn present(cell: &str) -> Option<String> {
    let cell = cell.trim();
    if MISSING_TOKENS.contains(&cell) { None } else { Some(cell.to_string()) }
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;
