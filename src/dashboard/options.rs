//! Dropdown option lists.

use serde::Serialize;

use super::selection::ALL;
use crate::survey::SurveyTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    fn from_value(value: String) -> Self {
        Self { label: value.clone(), value }
    }
}

/// Options for the facility and sex dropdowns. Each list starts with the
/// `all` entry, followed by the distinct values in the table, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub facilities: Vec<FilterOption>,
    pub sexes: Vec<FilterOption>,
}

impl FilterOptions {
    #[must_use]
    pub fn from_table(table: &SurveyTable) -> Self {
        Self {
            facilities: with_all("All Facilities", table.distinct_facilities()),
            sexes: with_all("All Sexes", table.distinct_sexes()),
        }
    }
}

fn with_all(all_label: &str, values: Vec<String>) -> Vec<FilterOption> {
    std::iter::once(FilterOption { label: all_label.to_string(), value: ALL.to_string() })
        .chain(values.into_iter().map(FilterOption::from_value))
        .collect()
}
