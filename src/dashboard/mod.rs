//! Dashboard update: filter the survey and recompute the panels.
//!
//! DESIGN
//! ======
//! `update_dashboard` is the whole reactive surface of the page. It takes
//! the two dropdown selections plus what triggered the update and returns
//! everything the page re-renders: the summary, both charts, and the
//! selections the dropdowns should now show.
//!
//! The function is pure over the immutable base table. Dropdown state lives
//! in the browser; a reset simply echoes `all`/`all` back and charts the
//! full table, ignoring whatever selections arrived with it.
//!
//! The "out of N" figure in the summary is the maximum overall rating of
//! the unfiltered table, so it does not move as filters change.

pub mod chart;
pub mod options;
pub mod selection;
pub mod summary;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::survey::columns::OVERALL_COLUMN;
use crate::survey::{RowSubset, SurveyTable};

use chart::{CARE_GROUP, Chart, FACILITY_GROUP, NO_DATA_TITLE};
use selection::{Selection, all_values};
use summary::Summary;

// =============================================================================
// TYPES
// =============================================================================

/// What caused the update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// A dropdown changed.
    #[default]
    Filter,
    /// The reset button was pressed.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardQuery {
    #[serde(default = "all_values")]
    pub facilities: Vec<String>,
    #[serde(default = "all_values")]
    pub sexes: Vec<String>,
    #[serde(default)]
    pub trigger: Trigger,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self { facilities: all_values(), sexes: all_values(), trigger: Trigger::Filter }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: Summary,
    pub care_chart: Chart,
    pub facility_chart: Chart,
    /// Selections the dropdowns should display after this update.
    pub facilities: Vec<String>,
    pub sexes: Vec<String>,
}

// =============================================================================
// FILTER & AGGREGATE
// =============================================================================

/// Rows matching both selections.
#[must_use]
pub fn filter_rows<'a>(table: &'a SurveyTable, facility: &Selection, sex: &Selection) -> RowSubset<'a> {
    table
        .select(|t, row| facility.matches(t.facility(row)))
        .refine(|t, row| sex.matches(t.sex(row)))
}

/// Recompute every dashboard panel for `query`.
#[must_use]
pub fn update_dashboard(table: &SurveyTable, query: &DashboardQuery) -> DashboardView {
    let (facilities, sexes, subset) = match query.trigger {
        Trigger::Reset => (all_values(), all_values(), table.all_rows()),
        Trigger::Filter => {
            let subset = filter_rows(
                table,
                &Selection::from_values(query.facilities.as_slice()),
                &Selection::from_values(query.sexes.as_slice()),
            );
            (query.facilities.clone(), query.sexes.clone(), subset)
        }
    };

    debug!(trigger = ?query.trigger, ?facilities, ?sexes, rows = subset.len(), "dashboard update");

    if subset.is_empty() {
        return DashboardView {
            summary: Summary::no_data(),
            care_chart: Chart::placeholder(NO_DATA_TITLE),
            facility_chart: Chart::placeholder(NO_DATA_TITLE),
            facilities,
            sexes,
        };
    }

    let summary = Summary::stats(subset.len(), subset.mean(OVERALL_COLUMN), table.column_max(OVERALL_COLUMN));

    DashboardView {
        summary,
        care_chart: Chart::group_means(&subset, &CARE_GROUP),
        facility_chart: Chart::group_means(&subset, &FACILITY_GROUP),
        facilities,
        sexes,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
