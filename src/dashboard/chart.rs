//! Bar chart payloads for the two satisfaction groups.
//!
//! The browser draws whatever `Chart` says; this module only decides the
//! bars, their order, and when to fall back to a placeholder.

use serde::Serialize;

use crate::survey::RowSubset;
use crate::survey::columns::{CARE_COLUMNS, FACILITY_COLUMNS};

pub const NO_DATA_TITLE: &str = "No data to display";
const Y_LABEL: &str = "Average Score";

/// A fixed set of columns charted together.
#[derive(Debug, Clone, Copy)]
pub struct ColumnGroup {
    pub columns: &'static [&'static str],
    pub title: &'static str,
    pub x_label: &'static str,
    pub empty_title: &'static str,
}

pub const CARE_GROUP: ColumnGroup = ColumnGroup {
    columns: &CARE_COLUMNS,
    title: "Average Care Satisfaction Scores",
    x_label: "Aspect of Care",
    empty_title: "No numeric care data to display",
};

pub const FACILITY_GROUP: ColumnGroup = ColumnGroup {
    columns: &FACILITY_COLUMNS,
    title: "Average Facility Satisfaction Scores",
    x_label: "Facility Aspect",
    empty_title: "No numeric facility data to display",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub column: String,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Bars { title: String, x_label: String, y_label: String, bars: Vec<Bar> },
    Placeholder { title: String },
}

impl Chart {
    #[must_use]
    pub fn placeholder(title: &str) -> Self {
        Self::Placeholder { title: title.to_string() }
    }

    /// Mean per column of `group` over `subset`, highest first.
    ///
    /// Columns without any value in the subset are left out. Equal means keep
    /// the group's column order.
    #[must_use]
    pub fn group_means(subset: &RowSubset<'_>, group: &ColumnGroup) -> Self {
        let mut bars: Vec<Bar> = group
            .columns
            .iter()
            .filter_map(|&column| subset.mean(column).map(|mean| Bar { column: column.to_string(), mean }))
            .collect();

        if bars.is_empty() {
            return Self::placeholder(group.empty_title);
        }

        bars.sort_by(|a, b| b.mean.total_cmp(&a.mean));

        Self::Bars {
            title: group.title.to_string(),
            x_label: group.x_label.to_string(),
            y_label: Y_LABEL.to_string(),
            bars,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Bars { title, .. } | Self::Placeholder { title } => title,
        }
    }

    /// Bars in display order; empty for a placeholder.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        match self {
            Self::Bars { bars, .. } => bars,
            Self::Placeholder { .. } => &[],
        }
    }
}
