//! Fixed survey column names.

pub const FACILITY_COLUMN: &str = "health_facility";
pub const SEX_COLUMN: &str = "respondent_sex";
pub const OVERALL_COLUMN: &str = "overall_satisfaction_rating";

/// Columns the facility and sex dropdowns filter on.
pub const FILTER_COLUMNS: [&str; 2] = [FACILITY_COLUMN, SEX_COLUMN];

/// Ratings of the care received. Includes the overall rating.
pub const CARE_COLUMNS: [&str; 8] = [
    "satisfaction_waiting_time",
    "Time with the health provider",
    "Privacy during examination",
    "Staff attitude",
    "Opening hours of the facility",
    "Quality of the advice and information",
    "satisfaction_procedure_treatment",
    OVERALL_COLUMN,
];

/// Ratings of the physical facility.
pub const FACILITY_COLUMNS: [&str; 6] = [
    "facility_cleanliness_rating",
    "facility_condition_rating",
    "facility_info_displayed_rating",
    "facility_private_talk_spaces_rating",
    "facility_ease_of_movement_rating",
    "facility_waiting_comfort_rating",
];

/// Care columns followed by facility columns, in chart order.
pub fn satisfaction_columns() -> impl Iterator<Item = &'static str> {
    CARE_COLUMNS.iter().chain(FACILITY_COLUMNS.iter()).copied()
}

/// Every column the loader refuses to start without.
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    satisfaction_columns().chain(FILTER_COLUMNS.iter().copied())
}
