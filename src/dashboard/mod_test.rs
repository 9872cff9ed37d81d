use super::summary::NO_DATA_MESSAGE;
use super::*;
use crate::survey::columns::{CARE_COLUMNS, FACILITY_COLUMNS};
use crate::survey::test_helpers::{csv, row, sample_table, table_from_csv};

fn query(facilities: &[&str], sexes: &[&str]) -> DashboardQuery {
    DashboardQuery {
        facilities: facilities.iter().map(|s| (*s).to_string()).collect(),
        sexes: sexes.iter().map(|s| (*s).to_string()).collect(),
        trigger: Trigger::Filter,
    }
}

// =============================================================================
// FILTERING
// =============================================================================

#[test]
fn single_facility_and_sex_selects_one_row() {
    let table = sample_table();
    let view = update_dashboard(&table, &query(&["A"], &["M"]));

    assert_eq!(view.summary.respondents, 1);
    assert_eq!(
        view.summary.text(),
        "Number of Respondents: 1\nAverage Overall Satisfaction: 3.00 (out of 3)"
    );
}

#[test]
fn unknown_facility_yields_no_data() {
    let table = sample_table();
    let view = update_dashboard(&table, &query(&["Nowhere"], &["all"]));

    assert!(view.summary.is_no_data());
    assert_eq!(view.summary.text(), NO_DATA_MESSAGE);
    assert!(view.care_chart.is_placeholder());
    assert!(view.facility_chart.is_placeholder());
    assert_eq!(view.care_chart.title(), "No data to display");
    assert_eq!(view.facility_chart.title(), "No data to display");
}

#[test]
fn no_data_echoes_selections() {
    let table = sample_table();
    let view = update_dashboard(&table, &query(&["Nowhere"], &["F"]));
    assert_eq!(view.facilities, vec!["Nowhere"]);
    assert_eq!(view.sexes, vec!["F"]);
}

#[test]
fn all_sentinel_equals_union_of_every_value() {
    let table = sample_table();
    let facilities = table.distinct_facilities();
    let sexes = table.distinct_sexes();

    let everything = filter_rows(&table, &Selection::All, &Selection::All);
    let union = filter_rows(
        &table,
        &Selection::from_values(facilities.as_slice()),
        &Selection::from_values(sexes.as_slice()),
    );
    assert_eq!(everything.rows(), union.rows());
    assert_eq!(everything.len(), table.len());
}

#[test]
fn filters_commute() {
    let table = sample_table();
    let facility = Selection::from_values(&["B"]);
    let sex = Selection::from_values(&["F", "M"]);

    let facility_first = filter_rows(&table, &facility, &sex);
    let sex_first = table
        .select(|t, r| sex.matches(t.sex(r)))
        .refine(|t, r| facility.matches(t.facility(r)));
    assert_eq!(facility_first.rows(), sex_first.rows());
    assert_eq!(facility_first.rows(), &[2, 3]);
}

#[test]
fn empty_selection_does_not_restrict() {
    let table = sample_table();
    let view = update_dashboard(&table, &query(&[], &[]));
    assert_eq!(view.summary.respondents, 4);
}

#[test]
fn missing_filter_values_only_pass_all() {
    let table = table_from_csv(&csv(&[row("A", "M", "1", "1", "1"), row("", "M", "1", "1", "1")]));
    assert_eq!(update_dashboard(&table, &query(&["all"], &["M"])).summary.respondents, 2);
    assert_eq!(update_dashboard(&table, &query(&["A"], &["M"])).summary.respondents, 1);
}

#[test]
fn filtering_does_not_mutate_table() {
    let table = sample_table();
    let before = table.clone();
    let _ = update_dashboard(&table, &query(&["B"], &["F"]));
    assert_eq!(table, before);
}

// =============================================================================
// SUMMARY
// =============================================================================

#[test]
fn denominator_comes_from_unfiltered_table() {
    let table = sample_table();
    // Row 2 is the only B/M respondent and rated overall 1.
    let view = update_dashboard(&table, &query(&["B"], &["M"]));
    assert_eq!(view.summary.max_score, Some(3.0));
    assert_eq!(
        view.summary.text(),
        "Number of Respondents: 1\nAverage Overall Satisfaction: 1.00 (out of 3)"
    );
}

#[test]
fn summary_mean_over_full_table() {
    let table = sample_table();
    let view = update_dashboard(&table, &DashboardQuery::default());
    assert_eq!(view.summary.respondents, 4);
    assert_eq!(view.summary.lines[1].value, "2.25 (out of 3)");
}

#[test]
fn summary_without_overall_ratings_shows_not_available() {
    let table = table_from_csv(&csv(&[row("A", "M", "2", "", "1")]));
    let view = update_dashboard(&table, &DashboardQuery::default());
    assert_eq!(view.summary.respondents, 1);
    assert_eq!(view.summary.lines[1].value, "N/A (out of N/A)");
}

#[test]
fn fractional_max_is_shown_as_is() {
    let table = table_from_csv(&csv(&[row("A", "M", "2", "2.5", "1"), row("A", "F", "2", "1.5", "1")]));
    let view = update_dashboard(&table, &query(&["A"], &["F"]));
    assert_eq!(view.summary.lines[1].value, "1.50 (out of 2.5)");
}

// =============================================================================
// CHARTS
// =============================================================================

#[test]
fn care_chart_sorted_descending_with_stable_ties() {
    let table = sample_table();
    let view = update_dashboard(&table, &query(&["A"], &["M"]));

    let bars = view.care_chart.bars();
    assert_eq!(bars.len(), CARE_COLUMNS.len());
    assert_eq!(bars[0].column, OVERALL_COLUMN);
    assert!((bars[0].mean - 3.0).abs() < f64::EPSILON);

    // The remaining care columns all average 2 and keep their input order.
    let rest: Vec<&str> = bars[1..].iter().map(|b| b.column.as_str()).collect();
    assert_eq!(rest, CARE_COLUMNS[..CARE_COLUMNS.len() - 1].to_vec());
}

#[test]
fn facility_chart_uses_mapped_scores() {
    let table = sample_table();
    let view = update_dashboard(&table, &DashboardQuery::default());

    let Chart::Bars { title, x_label, y_label, bars } = &view.facility_chart else {
        panic!("expected bars");
    };
    assert_eq!(title, "Average Facility Satisfaction Scores");
    assert_eq!(x_label, "Facility Aspect");
    assert_eq!(y_label, "Average Score");
    // Excellent, Good, Poor, Fair -> 3, 2, 0, 1.
    assert!(bars.iter().all(|b| (b.mean - 1.5).abs() < 1e-9));
    let order: Vec<&str> = bars.iter().map(|b| b.column.as_str()).collect();
    assert_eq!(order, FACILITY_COLUMNS.to_vec());
}

#[test]
fn chart_omits_columns_without_values() {
    let table = sample_table();
    // Row 3 has only the overall care rating.
    let view = update_dashboard(&table, &query(&["B"], &["F"]));
    let bars = view.care_chart.bars();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].column, OVERALL_COLUMN);
}

#[test]
fn group_without_numeric_data_is_placeholder() {
    let table = table_from_csv(&csv(&[row("A", "M", "2", "3", "")]));
    let view = update_dashboard(&table, &DashboardQuery::default());
    assert!(!view.care_chart.is_placeholder());
    assert!(view.facility_chart.is_placeholder());
    assert_eq!(view.facility_chart.title(), "No numeric facility data to display");
}

// =============================================================================
// RESET
// =============================================================================

#[test]
fn reset_overrides_pending_selections() {
    let table = sample_table();
    let mut reset = query(&["Nowhere"], &["F"]);
    reset.trigger = Trigger::Reset;

    let view = update_dashboard(&table, &reset);
    assert_eq!(view, update_dashboard(&table, &query(&["all"], &["all"])));
    assert_eq!(view.facilities, vec!["all"]);
    assert_eq!(view.sexes, vec!["all"]);
    assert_eq!(view.summary.respondents, 4);
}

#[test]
fn reset_matches_manual_all_for_any_selection() {
    let table = sample_table();
    let manual = update_dashboard(&table, &DashboardQuery::default());
    for (facilities, sexes) in [
        (&["A"][..], &["M"][..]),
        (&["B"][..], &[][..]),
        (&["all"][..], &["F", "M"][..]),
    ] {
        let mut q = query(facilities, sexes);
        q.trigger = Trigger::Reset;
        assert_eq!(update_dashboard(&table, &q), manual);
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[test]
fn query_defaults_when_fields_absent() {
    let q: DashboardQuery = serde_json::from_str("{}").unwrap();
    assert_eq!(q, DashboardQuery::default());
}

#[test]
fn query_parses_reset_trigger() {
    let q: DashboardQuery = serde_json::from_str(r#"{"facilities":["A"],"trigger":"reset"}"#).unwrap();
    assert_eq!(q.trigger, Trigger::Reset);
    assert_eq!(q.facilities, vec!["A"]);
    assert_eq!(q.sexes, vec!["all"]);
}

#[test]
fn view_serializes_chart_kinds() {
    let table = sample_table();
    let view = update_dashboard(&table, &query(&["Nowhere"], &["all"]));
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["care_chart"]["kind"], "placeholder");
    assert_eq!(json["summary"]["lines"][0]["value"], NO_DATA_MESSAGE);

    let view = update_dashboard(&table, &DashboardQuery::default());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["care_chart"]["kind"], "bars");
    assert_eq!(json["care_chart"]["bars"].as_array().map(Vec::len), Some(CARE_COLUMNS.len()));
}

#[test]
fn all_zero_overall_ratings_have_no_scale() {
    let table = table_from_csv(&csv(&[row("A", "M", "Poor", "0", "1")]));
    let view = update_dashboard(&table, &DashboardQuery::default());
    assert_eq!(
        view.summary.text(),
        "Number of Respondents: 1\nAverage Overall Satisfaction: 0.00 (out of N/A)"
    );
}
