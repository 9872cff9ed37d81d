//! Dashboard API routes.

use axum::extract::State;
use axum::response::Json;

use crate::dashboard::options::FilterOptions;
use crate::dashboard::{DashboardQuery, DashboardView, update_dashboard};
use crate::state::AppState;

/// `GET /api/options`: dropdown options for both filters.
pub async fn options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.options.as_ref().clone())
}

/// `POST /api/dashboard`: recompute the summary and charts for the
/// current dropdown selections.
pub async fn update(State(state): State<AppState>, Json(query): Json<DashboardQuery>) -> Json<DashboardView> {
    Json(update_dashboard(&state.survey, &query))
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
