//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the cleaned survey table and the dropdown options derived from it.
//! Both are built once at startup and only ever read, so they sit behind a
//! plain `Arc` with no lock.

use std::sync::Arc;

use crate::dashboard::options::FilterOptions;
use crate::survey::SurveyTable;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub survey: Arc<SurveyTable>,
    pub options: Arc<FilterOptions>,
}

impl AppState {
    #[must_use]
    pub fn new(survey: SurveyTable) -> Self {
        let options = FilterOptions::from_table(&survey);
        Self { survey: Arc::new(survey), options: Arc::new(options) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
