//! Patient satisfaction dashboard.
//!
//! Loads a survey CSV once, maps the satisfaction ratings to numeric scores,
//! and serves a page whose facility and sex filters drive a summary panel and
//! two bar charts of mean scores.
//!
//! - `survey`: column lists, score mapping, CSV loading and the immutable table
//! - `dashboard`: the filter-and-aggregate update behind every page refresh
//! - `routes`: Axum router over `dashboard`
//! - `config` / `state`: environment configuration and shared handler state

pub mod config;
pub mod dashboard;
pub mod routes;
pub mod state;
pub mod survey;
