use satisfaction_dashboard::config::DashboardConfig;
use satisfaction_dashboard::survey::load::{self, LoadError, LoadedSurvey};
use satisfaction_dashboard::{routes, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = DashboardConfig::from_env();

    // Missing data or columns leave nothing to serve.
    let loaded = match load_configured(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(error = %e, "survey data unavailable");
            std::process::exit(1);
        }
    };
    tracing::info!(
        rows = loaded.table.len(),
        dropped = loaded.report.total_dropped(),
        mapped_columns = loaded.report.columns.iter().filter(|c| c.mapped).count(),
        "survey data cleaned"
    );

    let state = state::AppState::new(loaded.table);
    let app = routes::app(state, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "dashboard listening at http://{addr}/");
    axum::serve(listener, app).await.expect("server failed");
}

fn load_configured(config: &DashboardConfig) -> Result<LoadedSurvey, LoadError> {
    let mapping = config.score_mapping()?;
    load::load_survey(&config.csv_path, &mapping)
}
