//! Runtime configuration parsed from environment variables.

use std::path::{Path, PathBuf};

use crate::survey::load::LoadError;
use crate::survey::scores::ScoreMapping;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_CSV_PATH: &str = "data/cleaned/cleaned_patient_survey_data.csv";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub csv_path: PathBuf,
    pub mapping_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl DashboardConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SURVEY_CSV_PATH`: survey export, default under the crate root
    /// - `SCORE_MAPPING_PATH`: JSON `label -> score` replacing the built-in labels
    /// - `HOST`: default `127.0.0.1`
    /// - `PORT`: default 8050
    /// - `STATIC_DIR`: page assets, default `static/` under the crate root
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            csv_path: env_path("SURVEY_CSV_PATH").unwrap_or_else(|| crate_relative(DEFAULT_CSV_PATH)),
            mapping_path: env_path("SCORE_MAPPING_PATH"),
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env_parse("PORT", DEFAULT_PORT),
            static_dir: env_path("STATIC_DIR").unwrap_or_else(|| crate_relative(DEFAULT_STATIC_DIR)),
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The label mapping to clean with: the override file when configured,
    /// otherwise the built-in labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the override file cannot be read or parsed.
    pub fn score_mapping(&self) -> Result<ScoreMapping, LoadError> {
        match &self.mapping_path {
            Some(path) => ScoreMapping::from_json_file(path)
                .map_err(|source| LoadError::Mapping { path: path.clone(), source }),
            None => Ok(ScoreMapping::default()),
        }
    }
}

fn crate_relative(path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
