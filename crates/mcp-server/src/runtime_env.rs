use screenings_catalog::DataSource;
use std::env;
use std::path::PathBuf;

/// Path of the film data (a JSON document or a directory of `bfi_*.json` documents)
pub const DATA_PATH_ENV: &str = "SCREENINGS_DATA";

/// Load the catalog at startup instead of on the first tool call
pub const PRELOAD_ENV: &str = "SCREENINGS_PRELOAD";

pub const DEFAULT_DATA_PATH: &str = "data/bfi_all_films.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub data_path: PathBuf,
    pub preload: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            preload: false,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            data_path: value(DATA_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            preload: value(PRELOAD_ENV)
                .map(|v| is_truthy(&v))
                .unwrap_or(defaults.preload),
        }
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::from_path(&self.data_path)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
