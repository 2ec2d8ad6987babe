//! Runtime settings read from the environment (and `.env`, via `dotenvy`).
//!
//! | Variable           | Default  | Meaning                                   |
//! |--------------------|----------|-------------------------------------------|
//! | `WEATHER_LOCATION` | `Murree` | Location prefix of the monthly file names |
//! | `LOG_FILE_PATH`    | unset    | Enables the JSON rolling log at this path |

use std::path::PathBuf;

use crate::loader::DEFAULT_LOCATION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub location: String,
    pub log_file_path: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            location: non_empty("WEATHER_LOCATION").unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            log_file_path: non_empty("LOG_FILE_PATH").map(PathBuf::from),
        }
    }

    /// Applies a command-line override on top of the environment.
    pub fn with_location(mut self, location: Option<String>) -> Self {
        if let Some(location) = location {
            self.location = location;
        }
        self
    }
}
