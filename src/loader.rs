//! Resolves a year (and optional month) to monthly files and loads them.

use std::path::PathBuf;

use chrono::Month;
use tracing::{debug, info};

use crate::error::Result;
use crate::parser::{month_abbr, read_month_file};
use crate::record::DailyRecord;

pub const DEFAULT_LOCATION: &str = "Murree";

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Loads daily records from a directory of `<Location>_weather_<year>_<Mon>.txt` files.
#[derive(Debug, Clone)]
pub struct WeatherLoader {
    directory: PathBuf,
    location: String,
}

impl WeatherLoader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_location(directory, DEFAULT_LOCATION)
    }

    pub fn with_location(directory: impl Into<PathBuf>, location: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            location: location.into(),
        }
    }

    pub fn file_path(&self, year: i32, month: Month) -> PathBuf {
        self.directory.join(format!(
            "{}_weather_{}_{}.txt",
            self.location,
            year,
            month_abbr(month)
        ))
    }

    /// Loads one month, or the whole year in calendar order when `month` is `None`.
    ///
    /// Months without a file contribute no records.
    #[tracing::instrument(skip(self), fields(location = %self.location))]
    pub fn load(&self, year: i32, month: Option<Month>) -> Result<Vec<DailyRecord>> {
        let records = match month {
            Some(month) => read_month_file(&self.file_path(year, month))?,
            None => {
                let mut records = Vec::new();
                for month in MONTHS {
                    let mut month_records = read_month_file(&self.file_path(year, month))?;
                    debug!(month = month.name(), rows = month_records.len(), "Month loaded");
                    records.append(&mut month_records);
                }
                records
            }
        };

        info!(rows = records.len(), "Weather records loaded");
        Ok(records)
    }
}

/// Records of `records` whose date falls in `month`, in their original order.
pub fn records_in_month(records: &[DailyRecord], month: Month) -> Vec<DailyRecord> {
    records
        .iter()
        .filter(|record| record.month() == Some(month))
        .cloned()
        .collect()
}
