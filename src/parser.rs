//! CSV parser for monthly weather files and the `YYYY/M` period argument.

use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use chrono::Month;
use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Result, WeatherError};
use crate::record::{DailyRecord, Field};

/// Reads one monthly file into [`DailyRecord`]s, in file order.
///
/// A missing file yields an empty list. Short rows keep whatever fields
/// they have; unknown columns are dropped.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be opened or is not
/// valid CSV.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_month_file(path: &Path) -> Result<Vec<DailyRecord>> {
    if !path.is_file() {
        debug!("Monthly file not found, skipping");
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|source| WeatherError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    // Column index for each recognised field present in this file.
    let columns: Vec<(usize, Field)> = rdr
        .headers()?
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| Field::from_header(name).map(|field| (idx, field)))
        .collect();

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let record = DailyRecord::from_fields(
            columns
                .iter()
                .filter_map(|(idx, field)| row.get(*idx).map(|v| (*field, v.to_string()))),
        );
        records.push(record);
    }

    debug!(rows = records.len(), "Monthly file parsed");
    Ok(records)
}

/// A calendar month of a given year, parsed from `YYYY/M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl FromStr for YearMonth {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WeatherError::InvalidArgument(format!("expected YYYY/M, got {s:?}"));

        let (year, month) = s.trim().split_once('/').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| {
            WeatherError::InvalidArgument(format!("month must be between 1 and 12, got {month}"))
        })?;

        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_abbr(self.month), self.year)
    }
}

/// Three-letter English abbreviation, independent of locale.
pub fn month_abbr(month: Month) -> &'static str {
    &month.name()[..3]
}
