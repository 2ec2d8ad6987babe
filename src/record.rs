//! In-memory model for one day of observations.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Month, NaiveDate};

use crate::error::{Result, WeatherError};

/// Columns kept from a monthly file. Everything else in the header is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Date column in standard-time files.
    Pkt,
    /// Date column in summer-time files.
    Pkst,
    MaxTemperature,
    MinTemperature,
    MeanHumidity,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Pkt,
        Field::Pkst,
        Field::MaxTemperature,
        Field::MinTemperature,
        Field::MeanHumidity,
    ];

    /// Column name as it appears in the file header.
    pub fn header(self) -> &'static str {
        match self {
            Field::Pkt => "PKT",
            Field::Pkst => "PKST",
            Field::MaxTemperature => "Max TemperatureC",
            Field::MinTemperature => "Min TemperatureC",
            Field::MeanHumidity => "Mean Humidity",
        }
    }

    pub fn from_header(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.header() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One row of a monthly file, reduced to the recognised [`Field`]s.
///
/// Fields missing from the file header are absent; an empty value means the
/// station did not report that reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyRecord {
    fields: BTreeMap<Field, String>,
}

impl DailyRecord {
    pub fn from_fields(fields: impl IntoIterator<Item = (Field, String)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// The `PKT` date, falling back to `PKST`.
    pub fn date(&self) -> Option<&str> {
        self.get(Field::Pkt).or_else(|| self.get(Field::Pkst))
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        self.date()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }

    pub fn month(&self) -> Option<Month> {
        self.naive_date()
            .and_then(|date| Month::try_from(date.month() as u8).ok())
    }

    /// Integer reading for `field`, `None` when absent or empty.
    pub fn reading(&self, field: Field) -> Result<Option<i32>> {
        match self.get(field) {
            None | Some("") => Ok(None),
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| WeatherError::MalformedValue {
                    field,
                    value: value.to_string(),
                    date: self.date().map(str::to_string),
                }),
        }
    }
}
