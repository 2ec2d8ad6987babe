//! Error types shared by the reader, loader and statistics engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::Field;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no usable `{attribute}` readings in the dataset")]
    EmptyDataset { attribute: &'static str },

    #[error("malformed `{field}` value {value:?} on {}", .date.as_deref().unwrap_or("an undated row"))]
    MalformedValue {
        field: Field,
        value: String,
        date: Option<String>,
    },

    #[error("no weather data for {period}")]
    NoData { period: String },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, WeatherError>;
