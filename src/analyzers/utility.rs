use crate::analyzers::types::Attribute;
use crate::error::{Result, WeatherError};
use crate::record::DailyRecord;

/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64)
}

/// Present readings of `attribute`, in dataset order. Empty and absent values are skipped.
pub fn readings(records: &[DailyRecord], attribute: Attribute) -> Result<Vec<i32>> {
    records
        .iter()
        .filter_map(|record| record.reading(attribute.field()).transpose())
        .collect()
}

pub(crate) fn empty(attribute: Attribute) -> WeatherError {
    WeatherError::EmptyDataset {
        attribute: attribute.label(),
    }
}
