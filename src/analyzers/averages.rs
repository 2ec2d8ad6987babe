use crate::analyzers::types::{Attribute, MonthAverages};
use crate::analyzers::utility::{empty, mean, readings};
use crate::error::Result;
use crate::record::DailyRecord;

/// Mean of the present readings of `attribute`, rounded half away from zero.
///
/// # Errors
///
/// Fails with `EmptyDataset` if no record has a reading for `attribute`.
pub fn average(records: &[DailyRecord], attribute: Attribute) -> Result<i64> {
    let values = readings(records, attribute)?;
    let avg = mean(&values).ok_or_else(|| empty(attribute))?;
    Ok(avg.round() as i64)
}

/// Average max temperature, min temperature and mean humidity for a month.
pub fn month_averages(records: &[DailyRecord]) -> Result<MonthAverages> {
    Ok(MonthAverages {
        highest_temperature: average(records, Attribute::MaxTemperature)?,
        lowest_temperature: average(records, Attribute::MinTemperature)?,
        mean_humidity: average(records, Attribute::MeanHumidity)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeatherError;
    use crate::record::Field;

    fn max_temps(values: &[&str]) -> Vec<DailyRecord> {
        values
            .iter()
            .map(|v| DailyRecord::from_fields([(Field::MaxTemperature, v.to_string())]))
            .collect()
    }

    #[test]
    fn test_average_simple() {
        let records = max_temps(&["10", "20", "30"]);
        assert_eq!(average(&records, Attribute::MaxTemperature).unwrap(), 20);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        // 31 / 3 = 10.33, 32 / 3 = 10.67, 21 / 2 = 10.5
        assert_eq!(average(&max_temps(&["10", "10", "11"]), Attribute::MaxTemperature).unwrap(), 10);
        assert_eq!(average(&max_temps(&["10", "11", "11"]), Attribute::MaxTemperature).unwrap(), 11);
        assert_eq!(average(&max_temps(&["10", "11"]), Attribute::MaxTemperature).unwrap(), 11);
        assert_eq!(average(&max_temps(&["-10", "-11"]), Attribute::MaxTemperature).unwrap(), -11);
    }

    #[test]
    fn test_average_skips_empty_readings() {
        let records = max_temps(&["10", "", "20"]);
        assert_eq!(average(&records, Attribute::MaxTemperature).unwrap(), 15);
    }

    #[test]
    fn test_average_empty_is_error() {
        let records = max_temps(&["", ""]);
        let err = average(&records, Attribute::MaxTemperature).unwrap_err();
        assert!(matches!(
            err,
            WeatherError::EmptyDataset { attribute: "Max TemperatureC" }
        ));
        assert!(average(&[], Attribute::MeanHumidity).is_err());
    }

    #[test]
    fn test_month_averages() {
        let records = vec![
            DailyRecord::from_fields([
                (Field::MaxTemperature, "20".to_string()),
                (Field::MinTemperature, "10".to_string()),
                (Field::MeanHumidity, "60".to_string()),
            ]),
            DailyRecord::from_fields([
                (Field::MaxTemperature, "24".to_string()),
                (Field::MinTemperature, "".to_string()),
                (Field::MeanHumidity, "71".to_string()),
            ]),
        ];

        let averages = month_averages(&records).unwrap();
        assert_eq!(
            averages,
            MonthAverages {
                highest_temperature: 22,
                lowest_temperature: 10,
                mean_humidity: 66,
            }
        );
    }

    #[test]
    fn test_month_averages_missing_humidity_fails() {
        let records = max_temps(&["20"]);
        assert!(month_averages(&records).is_err());
    }
}
