//! Text, chart and JSON rendering for the engine's results.
//!
//! Every function returns the lines to print; the binary writes them to stdout.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::analyzers::types::{Extreme, HIGHEST, HUMIDITY, LOWEST, MonthAverages, YearExtremes};
use crate::error::Result;
use crate::parser::YearMonth;
use crate::record::{DailyRecord, Field};

const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// How chart bars are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub color: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Day-of-month component of a `YYYY-MM-DD` date, as written in the file.
fn day_of_month(date: &str) -> Option<&str> {
    date.rsplit_once('-').map(|(_, day)| day)
}

/// `Mon D` for a `YYYY-MM-DD` date string, keeping the file's day padding.
fn short_date(date: &str) -> Option<String> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(format!("{} {}", parsed.format("%b"), day_of_month(date)?))
}

fn extreme_line(label: &str, unit: &str, extreme: &Extreme) -> String {
    match extreme.date.as_deref().and_then(short_date) {
        Some(on) => format!("{label}: {}{unit} on {on}", extreme.value),
        None => format!("{label}: {}{unit}", extreme.value),
    }
}

pub fn render_extremes(extremes: &YearExtremes) -> Vec<String> {
    vec![
        extreme_line(HIGHEST.name, "C", &extremes.highest),
        extreme_line(LOWEST.name, "C", &extremes.lowest),
        extreme_line(HUMIDITY.name, "%", &extremes.humidity),
    ]
}

pub fn render_averages(averages: &MonthAverages) -> Vec<String> {
    vec![
        format!("Highest Average Temperature: {}C", averages.highest_temperature),
        format!("Lowest Average Temperature: {}C", averages.lowest_temperature),
        format!("Average Mean Humidity: {}%", averages.mean_humidity),
    ]
}

/// One chart line: a bar of `min` pluses, then `max - min` more, then the readings.
///
/// Returns `None` for a day missing either temperature.
pub fn render_chart_row(record: &DailyRecord, style: ChartStyle) -> Result<Option<String>> {
    let (Some(min), Some(max)) = (
        record.reading(Field::MinTemperature)?,
        record.reading(Field::MaxTemperature)?,
    ) else {
        return Ok(None);
    };

    let day = record.date().and_then(day_of_month).unwrap_or("--");

    let low = min.max(0);
    let min_bar = "+".repeat(low as usize);
    let range_bar = "+".repeat(max.saturating_sub(low).max(0) as usize);

    let line = if style.color {
        format!("{day} {BLUE}{min_bar}{RESET}{RED}{range_bar}{RESET} {min}C - {max}C")
    } else {
        format!("{day} {min_bar}{range_bar} {min}C - {max}C")
    };
    Ok(Some(line))
}

/// Chart for a month: a `Mon YYYY` title followed by one line per day.
pub fn render_chart(
    period: &YearMonth,
    records: &[DailyRecord],
    style: ChartStyle,
) -> Result<Vec<String>> {
    let mut lines = vec![period.to_string()];
    for record in records {
        match render_chart_row(record, style)? {
            Some(line) => lines.push(line),
            None => debug!(date = ?record.date(), "Skipping day without both temperatures"),
        }
    }
    Ok(lines)
}

/// Pretty-printed JSON for any report.
pub fn to_json(value: &impl Serialize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    fn day(date: &str, max: &str, min: &str) -> DailyRecord {
        DailyRecord::from_fields([
            (Field::Pkt, date.to_string()),
            (Field::MaxTemperature, max.to_string()),
            (Field::MinTemperature, min.to_string()),
        ])
    }

    const PLAIN: ChartStyle = ChartStyle { color: false };

    #[test]
    fn test_render_extremes() {
        let extremes = YearExtremes {
            highest: Extreme {
                value: 45,
                date: Some("2002-06-23".to_string()),
            },
            lowest: Extreme {
                value: 1,
                date: Some("2002-12-22".to_string()),
            },
            humidity: Extreme {
                value: 95,
                date: None,
            },
        };

        assert_eq!(
            render_extremes(&extremes),
            [
                "Highest: 45C on Jun 23",
                "Lowest: 1C on Dec 22",
                "Humidity: 95%",
            ]
        );
    }

    #[test]
    fn test_render_averages() {
        let averages = MonthAverages {
            highest_temperature: 39,
            lowest_temperature: 18,
            mean_humidity: 71,
        };

        assert_eq!(
            render_averages(&averages),
            [
                "Highest Average Temperature: 39C",
                "Lowest Average Temperature: 18C",
                "Average Mean Humidity: 71%",
            ]
        );
    }

    #[test]
    fn test_chart_row_plain() {
        let line = render_chart_row(&day("2011-03-05", "12", "5"), PLAIN)
            .unwrap()
            .unwrap();
        assert_eq!(line, "05 ++++++++++++ 5C - 12C");
    }

    #[test]
    fn test_chart_row_colored_bars() {
        let line = render_chart_row(&day("2011-03-05", "12", "5"), ChartStyle::default())
            .unwrap()
            .unwrap();
        let expected = format!("05 {BLUE}+++++{RESET}{RED}+++++++{RESET} 5C - 12C");
        assert_eq!(line, expected);
        assert!(line.ends_with(" 5C - 12C"));
    }

    #[test]
    fn test_chart_row_negative_min() {
        let line = render_chart_row(&day("2011-01-02", "3", "-4"), PLAIN)
            .unwrap()
            .unwrap();
        assert_eq!(line, "02 +++ -4C - 3C");
    }

    #[test]
    fn test_chart_row_extreme_readings_do_not_overflow() {
        let line = render_chart_row(&day("2011-01-02", "-2147483648", "1"), PLAIN)
            .unwrap()
            .unwrap();
        assert_eq!(line, "02 + 1C - -2147483648C");
    }

    #[test]
    fn test_unpadded_dates_keep_raw_day() {
        let line = render_chart_row(&day("2006-6-3", "4", "2"), PLAIN)
            .unwrap()
            .unwrap();
        assert_eq!(line, "3 ++++ 2C - 4C");

        let highest = Extreme {
            value: 29,
            date: Some("2006-6-3".to_string()),
        };
        assert_eq!(extreme_line("Highest", "C", &highest), "Highest: 29C on Jun 3");
    }

    #[test]
    fn test_chart_row_missing_reading_skipped() {
        assert_eq!(render_chart_row(&day("2011-01-02", "", "1"), PLAIN).unwrap(), None);
    }

    #[test]
    fn test_render_chart() {
        let period = YearMonth {
            year: 2011,
            month: Month::March,
        };
        let records = vec![
            day("2011-03-01", "3", "1"),
            day("2011-03-02", "", ""),
            day("2011-03-03", "2", "2"),
        ];

        let lines = render_chart(&period, &records, PLAIN).unwrap();
        assert_eq!(lines, ["Mar 2011", "01 +++ 1C - 3C", "03 ++ 2C - 2C"]);
    }

    #[test]
    fn test_to_json_uses_report_keys() {
        let averages = MonthAverages {
            highest_temperature: 20,
            lowest_temperature: 10,
            mean_humidity: 50,
        };
        let json = to_json(&averages).unwrap();
        assert!(json.contains("\"Average Highest Temperature\": 20"));
    }
}
