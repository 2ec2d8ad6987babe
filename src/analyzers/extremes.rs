use crate::analyzers::types::{Extreme, Extremum, HIGHEST, HUMIDITY, LOWEST, Order, YearExtremes};
use crate::analyzers::utility::empty;
use crate::error::Result;
use crate::record::DailyRecord;

/// Finds the extreme reading described by `extremum`.
///
/// Ties go to the last matching record, so in a calendar-ordered dataset the
/// latest day wins.
///
/// # Errors
///
/// Fails with `EmptyDataset` if no record has the attribute, and with
/// `MalformedValue` on a non-integer reading.
pub fn find_extreme(records: &[DailyRecord], extremum: &Extremum) -> Result<Extreme> {
    let field = extremum.attribute.field();
    let mut best: Option<(i32, &DailyRecord)> = None;

    for record in records {
        let Some(value) = record.reading(field)? else {
            continue;
        };

        let replaces = match best {
            None => true,
            Some((current, _)) => match extremum.order {
                Order::Max => value >= current,
                Order::Min => value <= current,
            },
        };
        if replaces {
            best = Some((value, record));
        }
    }

    let (value, record) = best.ok_or_else(|| empty(extremum.attribute))?;
    Ok(Extreme {
        value,
        date: record.date().map(str::to_string),
    })
}

/// Highest max temperature, lowest min temperature and highest mean humidity.
///
/// Each attribute is scanned independently; a day with humidity but no
/// temperature still counts for humidity.
pub fn year_extremes(records: &[DailyRecord]) -> Result<YearExtremes> {
    Ok(YearExtremes {
        highest: find_extreme(records, &HIGHEST)?,
        lowest: find_extreme(records, &LOWEST)?,
        humidity: find_extreme(records, &HUMIDITY)?,
    })
}
