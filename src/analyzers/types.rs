//! Attribute descriptors and result types produced by the statistics engine.

use serde::Serialize;

use crate::record::Field;

/// A numeric reading the engine can aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    MaxTemperature,
    MinTemperature,
    MeanHumidity,
}

impl Attribute {
    pub fn field(self) -> Field {
        match self {
            Attribute::MaxTemperature => Field::MaxTemperature,
            Attribute::MinTemperature => Field::MinTemperature,
            Attribute::MeanHumidity => Field::MeanHumidity,
        }
    }

    pub fn label(self) -> &'static str {
        self.field().header()
    }
}

/// Which end of the value range an [`Extremum`] looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Min,
    Max,
}

/// Describes one extreme: the attribute scanned and the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremum {
    pub name: &'static str,
    pub attribute: Attribute,
    pub order: Order,
}

pub const HIGHEST: Extremum = Extremum {
    name: "Highest",
    attribute: Attribute::MaxTemperature,
    order: Order::Max,
};

pub const LOWEST: Extremum = Extremum {
    name: "Lowest",
    attribute: Attribute::MinTemperature,
    order: Order::Min,
};

pub const HUMIDITY: Extremum = Extremum {
    name: "Humidity",
    attribute: Attribute::MeanHumidity,
    order: Order::Max,
};

/// Extreme value and the date of the record that carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extreme {
    pub value: i32,
    /// `None` when the winning record had no `PKT`/`PKST` column.
    pub date: Option<String>,
}

/// Yearly extremes, serialized as `{"Highest": .., "Lowest": .., "Humidity": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearExtremes {
    #[serde(rename = "Highest")]
    pub highest: Extreme,
    #[serde(rename = "Lowest")]
    pub lowest: Extreme,
    #[serde(rename = "Humidity")]
    pub humidity: Extreme,
}

/// Monthly averages, rounded to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthAverages {
    #[serde(rename = "Average Highest Temperature")]
    pub highest_temperature: i64,
    #[serde(rename = "Average Lowest Temperature")]
    pub lowest_temperature: i64,
    #[serde(rename = "Average Mean Humidity")]
    pub mean_humidity: i64,
}
