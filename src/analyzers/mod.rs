//! Statistics engine: yearly extremes and monthly averages.
//!
//! Every operation takes the dataset as a borrowed slice and keeps no state
//! between calls.

pub mod averages;
pub mod extremes;
pub mod types;
pub mod utility;

pub use averages::{average, month_averages};
pub use extremes::{find_extreme, year_extremes};
