//! Proleptic Gregorian dates for any integer year, and conversions between
//! calendar fields and Julian day numbers, fractional Julian days and Julian
//! seconds.
//!
//! ```
//! use julian_day::{DayBoundary, DateTimeFields, fields_to_seconds, ymd_to_julian};
//!
//! assert_eq!(ymd_to_julian(1970, 1, 1).unwrap(), 2_440_588);
//!
//! let midnight = DateTimeFields::new(1970, 1, 1, 0, 0, 0);
//! assert_eq!(fields_to_seconds(&midnight, DayBoundary::Midnight).unwrap(), 210_866_803_200);
//! ```

mod clock;
mod consts;
mod extended;
mod julian;
mod native;
mod prelude;
mod types;
mod weekday;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use extended::ExtendedDate;
pub use julian::{
    ConvertError, DateTimeFields, DayBoundary, days_to_ymd, fields_to_fracdays, fields_to_seconds,
    fracdays_to_fields, julian_to_ymd, now_days, now_fracdays, now_julian_seconds, now_seconds,
    seconds_to_fields, ymd_to_days, ymd_to_julian,
};
pub use native::{IsoWeek, NativeDate};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use weekday::Weekday;

use crate::prelude::*;

/// Reasons a calendar date cannot be built or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: u8 },
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    DayOutOfRange(u8),
    #[display(fmt = "Invalid day ordinal: {} (must be {}-{})", "_0", MIN_ORDINAL, MAX_ORDINAL)]
    InvalidOrdinal(i64),
    #[display(fmt = "Date is outside the representable range")]
    Overflow,
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
