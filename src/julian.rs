//! Conversions between calendar fields and Julian scalars.
//!
//! Three scalars are supported: the Julian day number (whole days), the
//! fractional Julian day and Julian seconds (`JDN * 86400 + seconds of day`).
//! Julian day 2440588 is 1970-01-01. A [`DayBoundary`] selects whether days
//! start at midnight or, following the astronomical convention, at noon; it
//! has no effect on whole-day conversions.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::consts::{
    JULIAN_DAY_OFFSET, MINUTES_PER_HOUR, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    UNIX_BASE_JULIAN_DAY,
};
use crate::{ExtendedDate, ParseError};

/// Error type for Julian conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// The calendar fields do not form a valid date.
    #[error(transparent)]
    Date(#[from] ParseError),

    /// A fractional input was NaN or infinite.
    #[error("not a finite number: {0}")]
    NonFinite(f64),

    /// An intermediate value does not fit in an `i64`.
    #[error("{0} is outside the representable range")]
    Overflow(&'static str),
}

/// Where one Julian day ends and the next begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayBoundary {
    /// Civil convention, days start at 00:00 UTC.
    #[default]
    Midnight,
    /// Astronomical convention, days start at 12:00 UTC.
    Noon,
}

impl DayBoundary {
    pub const fn from_astro(astro: bool) -> Self {
        if astro { Self::Noon } else { Self::Midnight }
    }

    /// Offset as a fraction of a day: 0 or 0.5.
    pub const fn offset_days(self) -> f64 {
        match self {
            Self::Midnight => 0.0,
            Self::Noon => 0.5,
        }
    }

    /// Offset in whole seconds: 0 or 43200.
    pub const fn offset_seconds(self) -> i64 {
        match self {
            Self::Midnight => 0,
            Self::Noon => SECONDS_PER_DAY / 2,
        }
    }
}

/// A calendar date with a time of day.
///
/// `S` is `i64` for Julian seconds and `f64` for fractional Julian days, where
/// the second may carry a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateTimeFields<S = i64> {
    pub year:   i64,
    pub month:  u8,
    pub day:    u8,
    pub hour:   i64,
    pub minute: i64,
    pub second: S,
}

impl<S> DateTimeFields<S> {
    pub const fn new(year: i64, month: u8, day: u8, hour: i64, minute: i64, second: S) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn ymd(&self) -> (i64, u8, u8) {
        (self.year, self.month, self.day)
    }
}

impl<S: fmt::Display> fmt::Display for DateTimeFields<S> {
    /// Space-separated `year month day hour minute second`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Julian day number of a calendar date.
///
/// # Errors
/// Returns `ConvertError::Date` if the fields are not a valid Gregorian date.
pub fn ymd_to_julian(year: i64, month: u8, day: u8) -> Result<i64, ConvertError> {
    ExtendedDate::new(year, month, day)?
        .to_ordinal()
        .checked_add(JULIAN_DAY_OFFSET)
        .ok_or(ConvertError::Overflow("julian day"))
}

/// Calendar date of a Julian day number.
///
/// # Errors
/// Returns `ConvertError::Overflow` within one 400-year cycle of the `i64` limits.
pub fn julian_to_ymd(julian_day: i64) -> Result<(i64, u8, u8), ConvertError> {
    let ordinal = julian_day
        .checked_sub(JULIAN_DAY_OFFSET)
        .ok_or(ConvertError::Overflow("julian day"))?;
    Ok(ExtendedDate::from_ordinal(ordinal)?.into())
}

/// Current time as Julian seconds, truncated to the whole second.
///
/// # Errors
/// Fails if the clock fails or reports a non-finite time.
pub fn now_julian_seconds(clock: &impl Clock) -> Result<i64, ConvertError> {
    let unix = clock.unix_seconds()?;
    if !unix.is_finite() {
        return Err(ConvertError::NonFinite(unix));
    }
    let whole = float_to_i64(unix.floor(), "clock time")?;
    let now = (UNIX_BASE_JULIAN_DAY * SECONDS_PER_DAY)
        .checked_add(whole)
        .ok_or(ConvertError::Overflow("clock time"))?;
    debug!(unix, julian_seconds = now, "read clock");
    Ok(now)
}

// --- seconds mode ---

/// Calendar fields of a Julian-seconds value.
///
/// # Errors
/// Returns `ConvertError::Overflow` near the `i64` limits.
pub fn seconds_to_fields(
    seconds: i64,
    boundary: DayBoundary,
) -> Result<DateTimeFields<i64>, ConvertError> {
    let shifted = seconds
        .checked_add(boundary.offset_seconds())
        .ok_or(ConvertError::Overflow("julian seconds"))?;
    let (year, month, day) = julian_to_ymd(shifted.div_euclid(SECONDS_PER_DAY))?;
    let of_day = shifted.rem_euclid(SECONDS_PER_DAY);
    trace!(seconds, shifted, of_day, "split julian seconds");

    Ok(DateTimeFields::new(
        year,
        month,
        day,
        of_day / SECONDS_PER_HOUR,
        (of_day / SECONDS_PER_MINUTE) % MINUTES_PER_HOUR,
        of_day % SECONDS_PER_MINUTE,
    ))
}

/// Julian seconds of calendar fields.
///
/// The time fields are not range-checked; they simply add up.
///
/// # Errors
/// Returns `ConvertError::Date` for an invalid date and
/// `ConvertError::Overflow` if the total does not fit in an `i64`.
pub fn fields_to_seconds(
    fields: &DateTimeFields<i64>,
    boundary: DayBoundary,
) -> Result<i64, ConvertError> {
    let julian_day = ymd_to_julian(fields.year, fields.month, fields.day)?;
    julian_day
        .checked_mul(SECONDS_PER_DAY)
        .zip(clock_seconds(fields.hour, fields.minute, fields.second))
        .and_then(|(day_start, of_day)| day_start.checked_add(of_day))
        .and_then(|total| total.checked_sub(boundary.offset_seconds()))
        .ok_or(ConvertError::Overflow("julian seconds"))
}

// --- fractional-day mode ---

/// Calendar fields of a fractional Julian day.
///
/// Hour and minute are whole; the second keeps whatever fraction is left.
/// An `f64` day number near 2.4 million resolves to roughly 40 microseconds,
/// so a value built from whole seconds can come back as e.g. `29.99999821`
/// rather than `30`.
///
/// # Errors
/// Returns `ConvertError::NonFinite` for NaN or infinite input and
/// `ConvertError::Overflow` when the day is outside the `i64` range.
pub fn fracdays_to_fields(
    fracdays: f64,
    boundary: DayBoundary,
) -> Result<DateTimeFields<f64>, ConvertError> {
    if !fracdays.is_finite() {
        return Err(ConvertError::NonFinite(fracdays));
    }
    let shifted = fracdays + boundary.offset_days();
    let whole = shifted.floor();
    let (year, month, day) = julian_to_ymd(float_to_i64(whole, "julian day")?)?;

    let of_day = (shifted - whole) * SECONDS_PER_DAY as f64;
    let hour = (of_day / SECONDS_PER_HOUR as f64).floor();
    let minute = (of_day / SECONDS_PER_MINUTE as f64).floor() % MINUTES_PER_HOUR as f64;
    let second = of_day % SECONDS_PER_MINUTE as f64;
    trace!(fracdays, shifted, of_day, "split fractional julian day");

    // of_day lies in [0, 86400), so hour and minute are small whole numbers.
    Ok(DateTimeFields::new(
        year,
        month,
        day,
        hour as i64,
        minute as i64,
        second,
    ))
}

/// Fractional Julian day of calendar fields.
///
/// # Errors
/// Returns `ConvertError::Date` for an invalid date, `ConvertError::NonFinite`
/// for a non-finite second and `ConvertError::Overflow` near the `i64` limits.
pub fn fields_to_fracdays(
    fields: &DateTimeFields<f64>,
    boundary: DayBoundary,
) -> Result<f64, ConvertError> {
    if !fields.second.is_finite() {
        return Err(ConvertError::NonFinite(fields.second));
    }
    let julian_day = ymd_to_julian(fields.year, fields.month, fields.day)?;
    let whole_seconds = julian_day
        .checked_mul(SECONDS_PER_DAY)
        .zip(clock_seconds(fields.hour, fields.minute, 0))
        .and_then(|(day_start, of_day)| day_start.checked_add(of_day))
        .ok_or(ConvertError::Overflow("julian seconds"))?;

    Ok((whole_seconds as f64 + fields.second) / SECONDS_PER_DAY as f64 - boundary.offset_days())
}

// --- whole-day mode ---

/// Calendar date of a Julian day number. No day boundary applies.
///
/// # Errors
/// See [`julian_to_ymd`].
pub fn days_to_ymd(julian_day: i64) -> Result<(i64, u8, u8), ConvertError> {
    julian_to_ymd(julian_day)
}

/// Julian day number of a calendar date. No day boundary applies.
///
/// # Errors
/// See [`ymd_to_julian`].
pub fn ymd_to_days(year: i64, month: u8, day: u8) -> Result<i64, ConvertError> {
    ymd_to_julian(year, month, day)
}

// --- current moment ---

/// Current Julian day number.
///
/// # Errors
/// See [`now_julian_seconds`].
pub fn now_days(clock: &impl Clock) -> Result<i64, ConvertError> {
    Ok(now_julian_seconds(clock)?.div_euclid(SECONDS_PER_DAY))
}

/// Current fractional Julian day, to whole-second resolution.
///
/// # Errors
/// See [`now_julian_seconds`].
pub fn now_fracdays(clock: &impl Clock, boundary: DayBoundary) -> Result<f64, ConvertError> {
    Ok(now_julian_seconds(clock)? as f64 / SECONDS_PER_DAY as f64 - boundary.offset_days())
}

/// Current Julian seconds.
///
/// # Errors
/// See [`now_julian_seconds`].
pub fn now_seconds(clock: &impl Clock, boundary: DayBoundary) -> Result<i64, ConvertError> {
    now_julian_seconds(clock)?
        .checked_sub(boundary.offset_seconds())
        .ok_or(ConvertError::Overflow("julian seconds"))
}

fn clock_seconds(hour: i64, minute: i64, second: i64) -> Option<i64> {
    hour.checked_mul(SECONDS_PER_HOUR)?
        .checked_add(minute.checked_mul(SECONDS_PER_MINUTE)?)?
        .checked_add(second)
}

/// `value` must already be a whole number.
fn float_to_i64(value: f64, what: &'static str) -> Result<i64, ConvertError> {
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive.
    if value >= -(2f64.powi(63)) && value < 2f64.powi(63) {
        Ok(value as i64)
    } else {
        Err(ConvertError::Overflow(what))
    }
}
