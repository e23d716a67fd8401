//! Dates for any integer year.
//!
//! The Gregorian calendar repeats exactly every 400 years: each cycle holds 97
//! leap years and 146097 days, which is a whole number of weeks (20871). A date
//! outside the native 1..=9999 window is therefore stored as the date at the
//! same position inside the first cycle plus a signed count of whole cycles.
//! Month lengths, leap days and weekdays of the stored date are exactly those
//! of the true date.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::consts::{
    DATE_SEPARATOR, DAYS_PER_CYCLE, GREGORIAN_CYCLE_YEARS, MAX_ORDINAL, MIN_ORDINAL, MIN_YEAR,
};
use crate::native::{IsoWeek, NativeDate};
use crate::types::is_native_year;
use crate::{ParseError, Weekday};

/// A proleptic Gregorian date whose year is any `i64`.
///
/// Values are immutable; operations that move the date return a new value.
/// Construction guarantees that [`ExtendedDate::to_ordinal`] fits in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtendedDate {
    date:         NativeDate,
    cycle_adjust: i64,
}

impl ExtendedDate {
    /// Creates a date from calendar fields.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` when the
    /// fields do not form a Gregorian date, and `ParseError::Overflow` when the
    /// day ordinal would not fit in an `i64`.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, ParseError> {
        if is_native_year(year) {
            let narrow = u16::try_from(year).map_err(|_| ParseError::InvalidYear(year))?;
            return Self::build(NativeDate::new(narrow, month, day)?, 0);
        }

        let min_year = i64::from(MIN_YEAR);
        let offset = year.checked_sub(min_year).ok_or(ParseError::Overflow)?;
        let adj_year = offset.rem_euclid(GREGORIAN_CYCLE_YEARS) + min_year;
        let cycle_adjust = year.checked_sub(adj_year).ok_or(ParseError::Overflow)? / GREGORIAN_CYCLE_YEARS;
        trace!(year, adj_year, cycle_adjust, "reduced year into native window");

        let narrow = u16::try_from(adj_year).map_err(|_| ParseError::InvalidYear(adj_year))?;
        let date = NativeDate::new(narrow, month, day).map_err(|err| match err {
            // Report the caller's year, not the reduced one.
            ParseError::InvalidDay { month, day, .. } => ParseError::InvalidDay { year, month, day },
            other => other,
        })?;
        Self::build(date, cycle_adjust)
    }

    /// Creates the date for a day ordinal, where 1 is 0001-01-01 and 0 is
    /// 0000-12-31.
    ///
    /// # Errors
    /// Returns `ParseError::Overflow` for ordinals within one cycle of the
    /// `i64` limits.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, ParseError> {
        if (MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
            return Self::build(NativeDate::from_ordinal(ordinal)?, 0);
        }

        let adj_ordinal = ordinal
            .checked_sub(MIN_ORDINAL)
            .ok_or(ParseError::Overflow)?
            .rem_euclid(DAYS_PER_CYCLE)
            + MIN_ORDINAL;
        let cycle_adjust = ordinal.checked_sub(adj_ordinal).ok_or(ParseError::Overflow)? / DAYS_PER_CYCLE;
        trace!(ordinal, adj_ordinal, cycle_adjust, "reduced ordinal into native window");

        Self::build(NativeDate::from_ordinal(adj_ordinal)?, cycle_adjust)
    }

    fn build(date: NativeDate, cycle_adjust: i64) -> Result<Self, ParseError> {
        cycle_adjust
            .checked_mul(DAYS_PER_CYCLE)
            .and_then(|days| days.checked_add(date.to_ordinal()))
            .ok_or(ParseError::Overflow)?;
        Ok(Self { date, cycle_adjust })
    }

    /// Days since 0000-12-31 (0001-01-01 is 1).
    pub fn to_ordinal(self) -> i64 {
        // Checked in `build`.
        self.date.to_ordinal() + self.cycle_adjust * DAYS_PER_CYCLE
    }

    pub const fn year(self) -> i64 {
        // Smaller in magnitude than the ordinal checked in `build`.
        self.date.year() as i64 + self.cycle_adjust * GREGORIAN_CYCLE_YEARS
    }

    pub const fn month(self) -> u8 {
        self.date.month()
    }

    pub const fn day(self) -> u8 {
        self.date.day()
    }

    /// Whole 400-year cycles between the true date and its native stand-in.
    pub const fn cycle_adjust(self) -> i64 {
        self.cycle_adjust
    }

    /// The in-window date at the same position of the 400-year cycle.
    pub const fn native(self) -> NativeDate {
        self.date
    }

    /// Returns a copy with the given fields replaced.
    ///
    /// # Errors
    /// Fails like [`ExtendedDate::new`] when the resulting fields are invalid,
    /// e.g. replacing the year of a February 29th with a common year.
    pub fn replace(
        self,
        year: Option<i64>,
        month: Option<u8>,
        day: Option<u8>,
    ) -> Result<Self, ParseError> {
        Self::new(
            year.unwrap_or_else(|| self.year()),
            month.unwrap_or_else(|| self.month()),
            day.unwrap_or_else(|| self.day()),
        )
    }

    /// Moves the date by a signed number of days.
    ///
    /// # Errors
    /// Returns `ParseError::Overflow` if the result is not representable.
    pub fn add_days(self, days: i64) -> Result<Self, ParseError> {
        let ordinal = self.to_ordinal().checked_add(days).ok_or(ParseError::Overflow)?;
        Self::from_ordinal(ordinal)
    }

    /// Signed number of days from `other` to `self`.
    ///
    /// # Errors
    /// Returns `ParseError::Overflow` when the difference does not fit in an `i64`.
    pub fn days_since(self, other: Self) -> Result<i64, ParseError> {
        let native_days = self.date.to_ordinal() - other.date.to_ordinal();
        self.cycle_adjust
            .checked_sub(other.cycle_adjust)
            .and_then(|cycles| cycles.checked_mul(DAYS_PER_CYCLE))
            .and_then(|days| days.checked_add(native_days))
            .ok_or(ParseError::Overflow)
    }

    pub fn weekday(self) -> Weekday {
        self.date.weekday()
    }

    /// ISO weekday number, Monday = 1 through Sunday = 7.
    pub fn iso_weekday(self) -> u8 {
        self.date.iso_weekday()
    }

    /// The ISO week date, with the week-numbering year shifted back by the
    /// cycle adjustment.
    pub fn iso_calendar(self) -> IsoWeek {
        let iso = self.date.iso_calendar();
        IsoWeek {
            year: iso.year + self.cycle_adjust * GREGORIAN_CYCLE_YEARS,
            ..iso
        }
    }
}

impl PartialOrd for ExtendedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExtendedDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_ordinal().cmp(&other.to_ordinal())
    }
}

impl From<NativeDate> for ExtendedDate {
    fn from(date: NativeDate) -> Self {
        Self {
            date,
            cycle_adjust: 0,
        }
    }
}

impl TryFrom<(i64, u8, u8)> for ExtendedDate {
    type Error = ParseError;

    fn try_from(value: (i64, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ExtendedDate> for (i64, u8, u8) {
    fn from(date: ExtendedDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl fmt::Display for ExtendedDate {
    /// `YYYY-MM-DD`, with a leading `-` and at least four year digits for
    /// years before 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if year < 0 {
            // Zero padding counts the sign.
            write!(f, "{year:05}")?;
        } else {
            write!(f, "{year:04}")?;
        }
        write!(f, "-{:02}-{:02}", self.month(), self.day())
    }
}

impl FromStr for ExtendedDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // A leading separator is the year's sign.
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YEAR{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = parse_unsigned::<i64>(year)?;
        let year = if negative { -year } else { year };
        let month = parse_unsigned::<u8>(month)?;
        let day = parse_unsigned::<u8>(day)?;

        Self::new(year, month, day)
    }
}

/// Digits only; signs inside a component are rejected.
fn parse_unsigned<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for ExtendedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ExtendedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
