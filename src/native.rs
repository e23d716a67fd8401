//! The bounded calendar primitive: proleptic Gregorian dates in years 1..=9999.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_4_YEARS, DAYS_PER_CENTURY, DAYS_PER_CYCLE,
    DAYS_PER_YEAR, FEBRUARY, GREGORIAN_CYCLE_YEARS, JANUARY, MAX_ORDINAL, MIN_DAY, MIN_ORDINAL,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year, is_leap_year};
use crate::{ParseError, Weekday};

/// A valid calendar date whose year lies inside the native window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct NativeDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// ISO 8601 week date: week-numbering year, week 1..=53 and weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsoWeek {
    pub year:    i64,
    pub week:    u8,
    pub weekday: Weekday,
}

impl NativeDate {
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` when the triple is
    /// not a date inside the native window.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, i64::from(year.get()), month)?;
        Ok(Self { year, month, day })
    }

    /// Builds the date for a day ordinal, where 1 is 0001-01-01.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidOrdinal` outside `MIN_ORDINAL..=MAX_ORDINAL`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, ParseError> {
        if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
            return Err(ParseError::InvalidOrdinal(ordinal));
        }
        let (year, month, day) = ordinal_to_ymd(ordinal);
        let year = Year::from_i64(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, i64::from(year.get()), month)?;
        Ok(Self { year, month, day })
    }

    pub fn to_ordinal(self) -> i64 {
        ymd_to_ordinal(
            i64::from(self.year.get()),
            self.month.get(),
            self.day.get(),
        )
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    pub fn weekday(self) -> Weekday {
        Weekday::from_ordinal(self.to_ordinal())
    }

    /// ISO weekday number, Monday = 1 through Sunday = 7.
    pub fn iso_weekday(self) -> u8 {
        self.weekday().number_from_monday()
    }

    /// The ISO week date containing this day.
    ///
    /// The week-numbering year can fall one outside the native window for the
    /// first and last days of the window, so it is returned as `i64`.
    pub fn iso_calendar(self) -> IsoWeek {
        let ordinal = self.to_ordinal();
        let mut year = i64::from(self.year.get());
        let mut week1_monday = iso_week1_monday(year);
        let mut week = (ordinal - week1_monday).div_euclid(7);

        if week < 0 {
            year -= 1;
            week1_monday = iso_week1_monday(year);
            week = (ordinal - week1_monday).div_euclid(7);
        } else if week >= 52 && ordinal >= iso_week1_monday(year + 1) {
            year += 1;
            week = 0;
        }

        debug_assert!((0..53).contains(&week), "ISO week index {week} out of range");
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let week = week as u8 + 1;

        IsoWeek {
            year,
            week,
            weekday: Weekday::from_ordinal(ordinal),
        }
    }
}

// --- ordinal arithmetic over unbounded years ---

/// Days before January 1st of `year`, counted from 0001-01-01.
pub(crate) const fn days_before_year(year: i64) -> i64 {
    let y = year - 1;
    y * DAYS_PER_YEAR + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(GREGORIAN_CYCLE_YEARS)
}

pub(crate) const fn days_before_month(year: i64, month: u8) -> i64 {
    let leap_shift = if month > FEBRUARY && is_leap_year(year) {
        1
    } else {
        0
    };
    DAYS_BEFORE_MONTH[month as usize] as i64 + leap_shift
}

pub(crate) const fn ymd_to_ordinal(year: i64, month: u8, day: u8) -> i64 {
    days_before_year(year) + days_before_month(year, month) + day as i64
}

/// Inverse of [`ymd_to_ordinal`], peeling off 400-, 100-, 4- and 1-year blocks.
pub(crate) fn ordinal_to_ymd(ordinal: i64) -> (i64, u8, u8) {
    let n0 = ordinal - 1;
    let n400 = n0.div_euclid(DAYS_PER_CYCLE);
    let mut n = n0.rem_euclid(DAYS_PER_CYCLE);

    let n100 = n / DAYS_PER_CENTURY;
    n %= DAYS_PER_CENTURY;
    let n4 = n / DAYS_PER_4_YEARS;
    n %= DAYS_PER_4_YEARS;
    let n1 = n / DAYS_PER_YEAR;
    n %= DAYS_PER_YEAR;

    let year = n400 * GREGORIAN_CYCLE_YEARS + n100 * 100 + n4 * 4 + n1 + 1;

    // Last day of a leap year lands on the boundary of a 4- or 400-year block.
    if n1 == 4 || n100 == 4 {
        return (year - 1, 12, DAYS_IN_MONTH[12]);
    }

    let leap = n1 == 3 && (n4 != 24 || n100 == 3);
    // Estimate is exact or one too high.
    let mut month = ((n + 50) >> 5) as u8;
    let mut preceding = DAYS_BEFORE_MONTH[month as usize] as i64 + i64::from(month > FEBRUARY && leap);
    if preceding > n {
        month -= 1;
        preceding -= DAYS_IN_MONTH[month as usize] as i64 + i64::from(month == FEBRUARY && leap);
    }
    n -= preceding;

    (year, month, n as u8 + MIN_DAY)
}

fn iso_week1_monday(year: i64) -> i64 {
    let first_day = ymd_to_ordinal(year, JANUARY, MIN_DAY);
    let first_weekday = (first_day + 6).rem_euclid(7);
    let mut week1_monday = first_day - first_weekday;
    if first_weekday > 3 {
        week1_monday += 7;
    }
    week1_monday
}

impl From<NativeDate> for (u16, u8, u8) {
    fn from(date: NativeDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl TryFrom<(u16, u8, u8)> for NativeDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}
