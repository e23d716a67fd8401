use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE_YEARS,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year inside the native calendar window `MIN_YEAR..=MAX_YEAR` (1..=9999).
///
/// Years outside the window are carried by [`crate::ExtendedDate`], which pairs
/// one of these with a 400-year cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year inside the native window
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(i64::from(value)))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Checked conversion from a wide year, used after cycle reduction
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value lies outside the native window.
    pub fn from_i64(value: i64) -> Result<Self, ParseError> {
        if !is_native_year(value) {
            return Err(ParseError::InvalidYear(value));
        }
        let narrow = u16::try_from(value).map_err(|_| ParseError::InvalidYear(value))?;
        Self::new(narrow)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month, validated against its year and month on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day valid for the given year and month.
    ///
    /// The year may be any integer; only its position in the 400-year cycle
    /// matters for the leap-day check.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i64, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year,
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > month_length(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No month context here, so only the 1..=31 envelope is checked.
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_DAY => Ok(Self(non_zero)),
            _ => Err(ParseError::DayOutOfRange(value)),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap-year rule for any integer year, including zero and negatives.
pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE_YEARS) == 0
}

/// Number of days in `month` of any integer year.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` if the month is 0 or > `MAX_MONTH`.
pub fn days_in_month(year: i64, month: u8) -> Result<u8, ParseError> {
    Ok(month_length(year, Month::new(month)?))
}

const fn month_length(year: i64, month: Month) -> u8 {
    let month = month.get();
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub(crate) const fn is_native_year(year: i64) -> bool {
    year >= MIN_YEAR as i64 && year <= MAX_YEAR as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_rejects_outside_window() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_from_i64() {
        assert_eq!(Year::from_i64(400).unwrap().get(), 400);
        assert!(matches!(
            Year::from_i64(-5),
            Err(ParseError::InvalidYear(-5))
        ));
        assert!(matches!(
            Year::from_i64(70_000),
            Err(ParseError::InvalidYear(70_000))
        ));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_serde_validation() {
        let month: Month = serde_json::from_str("8").unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        let jan = Month::new(1).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(31, 2024, jan).is_ok());
        assert!(Day::new(28, 2023, feb).is_ok());
        assert!(Day::new(29, 2023, feb).is_err());
        assert!(Day::new(29, 2024, feb).is_ok());
        assert!(Day::new(30, 2024, feb).is_err());
        assert!(Day::new(30, 2024, apr).is_ok());
        assert!(Day::new(31, 2024, apr).is_err());
    }

    #[test]
    fn test_day_error_carries_true_year() {
        let feb = Month::new(2).unwrap();
        let result = Day::new(29, -100, feb);
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: -100,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert_eq!(result, Err(ParseError::DayOutOfRange(0)));
        let result: Result<Day, _> = 32.try_into();
        assert_eq!(result, Err(ParseError::DayOutOfRange(32)));
    }

    #[test]
    fn test_day_serde_error_message() {
        let day: Day = serde_json::from_str("31").unwrap();
        assert_eq!(day.get(), 31);

        let err = serde_json::from_str::<Day>("32").unwrap_err();
        assert!(
            err.to_string().starts_with("Invalid day: 32 (must be 1-31)"),
            "{err}"
        );
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i64,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero is a 400-multiple",
            },
            TestCase {
                year: -1,
                is_leap: false,
                description: "year before zero",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative multiple of 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century",
            },
            TestCase {
                year: -400,
                is_leap: true,
                description: "negative 400-multiple",
            },
            TestCase {
                year: -3_999_999_997,
                is_leap: false,
                description: "far past, odd",
            },
            TestCase {
                year: -3_999_999_996,
                is_leap: true,
                description: "far past, divisible by 4",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), Ok(28));
        assert_eq!(days_in_month(1900, 2), Ok(28));
        assert_eq!(days_in_month(2000, 2), Ok(29));
        assert_eq!(days_in_month(-400, 2), Ok(29));
    }

    #[test]
    fn test_days_in_month_rejects_bad_month() {
        assert_eq!(days_in_month(2024, 0), Err(ParseError::InvalidMonth(0)));
        assert_eq!(days_in_month(2024, 13), Err(ParseError::InvalidMonth(13)));
        assert_eq!(days_in_month(-50_000, 255), Err(ParseError::InvalidMonth(255)));
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                Ok(expected[month as usize]),
                "Month {month} has incorrect day count"
            );
        }
    }
}
