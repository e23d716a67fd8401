/// Minimum year supported by the native calendar window (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum year supported by the native calendar window (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Last day of the longest months
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days preceding the first of each month in a non-leap year (index 0 unused)
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub const GREGORIAN_CYCLE_YEARS: i64 = 400;

pub(crate) const DAYS_PER_YEAR: i64 = 365;
pub(crate) const DAYS_PER_4_YEARS: i64 = 4 * DAYS_PER_YEAR + 1;
pub(crate) const DAYS_PER_CENTURY: i64 = 25 * DAYS_PER_4_YEARS - 1;

/// Whole weeks in one 400-year Gregorian cycle
pub const WEEKS_PER_CYCLE: i64 = 20_871;
/// Days in one 400-year Gregorian cycle (`WEEKS_PER_CYCLE` * 7)
pub const DAYS_PER_CYCLE: i64 = WEEKS_PER_CYCLE * 7;

/// Ordinal of 0001-01-01, the first day of the native window
pub const MIN_ORDINAL: i64 = 1;
/// Ordinal of 9999-12-31, the last day of the native window
pub const MAX_ORDINAL: i64 = 3_652_059;

/// Seconds in a day; leap seconds are not modelled
pub const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const MINUTES_PER_HOUR: i64 = 60;

/// Added to a day ordinal (0001-01-01 = 1) to get the Julian day number
pub const JULIAN_DAY_OFFSET: i64 = 1_721_425;
/// Julian day number of 1970-01-01, the Unix epoch
pub const UNIX_BASE_JULIAN_DAY: i64 = 2_440_588;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
