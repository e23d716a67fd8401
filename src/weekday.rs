use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The day of week.
///
/// Discriminants count days from Monday, matching the ISO 8601 ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Mon")]
    Mon = 0,
    #[display(fmt = "Tue")]
    Tue = 1,
    #[display(fmt = "Wed")]
    Wed = 2,
    #[display(fmt = "Thu")]
    Thu = 3,
    #[display(fmt = "Fri")]
    Fri = 4,
    #[display(fmt = "Sat")]
    Sat = 5,
    #[display(fmt = "Sun")]
    Sun = 6,
}

impl Weekday {
    /// Weekday of a day ordinal (0001-01-01 = 1, a Monday).
    ///
    /// Works for any ordinal because 7 divides the 400-year cycle length.
    pub(crate) const fn from_ordinal(ordinal: i64) -> Self {
        match (ordinal + 6).rem_euclid(7) {
            0 => Self::Mon,
            1 => Self::Tue,
            2 => Self::Wed,
            3 => Self::Thu,
            4 => Self::Fri,
            5 => Self::Sat,
            _ => Self::Sun,
        }
    }

    /// Monday = 0 through Sunday = 6.
    #[inline]
    pub const fn num_days_from_monday(self) -> u8 {
        self as u8
    }

    /// ISO weekday number, Monday = 1 through Sunday = 7.
    #[inline]
    pub const fn number_from_monday(self) -> u8 {
        self.num_days_from_monday() + 1
    }
}
