use std::fmt;

use clap::{ArgGroup, Parser};

/// Convert between Gregorian dates and Julian days or Julian seconds.
#[derive(Debug, Parser)]
#[command(
    name = "jday",
    version,
    about = "Convert between Gregorian dates and Julian days or Julian seconds",
    allow_negative_numbers = true
)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["days", "fracdays", "seconds"])
))]
pub struct Cli {
    /// Whole Julian day numbers: [JD] or [YEAR MONTH DAY].
    #[arg(short, long)]
    pub days: bool,

    /// Fractional Julian days: [JD] or [YEAR MONTH DAY HOUR MINUTE SECOND].
    #[arg(short, long)]
    pub fracdays: bool,

    /// Julian seconds: [JS] or [YEAR MONTH DAY HOUR MINUTE SECOND].
    #[arg(short, long)]
    pub seconds: bool,

    /// Start days at noon (astronomical convention) instead of midnight.
    #[arg(short, long)]
    pub astro: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Value to convert; with no values the current time is used.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,
}

/// Which Julian scalar the invocation works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Days,
    FracDays,
    Seconds,
}

impl Mode {
    /// Accepted positional argument counts: now, from scalar, from fields.
    pub const fn arities(self) -> [usize; 3] {
        match self {
            Self::Days => [0, 1, 3],
            Self::FracDays | Self::Seconds => [0, 1, 6],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Days => "days",
            Self::FracDays => "fracdays",
            Self::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

impl Cli {
    /// The selected mode; clap guarantees exactly one flag is set.
    pub const fn mode(&self) -> Mode {
        if self.days {
            Mode::Days
        } else if self.fracdays {
            Mode::FracDays
        } else {
            Mode::Seconds
        }
    }
}
