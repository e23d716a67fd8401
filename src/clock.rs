//! Access to the current time.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::ConvertError;

/// Source of the current UTC time as seconds since the Unix epoch.
pub trait Clock {
    /// # Errors
    /// Implementations may fail if no time source is available.
    fn unix_seconds(&self) -> Result<f64, ConvertError>;
}

/// The host's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> Result<f64, ConvertError> {
        let seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs_f64(),
            // Clock set before 1970
            Err(err) => -err.duration().as_secs_f64(),
        };
        Ok(seconds)
    }
}

/// A clock frozen at a given Unix time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn unix_seconds(&self) -> Result<f64, ConvertError> {
        Ok(self.0)
    }
}
