//! Hour-of-day value type.
//!
//! Check-in/check-out times and early/late limits are configured as float
//! hours of the day (`14.5` = 14:30), the convention used throughout the
//! reservation data model. This module wraps that float in a validated type
//! and provides the conversions to wall-clock values.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime, Time};

/// A validated float hour-of-day in `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct HourOfDay(f64);

impl HourOfDay {
    /// Creates a new `HourOfDay`.
    ///
    /// # Arguments
    ///
    /// * `value` - The hour of the day (e.g. `14.5` for 14:30)
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite or not in `[0, 24)`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || !(0.0..24.0).contains(&value) {
            return Err(DomainError::InvalidHourOfDay(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw float hour value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Projects a datetime onto its float hour of day (`hour + minute/60`).
    ///
    /// The date component is dropped; this is the projection used for daily
    /// threshold comparisons.
    #[must_use]
    pub fn of(datetime: &PrimitiveDateTime) -> Self {
        Self(f64::from(datetime.hour()) + f64::from(datetime.minute()) / 60.0)
    }

    /// Converts the float hour to a wall-clock `Time`, rounding to the
    /// nearest minute.
    #[must_use]
    pub fn to_time(&self) -> Time {
        let mut hours: u8 = self.0 as u8;
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let mut minutes: u8 = ((self.0 - f64::from(hours)) * 60.0).round() as u8;
        if minutes == 60 {
            // Rounding 23.999 up must not leave the day.
            if hours == 23 {
                minutes = 59;
            } else {
                hours += 1;
                minutes = 0;
            }
        }
        Time::from_hms(hours, minutes, 0).unwrap_or(Time::MIDNIGHT)
    }

    /// Combines this hour with a calendar date into a planned datetime.
    #[must_use]
    pub fn combine(&self, date: Date) -> PrimitiveDateTime {
        PrimitiveDateTime::new(date, self.to_time())
    }
}

impl TryFrom<f64> for HourOfDay {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HourOfDay> for f64 {
    fn from(hour: HourOfDay) -> Self {
        hour.value()
    }
}

impl std::fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let time: Time = self.to_time();
        write!(f, "{:02}:{:02}", time.hour(), time.minute())
    }
}
