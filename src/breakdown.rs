//! Elapsed-time breakdown arithmetic for the ageing counter.
//!
//! A [`Breakdown`] splits a raw elapsed-seconds count into years, months,
//! days, hours, minutes and seconds using fixed-length calendar units
//! (12 months per year, 30 days per month, 24 hours per day). The same
//! units drive both directions: decomposing a seconds count and advancing
//! an existing breakdown one second at a time with carry propagation.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_agecounter::breakdown::Breakdown;
//!
//! let b = Breakdown::from_secs(90_061);
//! assert_eq!(b.to_string(), "1d 1h 1m 1s");
//!
//! let mut b = Breakdown::from_secs(59);
//! b.advance();
//! assert_eq!(b.to_string(), "0d 0h 1m 0s");
//! ```

use std::fmt;
use std::time::Duration;

/// Seconds in one minute.
pub const SECS_PER_MINUTE: u64 = 60;
/// Seconds in one hour.
pub const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
/// Seconds in one day.
pub const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
/// Seconds in one 30-day month.
pub const SECS_PER_MONTH: u64 = 30 * SECS_PER_DAY;
/// Seconds in one 12-month (360-day) year.
pub const SECS_PER_YEAR: u64 = 12 * SECS_PER_MONTH;

/// An elapsed duration split into fixed-length calendar fields.
///
/// Field ranges: `seconds` and `minutes` in `0..60`, `hours` in `0..24`,
/// `days` in `0..30`, `months` in `0..12`. `years` is unbounded.
/// [`Breakdown::from_secs`] always produces fields within these ranges and
/// [`Breakdown::advance`] preserves them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    /// Whole 360-day years.
    pub years: u64,
    /// Whole 30-day months.
    pub months: u64,
    /// Whole days.
    pub days: u64,
    /// Whole hours.
    pub hours: u64,
    /// Whole minutes.
    pub minutes: u64,
    /// Remaining seconds.
    pub seconds: u64,
}

impl Breakdown {
    /// Decomposes a raw elapsed-seconds count, largest unit first.
    ///
    /// Each stage takes the truncating quotient for its unit and passes the
    /// remainder on to the next, so [`total_secs`](Self::total_secs) of the
    /// result reconstructs the input exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_agecounter::breakdown::Breakdown;
    ///
    /// assert_eq!(Breakdown::from_secs(0), Breakdown::default());
    ///
    /// let b = Breakdown::from_secs(3_661);
    /// assert_eq!((b.hours, b.minutes, b.seconds), (1, 1, 1));
    /// ```
    pub fn from_secs(total: u64) -> Self {
        let years = total / SECS_PER_YEAR;
        let rem = total % SECS_PER_YEAR;
        let months = rem / SECS_PER_MONTH;
        let rem = rem % SECS_PER_MONTH;
        let days = rem / SECS_PER_DAY;
        let rem = rem % SECS_PER_DAY;
        let hours = rem / SECS_PER_HOUR;
        let rem = rem % SECS_PER_HOUR;
        let minutes = rem / SECS_PER_MINUTE;
        let seconds = rem % SECS_PER_MINUTE;

        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Decomposes a [`Duration`], dropping any sub-second remainder.
    pub fn from_duration(d: Duration) -> Self {
        Self::from_secs(d.as_secs())
    }

    /// Reconstructs the elapsed-seconds count from the fields.
    pub fn total_secs(&self) -> u64 {
        self.years * SECS_PER_YEAR
            + self.months * SECS_PER_MONTH
            + self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }

    /// Advances the breakdown by one second, carrying between fields.
    ///
    /// The carry checks run in a fixed order from seconds up to years, and
    /// each check looks at the field the previous one may have just bumped,
    /// so crossing several unit boundaries in the same second cascades all
    /// the way up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_agecounter::breakdown::Breakdown;
    ///
    /// let mut b = Breakdown {
    ///     hours: 23,
    ///     minutes: 59,
    ///     seconds: 59,
    ///     ..Breakdown::default()
    /// };
    /// b.advance();
    /// assert_eq!(b.to_string(), "1d 0h 0m 0s");
    /// ```
    pub fn advance(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
        if self.minutes == 60 {
            self.minutes = 0;
            self.hours += 1;
        }
        if self.hours == 24 {
            self.hours = 0;
            self.days += 1;
        }
        if self.days == 30 {
            self.days = 0;
            self.months += 1;
        }
        if self.months == 12 {
            self.months = 0;
            self.years += 1;
        }
    }
}

impl fmt::Display for Breakdown {
    /// Formats the breakdown with single-letter unit suffixes.
    ///
    /// The years segment is omitted when zero, and so is the months segment;
    /// the two are checked independently. Days, hours, minutes and seconds
    /// always render.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years != 0 {
            write!(f, "{}Y ", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M ", self.months)?;
        }
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
