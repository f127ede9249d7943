use crate::JalaaliError;
use crate::julian_day::JulianDay;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Calendar systems understood by the Julian Day conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Proleptic Gregorian calendar
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Proleptic Julian calendar
    #[display(fmt = "julian")]
    Julian,
}

/// A date in the Jalaali (Persian solar hijri) calendar.
///
/// This is a plain value record: the components are not validated on
/// construction. Out-of-range months or days produce deterministic but
/// calendrically meaningless conversion results; use
/// [`is_valid_jalaali_date`](crate::is_valid_jalaali_date) when the input is
/// untrusted. Only the year is checked, by the conversions themselves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct JalaaliDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl JalaaliDate {
    /// Creates a new Jalaali date without validating the components.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Converts this date to the proleptic Gregorian calendar.
    ///
    /// # Errors
    /// Returns [`JalaaliError::YearOutOfRange`] if the year is outside
    /// the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use jalaali_date::JalaaliDate;
    ///
    /// let nowruz = JalaaliDate::new(1400, 1, 1).to_gregorian().unwrap();
    /// assert_eq!((2021, 3, 21), (nowruz.year, nowruz.month, nowruz.day));
    /// ```
    pub fn to_gregorian(self) -> Result<CivilDate, JalaaliError> {
        JulianDay::from_jalaali(self).map(JulianDay::gregorian)
    }
}

/// A date in the proleptic Gregorian or Julian calendar.
///
/// `year` uses astronomical numbering: 1 BC is year 0, 2 BC is year -1, and
/// so on. Like [`JalaaliDate`], the components are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CivilDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub calendar: Calendar,
}

impl CivilDate {
    /// Creates a new civil date without validating the components.
    pub const fn new(year: i32, month: i32, day: i32, calendar: Calendar) -> Self {
        Self {
            year,
            month,
            day,
            calendar,
        }
    }

    /// Creates a date in the proleptic Gregorian calendar.
    pub const fn gregorian(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, Calendar::Gregorian)
    }

    /// Creates a date in the proleptic Julian calendar.
    pub const fn julian(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, Calendar::Julian)
    }

    /// Converts this date to the Jalaali calendar, honoring the calendar tag.
    ///
    /// # Errors
    /// Returns [`JalaaliError::YearOutOfRange`] if the date falls outside the
    /// span the break table covers.
    pub fn to_jalaali(self) -> Result<JalaaliDate, JalaaliError> {
        JulianDay::from_civil(self).jalaali()
    }
}

/// Capability of a value to expose calendar date components.
///
/// The Gregorian-to-Jalaali entry point accepts any implementor, so callers
/// can pass either a bare `(year, month, day)` tuple or a richer date value.
pub trait DateLike {
    /// Calendar year (astronomical numbering).
    fn year(&self) -> i32;
    /// Calendar month, 1 to 12.
    fn month(&self) -> i32;
    /// Calendar day of the month.
    fn day(&self) -> i32;
}

impl DateLike for (i32, i32, i32) {
    fn year(&self) -> i32 {
        self.0
    }

    fn month(&self) -> i32 {
        self.1
    }

    fn day(&self) -> i32 {
        self.2
    }
}

impl DateLike for CivilDate {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> i32 {
        self.month
    }

    fn day(&self) -> i32 {
        self.day
    }
}
