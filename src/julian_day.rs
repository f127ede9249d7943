use crate::JalaaliError;
use crate::consts::{FARVARDIN, GREGORIAN_YEAR_OFFSET, MARCH, MEHR};
use crate::prelude::*;
use crate::types::{Calendar, CivilDate, JalaaliDate};
use crate::year_info::JalaaliYearInfo;
use serde::{Deserialize, Serialize};

/// A Julian Day Number: the continuous count of days since noon UT on
/// January 1, 4713 BC (proleptic Julian calendar).
///
/// The value is calendar-agnostic and serves as the pivot between the
/// Jalaali, Gregorian and Julian representations. The closed-form civil
/// conversions follow D. A. Hatcher, Q. Jl. R. Astron. Soc. 25 (1984), 53-55,
/// as modified by K. M. Borkowski, Post. Astron. 25 (1987), 275-279, and hold
/// from March 1, 100101 BC of either calendar to millions of years into the
/// future.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{_0}")]
#[serde(from = "i64", into = "i64")]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a raw day number.
    pub const fn new(jdn: i64) -> Self {
        Self(jdn)
    }

    /// Returns the raw day number.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Computes the Julian Day Number of a civil date.
    ///
    /// Months and days outside their calendar ranges are not rejected; they
    /// produce a deterministic, mathematically consistent day number.
    ///
    /// # Example
    ///
    /// ```
    /// use jalaali_date::{CivilDate, JulianDay};
    ///
    /// let jdn = JulianDay::from_civil(CivilDate::gregorian(2000, 1, 1));
    /// assert_eq!(2451545, jdn.get());
    /// ```
    pub fn from_civil(date: CivilDate) -> Self {
        let (year, month, day) = (
            i64::from(date.year),
            i64::from(date.month),
            i64::from(date.day),
        );
        let mut jdn = (year + (month - 8) / 6 + 100_100) * 1461 / 4
            + (153 * ((month + 9) % 12) + 2) / 5
            + day
            - 34_840_408;
        if date.calendar == Calendar::Gregorian {
            // Century correction: 100-year exceptions minus the 400-year ones.
            jdn = jdn - (year + 100_100 + (month - 8) / 6) / 100 * 3 / 4 + 752;
        }
        Self(jdn)
    }

    /// Represents this day number as a civil date of the given calendar.
    ///
    /// Exact inverse of [`from_civil`](Self::from_civil) for either calendar.
    pub fn civil(self, calendar: Calendar) -> CivilDate {
        let mut julian = 4 * self.0 + 139_361_631;
        if calendar == Calendar::Gregorian {
            julian += (4 * self.0 + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
        }
        let i = julian % 1461 / 4 * 5 + 308;
        let day = (i % 153 / 5 + 1) as i32;
        let month = (i / 153 % 12 + 1) as i32;
        let year = (julian / 1461 - 100_100) as i32 + (8 - month) / 6;
        CivilDate {
            year,
            month,
            day,
            calendar,
        }
    }

    /// Shorthand for [`from_civil`](Self::from_civil) with a Gregorian date.
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Self {
        Self::from_civil(CivilDate::gregorian(year, month, day))
    }

    /// Shorthand for [`civil`](Self::civil) with the Gregorian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use jalaali_date::JulianDay;
    ///
    /// let date = JulianDay::new(2451545).gregorian();
    /// assert_eq!((2000, 1, 1), (date.year, date.month, date.day));
    /// ```
    pub fn gregorian(self) -> CivilDate {
        self.civil(Calendar::Gregorian)
    }

    /// Computes the Julian Day Number of a Jalaali date.
    ///
    /// The day offset within the year encodes the month lengths without
    /// branching: months 1 to 6 have 31 days, months 7 to 11 have 30, and
    /// Esfand has 29 or 30.
    ///
    /// # Errors
    /// Returns [`JalaaliError::YearOutOfRange`] if the year is outside the
    /// break table coverage.
    pub fn from_jalaali(date: JalaaliDate) -> Result<Self, JalaaliError> {
        let info = JalaaliYearInfo::new(date.year)?;
        let farvardin1 = Self::from_gregorian(info.gregorian_year(), MARCH, info.march_day());
        let month = i64::from(date.month);
        Ok(Self(
            farvardin1.0 + (month - 1) * 31 - month / 7 * (month - 7) + i64::from(date.day) - 1,
        ))
    }

    /// Represents this day number as a Jalaali date.
    ///
    /// # Errors
    /// Returns [`JalaaliError::YearOutOfRange`] if the day falls outside the
    /// span the break table covers (Gregorian years 560 to 3798).
    pub fn jalaali(self) -> Result<JalaaliDate, JalaaliError> {
        let gregorian = self.gregorian();
        let mut year = gregorian.year - GREGORIAN_YEAR_OFFSET;
        let info = JalaaliYearInfo::new(year)?;
        let farvardin1 = Self::from_gregorian(gregorian.year, MARCH, info.march_day());

        let mut past_days = self.0 - farvardin1.0;
        if past_days >= 0 {
            if past_days <= 185 {
                // First half of the year: six 31-day months.
                let month = FARVARDIN + (past_days / 31) as i32;
                let day = (past_days % 31 + 1) as i32;
                return Ok(JalaaliDate::new(year, month, day));
            }
            past_days -= 186;
        } else {
            // The day precedes Farvardin 1 and belongs to the tail of the
            // previous Jalaali year.
            year -= 1;
            past_days += 179;
            if info.leap_offset() == 1 {
                past_days += 1;
            }
        }

        let month = MEHR + (past_days / 30) as i32;
        let day = (past_days % 30 + 1) as i32;
        Ok(JalaaliDate::new(year, month, day))
    }
}
