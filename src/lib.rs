mod consts;
mod julian_day;
mod prelude;
mod types;
mod year_info;

pub use consts::*;
pub use julian_day::JulianDay;
pub use types::{Calendar, CivilDate, DateLike, JalaaliDate};
pub use year_info::JalaaliYearInfo;

/// Error type for Jalaali conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JalaaliError {
    /// The Jalaali year, given directly or derived from a day number, falls
    /// outside the coverage of the break table.
    #[error(
        "Invalid Jalaali year: {0} (must be {min} to {max})",
        min = MIN_JALAALI_YEAR,
        max = MAX_JALAALI_YEAR
    )]
    YearOutOfRange(i32),
}

/// Converts a proleptic Gregorian date to the Jalaali calendar.
///
/// Accepts anything exposing year/month/day accessors: a bare
/// `(year, month, day)` tuple or a [`CivilDate`]. A `CivilDate` tagged
/// [`Calendar::Julian`] is still read as Gregorian here; use
/// [`CivilDate::to_jalaali`] to honor the tag.
///
/// # Errors
/// Returns [`JalaaliError::YearOutOfRange`] if the date falls outside the
/// supported span (Gregorian years 560 to 3798).
///
/// # Example
///
/// ```
/// use jalaali_date::{JalaaliDate, gregorian_to_jalaali};
///
/// let date = gregorian_to_jalaali((2021, 3, 21)).unwrap();
/// assert_eq!(date, JalaaliDate::new(1400, 1, 1));
/// ```
pub fn gregorian_to_jalaali(date: impl DateLike) -> Result<JalaaliDate, JalaaliError> {
    JulianDay::from_gregorian(date.year(), date.month(), date.day()).jalaali()
}

/// Converts a Jalaali date to the proleptic Gregorian calendar.
///
/// # Errors
/// Returns [`JalaaliError::YearOutOfRange`] if `year` is outside
/// `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR`.
///
/// # Example
///
/// ```
/// use jalaali_date::{CivilDate, jalaali_to_gregorian};
///
/// let date = jalaali_to_gregorian(1400, 1, 1).unwrap();
/// assert_eq!(date, CivilDate::gregorian(2021, 3, 21));
/// ```
pub fn jalaali_to_gregorian(year: i32, month: i32, day: i32) -> Result<CivilDate, JalaaliError> {
    JulianDay::from_jalaali(JalaaliDate::new(year, month, day)).map(JulianDay::gregorian)
}

/// Whether the given Jalaali year is leap (366 days long).
///
/// # Errors
/// Returns [`JalaaliError::YearOutOfRange`] if `year` is outside
/// `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR`.
pub fn is_leap_jalaali_year(year: i32) -> Result<bool, JalaaliError> {
    Ok(JalaaliYearInfo::new(year)?.is_leap())
}

/// Number of days in the given Jalaali month.
///
/// Only Esfand consults the leap cycle, so months 1 to 11 never fail.
///
/// # Errors
/// Returns [`JalaaliError::YearOutOfRange`] for Esfand of a year outside
/// `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR`.
pub fn jalaali_month_length(year: i32, month: i32) -> Result<i32, JalaaliError> {
    if month < MEHR {
        return Ok(31);
    }
    if month < ESFAND {
        return Ok(30);
    }
    if is_leap_jalaali_year(year)? {
        Ok(ESFAND_DAYS_LEAP)
    } else {
        Ok(ESFAND_DAYS)
    }
}

/// Whether the triple denotes an existing Jalaali calendar day.
///
/// The conversions themselves do not validate months or days; this is the
/// caller-side check for untrusted input. Out-of-range years are simply
/// invalid, never an error.
pub fn is_valid_jalaali_date(year: i32, month: i32, day: i32) -> bool {
    (MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR).contains(&year)
        && (FARVARDIN..=ESFAND).contains(&month)
        && day >= 1
        && jalaali_month_length(year, month).is_ok_and(|length| day <= length)
}
