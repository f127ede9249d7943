/// Jalaali years marking the boundaries of the intervals over which the
/// leap-year rule follows a stable cycle. The astronomical Jalaali calendar
/// does not keep a fixed 4-year rhythm over long spans, so these
/// empirically-derived break points are needed for correctness across the
/// whole supported range.
pub const LEAP_YEAR_BREAKS: [i32; 20] = [
    -61, // start of the supported range
    9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394,
    2456,
    3178, // first year past the supported range
];

/// Earliest Jalaali year the break table covers (inclusive)
pub const MIN_JALAALI_YEAR: i32 = LEAP_YEAR_BREAKS[0];

/// Latest Jalaali year the break table covers (inclusive)
pub const MAX_JALAALI_YEAR: i32 = LEAP_YEAR_BREAKS[19] - 1;

/// Month number for Farvardin, the first Jalaali month
pub const FARVARDIN: i32 = 1;
/// Month number for Mehr, the first of the 30-day months
pub const MEHR: i32 = 7;
/// Month number for Esfand, the last Jalaali month
pub const ESFAND: i32 = 12;

/// Days in Esfand for common years
pub const ESFAND_DAYS: i32 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: i32 = 30;

/// Years in one Jalaali leap cycle
pub(crate) const CYCLE_YEARS: i32 = 33;
/// Leap years inside one 33-year cycle
pub(crate) const CYCLE_LEAP_YEARS: i32 = 8;
/// Years between consecutive leap years inside a cycle
pub(crate) const LEAP_SUB_CYCLE: i32 = 4;

/// Offset between a Jalaali year and the Gregorian year its Farvardin 1 falls in
pub(crate) const GREGORIAN_YEAR_OFFSET: i32 = 621;
/// Gregorian month number for March, the month of the Jalaali new year
pub(crate) const MARCH: i32 = 3;
