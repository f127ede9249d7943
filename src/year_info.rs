use crate::JalaaliError;
use crate::consts::{
    CYCLE_LEAP_YEARS, CYCLE_YEARS, GREGORIAN_YEAR_OFFSET, LEAP_SUB_CYCLE, LEAP_YEAR_BREAKS,
    MAX_JALAALI_YEAR, MIN_JALAALI_YEAR,
};

/// Leap-cycle placement of a Jalaali year.
///
/// Answers whether the year is leap (366 days) or common (365 days), and on
/// which day of March (Gregorian) its Farvardin 1 falls. Derived per call
/// from the break table; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaaliYearInfo {
    leap_offset: i32,
    gregorian_year: i32,
    march_day: i32,
}

impl JalaaliYearInfo {
    /// Computes the leap-cycle placement of `jalaali_year`.
    ///
    /// # Errors
    /// Returns [`JalaaliError::YearOutOfRange`] if the year is outside
    /// `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR`.
    ///
    /// # Example
    ///
    /// ```
    /// use jalaali_date::JalaaliYearInfo;
    ///
    /// let info = JalaaliYearInfo::new(1400).unwrap();
    /// assert_eq!(2021, info.gregorian_year());
    /// assert_eq!(21, info.march_day());
    /// assert!(!info.is_leap());
    /// ```
    pub fn new(jalaali_year: i32) -> Result<Self, JalaaliError> {
        if !(MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR).contains(&jalaali_year) {
            return Err(JalaaliError::YearOutOfRange(jalaali_year));
        }

        let gregorian_year = jalaali_year + GREGORIAN_YEAR_OFFSET;
        let mut leap_jalaali = -14;
        let mut break_point = LEAP_YEAR_BREAKS[0];
        let mut gap = 0;

        // Walk to the break interval containing the year, accumulating the
        // leap days of every fully-elapsed interval on the way.
        for &next_break in &LEAP_YEAR_BREAKS[1..] {
            gap = next_break - break_point;
            if jalaali_year < next_break {
                break;
            }
            leap_jalaali +=
                gap / CYCLE_YEARS * CYCLE_LEAP_YEARS + gap % CYCLE_YEARS / LEAP_SUB_CYCLE;
            break_point = next_break;
        }
        let mut years_past = jalaali_year - break_point;

        // Leap days from AD 621 to the start of this Jalaali year.
        leap_jalaali += years_past / CYCLE_YEARS * CYCLE_LEAP_YEARS
            + (years_past % CYCLE_YEARS + 3) / LEAP_SUB_CYCLE;
        // Short-interval patch keeping the leap count continuous across a
        // break whose gap steps out of the 33-year rhythm by four years.
        if gap % CYCLE_YEARS == 4 && gap - years_past == 4 {
            leap_jalaali += 1;
        }

        // Gregorian leap days over the same span.
        let leap_gregorian = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;

        // Gregorian day of March of Farvardin 1.
        let march_day = 20 + leap_jalaali - leap_gregorian;

        // Years since the last leap year; re-anchor when fewer than six years
        // remain before the next break so the offset stays consistent there.
        if gap - years_past < 6 {
            years_past = years_past - gap + (gap + 4) / CYCLE_YEARS * CYCLE_YEARS;
        }
        let mut leap_offset = ((years_past + 1) % CYCLE_YEARS - 1) % LEAP_SUB_CYCLE;
        if leap_offset == -1 {
            leap_offset = 4;
        }

        Ok(Self {
            leap_offset,
            gregorian_year,
            march_day,
        })
    }

    /// Years since the last leap year, 0 to 4. Zero means the year itself
    /// is leap.
    #[inline]
    pub const fn leap_offset(self) -> i32 {
        self.leap_offset
    }

    /// The Gregorian year this Jalaali year begins in.
    #[inline]
    pub const fn gregorian_year(self) -> i32 {
        self.gregorian_year
    }

    /// The day of March (Gregorian) on which Farvardin 1 falls, 20 to 22
    /// over the supported range.
    #[inline]
    pub const fn march_day(self) -> i32 {
        self.march_day
    }

    /// Whether this Jalaali year is leap (366 days long).
    #[inline]
    pub const fn is_leap(self) -> bool {
        self.leap_offset == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_info_cases() {
        struct TestCase {
            year: i32,
            leap_offset: i32,
            gregorian_year: i32,
            march_day: i32,
        }

        let cases = [
            TestCase {
                year: -61,
                leap_offset: 0,
                gregorian_year: 560,
                march_day: 20,
            },
            TestCase {
                year: 1,
                leap_offset: 1,
                gregorian_year: 622,
                march_day: 22,
            },
            TestCase {
                year: 979,
                leap_offset: 1,
                gregorian_year: 1600,
                march_day: 21,
            },
            TestCase {
                year: 1348,
                leap_offset: 2,
                gregorian_year: 1969,
                march_day: 21,
            },
            TestCase {
                year: 1393,
                leap_offset: 2,
                gregorian_year: 2014,
                march_day: 21,
            },
            TestCase {
                year: 1395,
                leap_offset: 0,
                gregorian_year: 2016,
                march_day: 20,
            },
            TestCase {
                year: 1399,
                leap_offset: 0,
                gregorian_year: 2020,
                march_day: 20,
            },
            TestCase {
                year: 1400,
                leap_offset: 1,
                gregorian_year: 2021,
                march_day: 21,
            },
            TestCase {
                year: 1403,
                leap_offset: 0,
                gregorian_year: 2024,
                march_day: 20,
            },
            TestCase {
                year: 1404,
                leap_offset: 1,
                gregorian_year: 2025,
                march_day: 21,
            },
            TestCase {
                year: 1407,
                leap_offset: 4,
                gregorian_year: 2028,
                march_day: 20,
            },
            TestCase {
                year: 1408,
                leap_offset: 0,
                gregorian_year: 2029,
                march_day: 20,
            },
            TestCase {
                year: 3177,
                leap_offset: 4,
                gregorian_year: 3798,
                march_day: 20,
            },
        ];

        for case in &cases {
            let info = JalaaliYearInfo::new(case.year).unwrap();
            assert_eq!(
                info.leap_offset(),
                case.leap_offset,
                "leap offset of year {}",
                case.year
            );
            assert_eq!(
                info.gregorian_year(),
                case.gregorian_year,
                "gregorian year of year {}",
                case.year
            );
            assert_eq!(
                info.march_day(),
                case.march_day,
                "march day of year {}",
                case.year
            );
        }
    }

    #[test]
    fn test_year_below_range() {
        let result = JalaaliYearInfo::new(-62);
        assert!(matches!(result, Err(JalaaliError::YearOutOfRange(-62))));
    }

    #[test]
    fn test_year_above_range() {
        let result = JalaaliYearInfo::new(3178);
        assert!(matches!(result, Err(JalaaliError::YearOutOfRange(3178))));
    }

    #[test]
    fn test_range_endpoints_succeed() {
        assert!(JalaaliYearInfo::new(-61).is_ok());
        assert!(JalaaliYearInfo::new(3177).is_ok());
    }

    #[test]
    fn test_is_leap_around_1400() {
        // The documented leap years of the current era, with the five-year
        // stretch between 1403 and 1408.
        for year in [1391, 1395, 1399, 1403, 1408, 1412] {
            let info = JalaaliYearInfo::new(year).unwrap();
            assert!(info.is_leap(), "{year} should be leap");
        }
        for year in [1400, 1401, 1402, 1404, 1405, 1406, 1407] {
            let info = JalaaliYearInfo::new(year).unwrap();
            assert!(!info.is_leap(), "{year} should not be leap");
        }
    }

    #[test]
    fn test_leap_count_over_super_cycle() {
        let count = (1..=2820)
            .filter(|&year| JalaaliYearInfo::new(year).unwrap().is_leap())
            .count();
        assert_eq!(count, 683);
    }

    #[test]
    fn test_offsets_cycle_after_leap() {
        // Offsets count up from a leap year: 1399 leap, then 1, 2, 3, leap...
        let offsets: Vec<i32> = (1399..=1412)
            .map(|year| JalaaliYearInfo::new(year).unwrap().leap_offset())
            .collect();
        assert_eq!(offsets, [0, 1, 2, 3, 0, 1, 2, 3, 4, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_march_day_bounds() {
        for year in MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR {
            let info = JalaaliYearInfo::new(year).unwrap();
            assert!(
                (20..=22).contains(&info.march_day()),
                "march day {} of year {year} out of bounds",
                info.march_day()
            );
            assert!(
                (0..=4).contains(&info.leap_offset()),
                "leap offset {} of year {year} out of bounds",
                info.leap_offset()
            );
        }
    }

    #[test]
    fn test_gregorian_year_offset() {
        let info = JalaaliYearInfo::new(1348).unwrap();
        assert_eq!(info.gregorian_year(), 1348 + 621);
    }
}
