use chrono::{Datelike, Duration, NaiveDate};
use log::{error, warn};

use crate::holiday::holidayerror::{HolidayError, Result};
use super::recurringholiday::RecurringHoliday;

/// First year of the Gregorian calendar, from which the computus is meaningful.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

pub const GOOD_FRIDAY_SHIFT: i64 = -2;
pub const EASTER_MONDAY_SHIFT: i64 = 1;
pub const ASCENSION_DAY_SHIFT: i64 = 39;
pub const PENTECOST_SHIFT: i64 = 49;

/// Gregorian Easter Sunday (Meeus/Jones/Butcher).
///
/// Every division is a floor division, so the result stays correct for
/// negative intermediates as well.
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    if year < FIRST_GREGORIAN_YEAR {
        warn!("computing Easter for {} which predates the Gregorian calendar", year);
    }

    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let j = c.rem_euclid(4);
    let k = (32 + 2 * e + 2 * i - h - j).rem_euclid(7);
    let l = (a + 11 * h + 22 * k).div_euclid(451);
    let m = h + k - 7 * l + 114;

    // 3 = March, 4 = April
    let month = m.div_euclid(31) as u32;
    let day = (m.rem_euclid(31) + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| HolidayError::invalid_year(year))
}

/// A holiday a fixed number of days away from Easter Sunday.
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        let easter = easter_sunday(year)?;
        let holiday = easter
            .checked_add_signed(Duration::days(self.shift_days))
            .ok_or_else(|| HolidayError::invalid_year(year))?;

        if holiday.year() != year {
            error!("Easter shift of {} days from {} left year {}", self.shift_days, easter, year);
            return Err(HolidayError::InternalInvariantViolation(format!(
                "Easter shift of {} days from {} falls outside {}",
                self.shift_days, easter, year
            )));
        }

        Ok(holiday)
    }
}
