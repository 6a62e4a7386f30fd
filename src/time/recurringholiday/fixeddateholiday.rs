use chrono::NaiveDate;

use crate::holiday::holidayerror::{HolidayError, Result};
use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// `None` when (month, day) does not exist in a non-leap year.
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        NaiveDate::from_ymd_opt(2001, month, day)
            .map(|_| FixedDateHoliday { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or_else(|| HolidayError::invalid_year(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(FixedDateHoliday::new(2, 29).is_none());
        assert!(FixedDateHoliday::new(13, 1).is_none());
        assert!(FixedDateHoliday::new(11, 31).is_none());
    }

    #[test]
    fn places_on_declared_day() {
        let independence = FixedDateHoliday::new(12, 6).unwrap();
        let d = independence.get_holiday(2025).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 12, 6).unwrap());
        assert!(independence.is_holiday(&d));
        assert!(!independence.is_holiday(&NaiveDate::from_ymd_opt(2025, 12, 7).unwrap()));
    }

    #[test]
    fn unrepresentable_year_is_invalid_argument() {
        let new_year = FixedDateHoliday::new(1, 1).unwrap();
        assert!(matches!(new_year.get_holiday(i32::MAX), Err(HolidayError::InvalidArgument(_))));
    }
}
