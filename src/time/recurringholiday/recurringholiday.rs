use chrono::{Datelike, NaiveDate};

use crate::holiday::holidayerror::Result;

/// A rule that places exactly one holiday in every year.
pub trait RecurringHoliday: Send + Sync {

    fn get_holiday(&self, year: i32) -> Result<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()).is_ok_and(|h| h == *d)
    }
}
