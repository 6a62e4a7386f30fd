use chrono::{Datelike, NaiveDate, Weekday};
use log::error;

use crate::holiday::holidayerror::{HolidayError, Result};
use crate::time::datewindow::DateWindow;
use super::recurringholiday::RecurringHoliday;

const DAYS_IN_WEEK: u64 = 7;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchDirection {
    OnOrAfter,
    OnOrBefore
}

/// The first `weekday` found when walking one week away from an anchor
/// (month, day), e.g. Midsummer Day is the Saturday on or after June 20.
#[derive(Clone)]
pub struct WeekdaySearchHoliday {
    month: u32,
    day: u32,
    weekday: Weekday,
    direction: SearchDirection
}

impl WeekdaySearchHoliday {
    pub fn new(month: u32, day: u32, weekday: Weekday, direction: SearchDirection) -> Option<WeekdaySearchHoliday> {
        NaiveDate::from_ymd_opt(2001, month, day)
            .map(|_| WeekdaySearchHoliday { month, day, weekday, direction })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    fn window(&self, anchor: NaiveDate) -> Option<DateWindow> {
        match self.direction {
            SearchDirection::OnOrAfter => DateWindow::starting_at(anchor, DAYS_IN_WEEK),
            SearchDirection::OnOrBefore => DateWindow::ending_at(anchor, DAYS_IN_WEEK)
        }
    }
}

impl RecurringHoliday for WeekdaySearchHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        let anchor = NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or_else(|| HolidayError::invalid_year(year))?;
        let window = self.window(anchor)
            .ok_or_else(|| HolidayError::invalid_year(year))?;

        let found = match self.direction {
            SearchDirection::OnOrAfter => window.iter().find(|d| d.weekday() == self.weekday),
            SearchDirection::OnOrBefore => window.iter().rev().find(|d| d.weekday() == self.weekday)
        };

        // Any seven consecutive days hold every weekday once.
        match found {
            Some(d) if d.year() == year => Ok(d),
            _ => {
                error!("no {:?} found within a week {:?} {}", self.weekday, self.direction, anchor);
                Err(HolidayError::InternalInvariantViolation(format!(
                    "no {:?} within a week {:?} {} in year {}",
                    self.weekday, self.direction, anchor, year
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midsummer() -> WeekdaySearchHoliday {
        WeekdaySearchHoliday::new(6, 20, Weekday::Sat, SearchDirection::OnOrAfter).unwrap()
    }

    #[test]
    fn midsummer_day() {
        assert_eq!(midsummer().get_holiday(2023).unwrap(), date(2023, 6, 24));
        assert_eq!(midsummer().get_holiday(2024).unwrap(), date(2024, 6, 22));
        assert_eq!(midsummer().get_holiday(2025).unwrap(), date(2025, 6, 21));
        // June 20 itself is a Saturday
        assert_eq!(midsummer().get_holiday(2026).unwrap(), date(2026, 6, 20));
    }

    #[test]
    fn stays_inside_the_window() {
        for year in 1583..=2600 {
            let d = midsummer().get_holiday(year).unwrap();
            assert_eq!(d.weekday(), Weekday::Sat);
            assert_eq!(d.month(), 6);
            assert!((20..=26).contains(&d.day()), "{}", d);
        }
    }

    #[test]
    fn searching_backwards() {
        // Saturday on or before November 6
        let rule = WeekdaySearchHoliday::new(11, 6, Weekday::Sat, SearchDirection::OnOrBefore).unwrap();
        assert_eq!(rule.get_holiday(2025).unwrap(), date(2025, 11, 1));
        assert_eq!(rule.get_holiday(2026).unwrap(), date(2026, 10, 31));
    }

    #[test]
    fn window_crossing_the_year_is_an_invariant_violation() {
        let rule = WeekdaySearchHoliday::new(12, 30, Weekday::Fri, SearchDirection::OnOrAfter).unwrap();
        // December 30, 2025 is a Tuesday: the next Friday is January 2, 2026
        assert!(matches!(rule.get_holiday(2025), Err(HolidayError::InternalInvariantViolation(_))));
    }

    #[test]
    fn rejects_impossible_anchor() {
        assert!(WeekdaySearchHoliday::new(6, 31, Weekday::Sat, SearchDirection::OnOrAfter).is_none());
    }
}
