use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use log::debug;

use crate::configuration::{AllSaintsRule, Configuration};
use crate::holiday::holiday::{Holiday, HolidayName};
use crate::holiday::holidayerror::{HolidayError, Result};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::weekdaysearchholiday::{
    SearchDirection,
    WeekdaySearchHoliday
};
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterRelatedHoliday,
    ASCENSION_DAY_SHIFT,
    EASTER_MONDAY_SHIFT,
    GOOD_FRIDAY_SHIFT,
    PENTECOST_SHIFT
};

const FIXED_HOLIDAYS: [(HolidayName, u32, u32); 7] = [
    (HolidayName::NewYearsDay, 1, 1),
    (HolidayName::Epiphany, 1, 6),
    (HolidayName::MayDay, 5, 1),
    (HolidayName::AllSaintsDay, 11, 1),
    (HolidayName::IndependenceDay, 12, 6),
    (HolidayName::ChristmasDay, 12, 25),
    (HolidayName::BoxingDay, 12, 26)
];

const EASTER_HOLIDAYS: [(HolidayName, i64); 4] = [
    (HolidayName::GoodFriday, GOOD_FRIDAY_SHIFT),
    (HolidayName::EasterMonday, EASTER_MONDAY_SHIFT),
    (HolidayName::AscensionDay, ASCENSION_DAY_SHIFT),
    (HolidayName::Pentecost, PENTECOST_SHIFT)
];

#[derive(Clone)]
struct HolidayRule {
    name: HolidayName,
    rule: Arc<dyn RecurringHoliday>
}

impl HolidayRule {
    fn holiday(&self, year: i32) -> Result<Holiday> {
        let d = self.rule.get_holiday(year)?;
        Ok(Holiday::public(d, self.name))
    }
}

fn invalid_rule(name: HolidayName) -> HolidayError {
    HolidayError::InternalInvariantViolation(format!("rule table entry for {} is not a calendar date", name))
}

fn fixed_rule(name: HolidayName, month: u32, day: u32) -> Result<Arc<dyn RecurringHoliday>> {
    let rule = FixedDateHoliday::new(month, day).ok_or_else(|| invalid_rule(name))?;
    Ok(Arc::new(rule))
}

fn saturday_search_rule(name: HolidayName, month: u32, day: u32) -> Result<Arc<dyn RecurringHoliday>> {
    let rule = WeekdaySearchHoliday::new(month, day, Weekday::Sat, SearchDirection::OnOrAfter)
        .ok_or_else(|| invalid_rule(name))?;
    Ok(Arc::new(rule))
}

/// Finnish public holidays: seven fixed-date holidays, four holidays tied to
/// Easter and Midsummer Day, always listed in that order.
#[derive(Clone)]
pub struct FinnishCalendar {
    fixed_holidays: Vec<HolidayRule>,
    easter_holidays: Vec<HolidayRule>,
    midsummer: HolidayRule
}

impl FinnishCalendar {
    pub fn new(config: &Configuration) -> Result<FinnishCalendar> {
        let mut fixed_holidays = Vec::with_capacity(FIXED_HOLIDAYS.len());
        for (name, month, day) in FIXED_HOLIDAYS {
            let rule = match (name, config.all_saints_rule()) {
                (HolidayName::AllSaintsDay, AllSaintsRule::FirstSaturday) => saturday_search_rule(name, 10, 31)?,
                _ => fixed_rule(name, month, day)?
            };
            fixed_holidays.push(HolidayRule { name, rule });
        }

        let easter_holidays = EASTER_HOLIDAYS
            .iter()
            .map(|&(name, shift_days)| HolidayRule {
                name,
                rule: Arc::new(EasterRelatedHoliday::new(shift_days))
            })
            .collect();

        let midsummer = HolidayRule {
            name: HolidayName::MidsummerDay,
            rule: saturday_search_rule(HolidayName::MidsummerDay, 6, 20)?
        };

        debug!("built Finnish calendar with {:?}", config);
        Ok(FinnishCalendar { fixed_holidays, easter_holidays, midsummer })
    }

    pub fn get_fixed_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        self.fixed_holidays.iter().map(|r| r.holiday(year)).collect()
    }

    /// Good Friday, Easter Monday, Ascension Day and Pentecost.
    pub fn get_easter_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        self.easter_holidays.iter().map(|r| r.holiday(year)).collect()
    }

    pub fn get_midsummer(&self, year: i32) -> Result<Holiday> {
        self.midsummer.holiday(year)
    }

    /// All twelve holidays of `year`: fixed ones in table order, then the
    /// Easter holidays, then Midsummer Day.
    pub fn get_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        let mut holidays = self.get_fixed_holidays(year)?;
        holidays.extend(self.get_easter_holidays(year)?);
        holidays.push(self.get_midsummer(year)?);
        debug!("computed {} holidays for {}", holidays.len(), year);
        Ok(holidays)
    }

    /// The holiday falling on `d`, if any.
    pub fn holiday_on(&self, d: NaiveDate) -> Result<Option<Holiday>> {
        let holidays = self.get_holidays(d.year())?;
        Ok(holidays.into_iter().find(|h| h.naive_date() == d))
    }

    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.fixed_holidays
            .iter()
            .chain(self.easter_holidays.iter())
            .chain(std::iter::once(&self.midsummer))
            .any(|r| r.rule.is_holiday(&d))
    }
}
