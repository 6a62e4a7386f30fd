pub mod configuration;

pub mod holiday {
    pub mod holidayerror;
    pub mod holiday;
}

pub mod time {
    pub mod dateformat;
    pub mod datewindow;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod weekdaysearchholiday;
    }

    pub mod calendar {
        pub mod finnishcalendar;
    }
}

use chrono::NaiveDate;

pub use configuration::{AllSaintsRule, Configuration};
pub use holiday::holiday::{Holiday, HolidayName, HolidayType};
pub use holiday::holidayerror::{HolidayError, Result};
pub use time::calendar::finnishcalendar::FinnishCalendar;
pub use time::dateformat::{format_date, parse_date};

fn default_calendar() -> Result<FinnishCalendar> {
    FinnishCalendar::new(&Configuration::default())
}

/// All twelve Finnish public holidays of `year`.
pub fn get_holidays(year: i32) -> Result<Vec<Holiday>> {
    default_calendar()?.get_holidays(year)
}

pub fn get_fixed_holidays(year: i32) -> Result<Vec<Holiday>> {
    default_calendar()?.get_fixed_holidays(year)
}

pub fn get_easter_holidays(year: i32) -> Result<Vec<Holiday>> {
    default_calendar()?.get_easter_holidays(year)
}

pub fn get_easter_sunday(year: i32) -> Result<NaiveDate> {
    time::recurringholiday::easterrelatedholiday::easter_sunday(year)
}

pub fn get_midsummer(year: i32) -> Result<Holiday> {
    default_calendar()?.get_midsummer(year)
}
