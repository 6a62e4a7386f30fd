//! Properties that hold for every Gregorian year the computus covers.

use chrono::{Datelike, Weekday};
use proptest::prelude::*;

use finholidays::{format_date, get_easter_holidays, get_holidays, get_midsummer, parse_date, HolidayType};

proptest! {
    #[test]
    fn twelve_public_holidays(year in 1583i32..=4099) {
        let holidays = get_holidays(year).unwrap();
        prop_assert_eq!(holidays.len(), 12);
        prop_assert!(holidays.iter().all(|h| h.holiday_type() == HolidayType::Public));
    }

    #[test]
    fn dates_stay_in_the_year(year in 1583i32..=4099) {
        let suffix = format!("-{:04}", year);
        for h in get_holidays(year).unwrap() {
            prop_assert!(h.date().ends_with(&suffix), "{} {}", h.name(), h.date());
            prop_assert_eq!(h.naive_date().year(), year);
        }
    }

    #[test]
    fn midsummer_is_a_june_saturday(year in 1583i32..=4099) {
        let d = get_midsummer(year).unwrap().naive_date();
        prop_assert_eq!(d.weekday(), Weekday::Sat);
        prop_assert_eq!(d.month(), 6);
        prop_assert!((20..=26).contains(&d.day()));
    }

    #[test]
    fn easter_holidays_are_fixed_offsets(year in 1583i32..=4099) {
        let easter = get_easter_holidays(year).unwrap();
        let good_friday = easter[0].naive_date();
        prop_assert_eq!(good_friday.weekday(), Weekday::Fri);
        prop_assert_eq!((easter[1].naive_date() - good_friday).num_days(), 3);
        prop_assert_eq!((easter[2].naive_date() - good_friday).num_days(), 41);
        prop_assert_eq!((easter[3].naive_date() - good_friday).num_days(), 51);
    }

    #[test]
    fn formatted_dates_round_trip(year in 1583i32..=4099) {
        for h in get_holidays(year).unwrap() {
            let text = h.date();
            prop_assert_eq!(format_date(parse_date(&text).unwrap()), text);
        }
    }

    #[test]
    fn repeated_calls_agree(year in 1583i32..=4099) {
        prop_assert_eq!(get_holidays(year).unwrap(), get_holidays(year).unwrap());
    }
}
