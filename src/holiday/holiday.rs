use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::time::dateformat::{format_date, serde_format};

/// Category of a holiday. Only `Public` is produced by the Finnish calendar.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    Public,
    Observance
}

/// Serialized as its display text.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum HolidayName {
    NewYearsDay,
    Epiphany,
    MayDay,
    AllSaintsDay,
    IndependenceDay,
    ChristmasDay,
    BoxingDay,
    GoodFriday,
    EasterMonday,
    AscensionDay,
    Pentecost,
    MidsummerDay
}

impl HolidayName {
    pub const ALL: [HolidayName; 12] = [
        HolidayName::NewYearsDay,
        HolidayName::Epiphany,
        HolidayName::MayDay,
        HolidayName::AllSaintsDay,
        HolidayName::IndependenceDay,
        HolidayName::ChristmasDay,
        HolidayName::BoxingDay,
        HolidayName::GoodFriday,
        HolidayName::EasterMonday,
        HolidayName::AscensionDay,
        HolidayName::Pentecost,
        HolidayName::MidsummerDay
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayName::NewYearsDay => "New Year's Day",
            HolidayName::Epiphany => "Epiphany",
            HolidayName::MayDay => "May Day",
            HolidayName::AllSaintsDay => "All Saints' Day",
            HolidayName::IndependenceDay => "Independence Day",
            HolidayName::ChristmasDay => "Christmas Day",
            HolidayName::BoxingDay => "Boxing Day",
            HolidayName::GoodFriday => "Good Friday",
            HolidayName::EasterMonday => "Easter Monday",
            HolidayName::AscensionDay => "Ascension Day",
            HolidayName::Pentecost => "Pentecost",
            HolidayName::MidsummerDay => "Midsummer Day"
        }
    }
}

impl fmt::Display for HolidayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HolidayName {
    type Err = String;

    fn from_str(s: &str) -> Result<HolidayName, String> {
        HolidayName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown holiday name '{}'", s))
    }
}

impl Serialize for HolidayName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HolidayName {
    fn deserialize<D>(deserializer: D) -> Result<HolidayName, D::Error>
        where D: Deserializer<'de> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A single holiday occurrence. On the wire it is
/// `{"date": "DD-MM-YYYY", "name": "...", "type": "public"}`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(with = "serde_format")]
    date: NaiveDate,
    name: HolidayName,
    holiday_type: HolidayType
}

impl Holiday {
    pub fn new(date: NaiveDate, name: HolidayName, holiday_type: HolidayType) -> Holiday {
        Holiday { date, name, holiday_type }
    }

    pub fn public(date: NaiveDate, name: HolidayName) -> Holiday {
        Holiday::new(date, name, HolidayType::Public)
    }

    /// The date rendered as `DD-MM-YYYY`.
    pub fn date(&self) -> String {
        format_date(self.date)
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> HolidayName {
        self.name
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }
}
