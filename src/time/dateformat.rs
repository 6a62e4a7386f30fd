use chrono::NaiveDate;

use crate::holiday::holidayerror::Result;

/// `DD-MM-YYYY`, zero-padded day and month, four-digit year.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

/// Serde adapter for `NaiveDate` fields carried on the wire as `DD-MM-YYYY`.
pub mod serde_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(d: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        serializer.collect_str(&d.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
        where D: Deserializer<'de> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(de::Error::custom)
    }
}
