use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::holiday::holidayerror::{HolidayError, Result};

/// How All Saints' Day is placed.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum AllSaintsRule {
    /// Always November 1.
    #[default]
    FixedDate,
    /// The Saturday falling between October 31 and November 6.
    FirstSaturday
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    all_saints_rule: AllSaintsRule
}

impl Configuration {
    pub fn new(all_saints_rule: AllSaintsRule) -> Configuration {
        Configuration { all_saints_rule }
    }

    pub fn all_saints_rule(&self) -> AllSaintsRule {
        self.all_saints_rule
    }

    pub fn from_json_str(json: &str) -> Result<Configuration> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|source| HolidayError::Io {
            path: path.to_path_buf(),
            source
        })?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
