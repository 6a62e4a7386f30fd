use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    #[error("cannot parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error)
}

impl HolidayError {
    pub fn invalid_year(year: i32) -> HolidayError {
        HolidayError::InvalidArgument(format!("year {} is outside the supported calendar range", year))
    }
}

pub type Result<T, E = HolidayError> = std::result::Result<T, E>;
