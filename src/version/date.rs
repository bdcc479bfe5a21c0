//! Calendar date component shared by release and snapshot versions

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};

use crate::version::error::VersionError;

/// Format used for the date component (`YYYY.MM.DD`)
const DATE_FORMAT: &str = "%Y.%m.%d";

/// A UTC calendar date rendered as `YYYY.MM.DD`
///
/// The rendered form is always exactly 10 characters, so only years
/// `0..=9999` are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatePart(NaiveDate);

impl DatePart {
    pub fn new(date: NaiveDate) -> Result<Self, VersionError> {
        if !(0..=9999).contains(&date.year()) {
            return Err(VersionError::DateOutOfRange(date.to_string()));
        }
        Ok(Self(date))
    }

    /// Today's date in UTC
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DatePart {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded fields, so enforce the exact width first
        let well_formed = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'.',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(VersionError::InvalidDatePart(s.to_string()));
        }

        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|_| VersionError::InvalidDatePart(s.to_string()))?;
        Self::new(date)
    }
}
