//! Release versions: `YYYY.MM.DD` with an optional `-A`..`-Z` same-day suffix

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::version::date::DatePart;
use crate::version::error::VersionError;

/// Highest ordinal a release can carry (suffix `Z`)
pub const MAX_ORDINAL: u8 = 26;

static RELEASE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}\.\d{2}\.\d{2})(?:-([A-Z]))?$").expect("valid release tag pattern")
});

/// A release version for a single calendar day
///
/// Ordinal 0 is the unsuffixed first release of the day; ordinal `n` in
/// `1..=26` renders with the suffix letter `'A' + n - 1`. Ordering is by
/// date, then ordinal, so `D < D-A < D-B < D+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion {
    date: DatePart,
    ordinal: u8,
}

impl ReleaseVersion {
    /// The unsuffixed first release of `date`
    pub fn first(date: DatePart) -> Self {
        Self { date, ordinal: 0 }
    }

    pub fn date(&self) -> DatePart {
        self.date
    }

    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// The same-day release following this one
    pub fn next(&self) -> Result<Self, VersionError> {
        let ordinal = self.ordinal + 1;
        if ordinal > MAX_ORDINAL {
            return Err(VersionError::CapacityExceeded {
                date: self.date.to_string(),
            });
        }
        Ok(Self {
            date: self.date,
            ordinal,
        })
    }

    pub fn suffix(&self) -> Option<char> {
        (self.ordinal > 0).then(|| char::from(b'A' + self.ordinal - 1))
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix() {
            Some(letter) => write!(f, "{}-{}", self.date, letter),
            None => write!(f, "{}", self.date),
        }
    }
}

impl FromStr for ReleaseVersion {
    type Err = VersionError;

    /// Parses `YYYY.MM.DD` or `YYYY.MM.DD-[A-Z]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RELEASE_TAG
            .captures(s)
            .ok_or_else(|| VersionError::InvalidReleaseVersion(s.to_string()))?;
        let date: DatePart = caps[1].parse()?;
        let ordinal = caps
            .get(2)
            .and_then(|m| m.as_str().bytes().next())
            .map_or(0, letter_ordinal);

        Ok(Self { date, ordinal })
    }
}

fn letter_ordinal(letter: u8) -> u8 {
    letter - b'A' + 1
}

/// Compute the next release version for `date` given the existing tags
///
/// Tags that are not `date` or `date-[A-Z]` are ignored. With no matching
/// tag the bare date is returned; otherwise the release after the highest
/// existing one. Gaps in the suffix sequence are never backfilled.
pub fn compute_release_version(
    date: &DatePart,
    existing_tags: &[String],
) -> Result<ReleaseVersion, VersionError> {
    let date_str = date.to_string();
    let pattern = Regex::new(&format!(r"^{}(?:-([A-Z]))?$", regex::escape(&date_str)))
        .expect("escaped date part is a valid pattern");

    let latest = existing_tags
        .iter()
        .filter_map(|tag| pattern.captures(tag.trim()))
        .map(|caps| {
            let ordinal = caps
                .get(1)
                .and_then(|m| m.as_str().bytes().next())
                .map_or(0, letter_ordinal);
            ReleaseVersion {
                date: *date,
                ordinal,
            }
        })
        .max();

    match latest {
        Some(latest) => {
            debug!("Latest release tag for {} is {}", date_str, latest);
            latest.next()
        }
        None => Ok(ReleaseVersion::first(*date)),
    }
}
