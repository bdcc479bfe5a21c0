use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Too many releases for {date} (max Z)")]
    CapacityExceeded { date: String },

    #[error("Date out of range for a YYYY.MM.DD version: {0}")]
    DateOutOfRange(String),

    #[error("Invalid date part: {0}")]
    InvalidDatePart(String),

    #[error("Invalid release version: {0}")]
    InvalidReleaseVersion(String),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source control metadata unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid source control output: {0}")]
    InvalidOutput(String),
}
