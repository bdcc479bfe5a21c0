//! Source control collaborators consulted while computing a version

#[cfg(test)]
use mockall::automock;

use crate::version::date::DatePart;
use crate::version::error::SourceError;

/// Supplies the existing version tags for a date
#[cfg_attr(test, automock)]
pub trait TagSource: Send + Sync {
    /// Returns the tags starting with `date` (e.g. "2024.06.01", "2024.06.01-A")
    ///
    /// The result is unordered and may contain tags that are not valid
    /// release versions.
    fn tags_for(&self, date: &DatePart) -> Result<Vec<String>, SourceError>;
}

/// Supplies a short, stable identifier of the current checkout
#[cfg_attr(test, automock)]
pub trait RevisionSource: Send + Sync {
    /// Returns the abbreviated revision hash of HEAD
    fn short_revision(&self) -> Result<String, SourceError>;
}
