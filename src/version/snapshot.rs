//! Development (snapshot) versions: `YYYY.MM.DD-<revision>`

use crate::version::date::DatePart;

/// Revision token used when no source control metadata is available
pub const FALLBACK_REVISION: &str = "nogit";

/// Length of the abbreviated revision hash
pub const REVISION_LENGTH: usize = 8;

/// Compute a snapshot version from the date and an optional revision
pub fn compute_snapshot_version(date: &DatePart, revision: Option<&str>) -> String {
    format!("{}-{}", date, revision.unwrap_or(FALLBACK_REVISION))
}
