//! Minimum platform version and the component-wise comparison against it

use std::fmt;
use std::str::FromStr;

/// Lowest platform version the plugin declares support for (1.19.4)
pub const DEFAULT_VERSION_FLOOR: &[u64] = &[1, 19, 4];

/// A minimum platform version, e.g. `1.19.4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFloor {
    components: Vec<u64>,
}

impl VersionFloor {
    pub fn new(components: Vec<u64>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Whether `version` is at or above this floor
    pub fn admits(&self, version: &str) -> bool {
        version_at_least(version, &self.components)
    }
}

impl Default for VersionFloor {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_FLOOR.to_vec())
    }
}

impl FromStr for VersionFloor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components(s)
            .map(Self::new)
            .ok_or_else(|| format!("Invalid version floor: {}", s))
    }
}

impl fmt::Display for VersionFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Parse a dotted numeric version into its components.
///
/// Returns None if any component is not a plain number
/// (e.g. "1.20-pre1", "23w13a").
fn parse_components(version: &str) -> Option<Vec<u64>> {
    let version = version.trim();
    if version.is_empty() {
        return None;
    }
    version
        .split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse::<u64>().ok()
        })
        .collect()
}

/// Check whether `version` is greater than or equal to `floor`
///
/// Components are compared numerically from left to right; a missing
/// component on either side counts as 0, so "1.19" equals "1.19.0".
/// Versions that are not purely numeric never satisfy the floor.
pub fn version_at_least(version: &str, floor: &[u64]) -> bool {
    let Some(components) = parse_components(version) else {
        return false;
    };

    let len = components.len().max(floor.len());
    for i in 0..len {
        let actual = components.get(i).copied().unwrap_or(0);
        let minimum = floor.get(i).copied().unwrap_or(0);
        if actual != minimum {
            return actual > minimum;
        }
    }
    true
}
