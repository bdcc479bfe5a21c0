//! Compatible platform version resolution
//!
//! Precedence: operator override, then the filtered catalog listing, then a
//! static fallback list. Catalog failures never fail the build.

use indexmap::IndexSet;
use tracing::{info, warn};

use crate::compat::catalog::{Catalog, PlatformVersionEntry};
use crate::compat::error::CatalogError;
use crate::compat::floor::VersionFloor;

/// Known-good platform versions used when the catalog is unavailable
pub const FALLBACK_GAME_VERSIONS: &[&str] = &[
    "1.19.4", "1.20", "1.20.1", "1.20.2", "1.20.3", "1.20.4", "1.20.5", "1.20.6", "1.21",
    "1.21.1", "1.21.2", "1.21.3", "1.21.4",
];

/// Where a compatibility list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilitySource {
    Override,
    Catalog,
    Fallback,
}

/// Distinct platform versions the artifact declares compatibility with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityList {
    pub versions: Vec<String>,
    pub source: CompatibilitySource,
}

/// Result of the single catalog fetch attempt
#[derive(Debug)]
pub enum FetchOutcome {
    /// Release versions at or above the floor, in catalog order
    Versions(Vec<String>),
    /// The catalog answered but nothing survived filtering
    Empty,
    /// The catalog could not be reached or parsed
    Failed(CatalogError),
}

/// Split an operator-supplied comma-separated list
///
/// Blank items are dropped and duplicates removed, keeping the first
/// occurrence.
pub fn parse_override_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Keep release entries at or above `floor`, deduplicated in first-seen order
pub fn filter_entries(entries: Vec<PlatformVersionEntry>, floor: &VersionFloor) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| entry.is_release() && floor.admits(&entry.version))
        .map(|entry| entry.version)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

pub struct CompatibilityResolver<C> {
    catalog: C,
    floor: VersionFloor,
    fallback: Vec<String>,
}

impl<C: Catalog> CompatibilityResolver<C> {
    /// Creates a resolver with the default floor and fallback list
    pub fn new(catalog: C) -> Self {
        Self::with_policy(
            catalog,
            VersionFloor::default(),
            FALLBACK_GAME_VERSIONS.iter().map(|v| v.to_string()).collect(),
        )
    }

    /// Creates a resolver with a custom floor and fallback list
    ///
    /// An empty fallback makes the resolver return an empty list when the
    /// catalog yields nothing.
    pub fn with_policy(catalog: C, floor: VersionFloor, fallback: Vec<String>) -> Self {
        Self {
            catalog,
            floor,
            fallback,
        }
    }

    /// Fetch the catalog once and filter it
    pub async fn fetch(&self) -> FetchOutcome {
        match self.catalog.fetch_platform_versions().await {
            Ok(entries) => {
                let versions = filter_entries(entries, &self.floor);
                if versions.is_empty() {
                    FetchOutcome::Empty
                } else {
                    FetchOutcome::Versions(versions)
                }
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    /// Resolve the compatibility list
    ///
    /// `override_list` is the raw comma-separated operator value; if it holds
    /// at least one version the catalog is never consulted and no floor is
    /// applied.
    pub async fn resolve(&self, override_list: Option<&str>) -> CompatibilityList {
        if let Some(raw) = override_list {
            let versions = parse_override_list(raw);
            if !versions.is_empty() {
                info!("Using {} overridden platform versions", versions.len());
                return CompatibilityList {
                    versions,
                    source: CompatibilitySource::Override,
                };
            }
        }

        match self.fetch().await {
            FetchOutcome::Versions(versions) => {
                info!(
                    "Resolved {} platform versions >= {} from catalog",
                    versions.len(),
                    self.floor
                );
                return CompatibilityList {
                    versions,
                    source: CompatibilitySource::Catalog,
                };
            }
            FetchOutcome::Empty => {
                warn!(
                    "Catalog returned no release versions >= {}, using fallback list",
                    self.floor
                );
            }
            FetchOutcome::Failed(e) => {
                warn!("Failed to resolve platform versions from catalog: {}", e);
            }
        }

        CompatibilityList {
            versions: self.fallback.clone(),
            source: CompatibilitySource::Fallback,
        }
    }
}
