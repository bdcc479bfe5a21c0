//! Catalog trait for fetching known platform versions

#[cfg(test)]
use mockall::automock;

use crate::compat::error::CatalogError;

/// Release classification of a platform version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformVersionKind {
    /// A stable release
    Release,
    /// Snapshot, pre-release, beta or any other non-release build
    PreRelease,
}

/// A platform version known to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformVersionEntry {
    pub version: String,
    pub kind: PlatformVersionKind,
}

impl PlatformVersionEntry {
    pub fn release(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            kind: PlatformVersionKind::Release,
        }
    }

    pub fn pre_release(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            kind: PlatformVersionKind::PreRelease,
        }
    }

    pub fn is_release(&self) -> bool {
        self.kind == PlatformVersionKind::Release
    }
}

/// Trait for fetching the platform versions a catalog knows about
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches every platform version in the catalog
    ///
    /// # Returns
    /// * `Ok(Vec<PlatformVersionEntry>)` - Entries in catalog order
    /// * `Err(CatalogError)` - If the request or the payload is unusable
    async fn fetch_platform_versions(&self) -> Result<Vec<PlatformVersionEntry>, CatalogError>;
}
