//! In-memory collaborators for integration tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use dockbridge_release::compat::catalog::{Catalog, PlatformVersionEntry};
use dockbridge_release::compat::error::CatalogError;
use dockbridge_release::version::date::DatePart;
use dockbridge_release::version::error::SourceError;
use dockbridge_release::version::source::{RevisionSource, TagSource};

/// Fake checkout with a fixed tag list and optional revision
pub struct FakeRepository {
    tags: Option<Vec<String>>,
    revision: Option<String>,
}

impl FakeRepository {
    /// A checkout without any source control metadata
    pub fn detached() -> Self {
        Self {
            tags: None,
            revision: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = Some(tags.into_iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_revision(mut self, revision: &str) -> Self {
        self.revision = Some(revision.to_string());
        self
    }
}

impl TagSource for FakeRepository {
    fn tags_for(&self, date: &DatePart) -> Result<Vec<String>, SourceError> {
        let prefix = date.to_string();
        match &self.tags {
            Some(tags) => Ok(tags
                .iter()
                .filter(|t| t.starts_with(&prefix))
                .cloned()
                .collect()),
            None => Err(SourceError::Unavailable("not a git repository".to_string())),
        }
    }
}

impl RevisionSource for FakeRepository {
    fn short_revision(&self) -> Result<String, SourceError> {
        self.revision
            .clone()
            .ok_or_else(|| SourceError::Unavailable("no HEAD".to_string()))
    }
}

/// Fake catalog that counts how often it was queried
pub struct FakeCatalog {
    entries: Option<Vec<PlatformVersionEntry>>,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn with_entries(entries: Vec<PlatformVersionEntry>) -> Self {
        Self {
            entries: Some(entries),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn releases(versions: Vec<&str>) -> Self {
        Self::with_entries(
            versions
                .into_iter()
                .map(PlatformVersionEntry::release)
                .collect(),
        )
    }

    pub fn failing() -> Self {
        Self {
            entries: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn fetch_platform_versions(&self) -> Result<Vec<PlatformVersionEntry>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .clone()
            .ok_or_else(|| CatalogError::InvalidResponse("connection reset".to_string()))
    }
}

/// Catalog references are catalogs too, so tests can inspect call counts
#[async_trait]
impl<'a> Catalog for &'a FakeCatalog {
    async fn fetch_platform_versions(&self) -> Result<Vec<PlatformVersionEntry>, CatalogError> {
        <FakeCatalog as Catalog>::fetch_platform_versions(self).await
    }
}
