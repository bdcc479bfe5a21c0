//! Catalog implementations for fetching platform versions

pub mod modrinth;

pub use modrinth::ModrinthCatalog;
