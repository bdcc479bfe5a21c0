//! Platform compatibility resolution
//!
//! Determines the platform (game) versions a build declares compatibility
//! with, using an operator override, the remote catalog, or a static
//! fallback list.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog trait and platform version entries
//! - [`catalogs`]: Concrete catalog implementations (Modrinth)
//! - [`floor`]: Minimum version and component-wise comparison
//! - [`resolver`]: Override / catalog / fallback precedence
//! - [`error`]: Error types for catalog requests

pub mod catalog;
pub mod catalogs;
pub mod error;
pub mod floor;
pub mod resolver;
