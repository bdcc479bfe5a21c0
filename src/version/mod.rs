//! Plugin version computation
//!
//! Derives the build identifier from the current UTC date and source control
//! state.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Sources   │────▶│  Resolver   │────▶│   Release   │
//! │ (git tags,  │     │ (mode pick) │     │  Snapshot   │
//! │  revision)  │     └─────────────┘     │(calculators)│
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`date`]: `YYYY.MM.DD` date component
//! - [`release`]: Tag-based release versions with same-day letter suffixes
//! - [`snapshot`]: Revision-based development versions
//! - [`source`]: Traits for the tag and revision collaborators
//! - [`sources`]: Git implementation of the sources
//! - [`resolver`]: Release/snapshot selection and explicit overrides
//! - [`error`]: Error types for version computation and source lookups

pub mod date;
pub mod error;
pub mod release;
pub mod resolver;
pub mod snapshot;
pub mod source;
pub mod sources;
