//! Release version and platform compatibility resolution for DockBridge builds
//!
//! - [`version`]: `YYYY.MM.DD[-L]` release and `YYYY.MM.DD-<rev>` snapshot versions
//! - [`compat`]: Compatible platform versions (override, catalog, fallback)
//! - [`manifest`]: Publish manifest consumed by the publishing client
//! - [`config`]: Build configuration read once from the environment
//! - [`logging`]: Tracing subscriber setup

pub mod compat;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod version;
