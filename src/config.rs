use tracing::warn;

use crate::compat::catalogs::modrinth::DEFAULT_BASE_URL;

// =============================================================================
// Environment variables
// =============================================================================

/// Enables release mode when set to "true" (case-insensitive)
pub const RELEASE_ENV: &str = "DOCKBRIDGE_RELEASE";

/// Explicit version, bypasses version computation
pub const VERSION_OVERRIDE_ENV: &str = "DOCKBRIDGE_VERSION";

/// Comma-separated platform versions, bypasses the catalog
pub const GAME_VERSIONS_ENV: &str = "MODRINTH_GAME_VERSIONS";

/// Changelog text passed through to the publish manifest
pub const CHANGELOG_ENV: &str = "MODRINTH_CHANGELOG";

pub const PROJECT_ID_ENV: &str = "DOCKBRIDGE_PROJECT_ID";
pub const CATALOG_URL_ENV: &str = "DOCKBRIDGE_CATALOG_URL";
pub const CATALOG_CONNECT_TIMEOUT_ENV: &str = "DOCKBRIDGE_CATALOG_CONNECT_TIMEOUT_MS";
pub const CATALOG_READ_TIMEOUT_ENV: &str = "DOCKBRIDGE_CATALOG_READ_TIMEOUT_MS";

// =============================================================================
// Defaults
// =============================================================================

/// Connect and read timeout for catalog requests in milliseconds (5 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_PROJECT_ID: &str = "dockbridge";

/// Build configuration, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub release: bool,
    pub version_override: Option<String>,
    /// Raw comma-separated list, parsed by the compatibility resolver
    pub game_versions_override: Option<String>,
    pub changelog: String,
    pub project_id: String,
    pub catalog: CatalogConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            release: false,
            version_override: None,
            game_versions_override: None,
            changelog: String::new(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            catalog: CatalogConfig::default(),
        }
    }
}

/// Compatibility catalog connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl BuildConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            release: get(RELEASE_ENV).is_some_and(|v| v.eq_ignore_ascii_case("true")),
            version_override: get(VERSION_OVERRIDE_ENV),
            game_versions_override: get(GAME_VERSIONS_ENV),
            // Changelog is passed through untouched
            changelog: lookup(CHANGELOG_ENV).unwrap_or_default(),
            project_id: get(PROJECT_ID_ENV).unwrap_or(defaults.project_id),
            catalog: CatalogConfig {
                base_url: get(CATALOG_URL_ENV).unwrap_or(defaults.catalog.base_url),
                connect_timeout_ms: parse_millis(
                    CATALOG_CONNECT_TIMEOUT_ENV,
                    get(CATALOG_CONNECT_TIMEOUT_ENV),
                ),
                read_timeout_ms: parse_millis(
                    CATALOG_READ_TIMEOUT_ENV,
                    get(CATALOG_READ_TIMEOUT_ENV),
                ),
            },
        }
    }
}

fn parse_millis(key: &str, value: Option<String>) -> u64 {
    let Some(value) = value else {
        return DEFAULT_FETCH_TIMEOUT_MS;
    };
    value.parse().unwrap_or_else(|_| {
        warn!(
            "Ignoring invalid {}={:?}, using {}ms",
            key, value, DEFAULT_FETCH_TIMEOUT_MS
        );
        DEFAULT_FETCH_TIMEOUT_MS
    })
}
