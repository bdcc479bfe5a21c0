//! Modrinth game version tag API implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::compat::catalog::{Catalog, PlatformVersionEntry, PlatformVersionKind};
use crate::compat::error::CatalogError;
use crate::config::CatalogConfig;

/// Default base URL for the Modrinth API
pub const DEFAULT_BASE_URL: &str = "https://api.modrinth.com";

/// Path of the game version tag listing
const GAME_VERSION_PATH: &str = "/v2/tag/game_version";

/// `version_type` value of stable releases
const RELEASE_TYPE: &str = "release";

/// One entry of the game version tag listing
#[derive(Debug, Deserialize)]
struct GameVersionTag {
    version: String,
    #[serde(default)]
    version_type: Option<String>,
}

/// Catalog implementation for the Modrinth API
pub struct ModrinthCatalog {
    base_url: String,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl ModrinthCatalog {
    /// Creates a new ModrinthCatalog with a custom base URL and timeouts
    pub fn new(base_url: &str, connect_timeout: Duration, read_timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            connect_timeout,
            read_timeout,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(
            &config.base_url,
            Duration::from_millis(config.connect_timeout_ms),
            Duration::from_millis(config.read_timeout_ms),
        )
    }

    /// The catalog is queried once per run, so the client is built per fetch
    fn client(&self) -> Result<reqwest::Client, CatalogError> {
        Ok(reqwest::Client::builder()
            .user_agent(concat!("dockbridge-release/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(self.connect_timeout)
            .read_timeout(self.read_timeout)
            .build()?)
    }

    fn to_entry(item: serde_json::Value) -> Option<PlatformVersionEntry> {
        let tag: GameVersionTag = serde_json::from_value(item).ok()?;
        let version = tag.version.trim();
        if version.is_empty() {
            return None;
        }

        // Catalogs without a classification only list releases
        let kind = match tag.version_type.as_deref() {
            None | Some(RELEASE_TYPE) => PlatformVersionKind::Release,
            Some(_) => PlatformVersionKind::PreRelease,
        };

        Some(PlatformVersionEntry {
            version: version.to_string(),
            kind,
        })
    }
}

#[async_trait::async_trait]
impl Catalog for ModrinthCatalog {
    async fn fetch_platform_versions(&self) -> Result<Vec<PlatformVersionEntry>, CatalogError> {
        let url = format!("{}{}", self.base_url, GAME_VERSION_PATH);
        debug!("Fetching game versions: {}", url);

        let response = self
            .client()?
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Modrinth API returned status {}: {}", status, url);
            return Err(CatalogError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            warn!("Failed to parse Modrinth game version response: {}", e);
            CatalogError::InvalidResponse(e.to_string())
        })?;

        let serde_json::Value::Array(items) = payload else {
            return Err(CatalogError::InvalidResponse(
                "Expected a JSON array of game versions".to_string(),
            ));
        };

        let total = items.len();
        let entries: Vec<PlatformVersionEntry> =
            items.into_iter().filter_map(Self::to_entry).collect();

        debug!("Parsed {} of {} game version entries", entries.len(), total);

        Ok(entries)
    }
}
