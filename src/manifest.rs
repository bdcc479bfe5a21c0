//! Publish manifest handed to the external publishing client

use serde::Serialize;

use crate::compat::resolver::CompatibilityList;
use crate::config::BuildConfig;

/// Loaders the plugin runs on
pub const LOADERS: &[&str] = &["velocity"];

/// Release channel the builds are published to
pub const VERSION_TYPE: &str = "release";

/// Everything the publishing client needs besides the archive and credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishManifest {
    pub project_id: String,
    pub version_number: String,
    pub version_type: String,
    pub changelog: String,
    pub game_versions: Vec<String>,
    pub loaders: Vec<String>,
}

impl PublishManifest {
    pub fn new(config: &BuildConfig, version: String, compatibility: CompatibilityList) -> Self {
        Self {
            project_id: config.project_id.clone(),
            version_number: version,
            version_type: VERSION_TYPE.to_string(),
            changelog: config.changelog.clone(),
            game_versions: compatibility.versions,
            loaders: LOADERS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::resolver::CompatibilitySource;
    use serde_json::json;

    #[test]
    fn manifest_serializes_publish_fields() {
        let config = BuildConfig {
            changelog: "Initial release".to_string(),
            ..BuildConfig::default()
        };
        let compatibility = CompatibilityList {
            versions: vec!["1.20.4".to_string(), "1.21".to_string()],
            source: CompatibilitySource::Catalog,
        };

        let manifest = PublishManifest::new(&config, "2024.06.01-A".to_string(), compatibility);

        assert_eq!(
            serde_json::to_value(&manifest).unwrap(),
            json!({
                "project_id": "dockbridge",
                "version_number": "2024.06.01-A",
                "version_type": "release",
                "changelog": "Initial release",
                "game_versions": ["1.20.4", "1.21"],
                "loaders": ["velocity"]
            })
        );
    }
}
