mod helper;

use helper::{FakeCatalog, FakeRepository};
use serde_json::json;

use dockbridge_release::compat::resolver::CompatibilityResolver;
use dockbridge_release::config::{BuildConfig, CHANGELOG_ENV, GAME_VERSIONS_ENV, RELEASE_ENV};
use dockbridge_release::manifest::PublishManifest;
use dockbridge_release::version::resolver::{PluginVersionResolver, resolve_plugin_version};

#[tokio::test]
async fn manifest_combines_version_and_compatibility() {
    let config = BuildConfig::from_lookup(|key| match key {
        RELEASE_ENV => Some("true".to_string()),
        GAME_VERSIONS_ENV => Some("1.21, 1.21.1".to_string()),
        CHANGELOG_ENV => Some("Fix container discovery".to_string()),
        _ => None,
    });
    let date = "2025.03.14".parse().unwrap();
    let versions =
        PluginVersionResolver::new(FakeRepository::detached().with_tags(vec!["2025.03.14"]));
    let catalog = FakeCatalog::failing();
    let compat = CompatibilityResolver::new(&catalog);

    let version = resolve_plugin_version(&config, &versions, &date).unwrap();
    let compatibility = compat
        .resolve(config.game_versions_override.as_deref())
        .await;
    let manifest = PublishManifest::new(&config, version, compatibility);

    assert_eq!(
        serde_json::to_value(&manifest).unwrap(),
        json!({
            "project_id": "dockbridge",
            "version_number": "2025.03.14-A",
            "version_type": "release",
            "changelog": "Fix container discovery",
            "game_versions": ["1.21", "1.21.1"],
            "loaders": ["velocity"]
        })
    );
}
