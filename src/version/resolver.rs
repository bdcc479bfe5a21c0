//! Plugin version resolution: picks release or snapshot mode and delegates

use tracing::{debug, info, warn};

use crate::config::BuildConfig;
use crate::version::date::DatePart;
use crate::version::error::VersionError;
use crate::version::release::compute_release_version;
use crate::version::snapshot::{FALLBACK_REVISION, compute_snapshot_version};
use crate::version::source::{RevisionSource, TagSource};

/// Which version scheme a build uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Tag-based `YYYY.MM.DD[-L]` version
    Release,
    /// Development `YYYY.MM.DD-<revision>` version
    Snapshot,
}

impl BuildMode {
    pub fn from_release_flag(release: bool) -> Self {
        if release {
            BuildMode::Release
        } else {
            BuildMode::Snapshot
        }
    }
}

/// Resolves the plugin version from a source control checkout
pub struct PluginVersionResolver<S> {
    source: S,
}

impl<S: TagSource + RevisionSource> PluginVersionResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Compute the version for `date` in the given mode
    ///
    /// Only a same-day capacity overflow fails; unavailable source control
    /// metadata degrades to "no tags" or the fallback revision.
    pub fn resolve(&self, mode: BuildMode, date: &DatePart) -> Result<String, VersionError> {
        match mode {
            BuildMode::Release => {
                let tags = self.source.tags_for(date).unwrap_or_else(|e| {
                    warn!("Failed to list tags for {}, assuming none: {}", date, e);
                    Vec::new()
                });
                debug!("Found {} candidate tags for {}", tags.len(), date);

                let version = compute_release_version(date, &tags)?;
                Ok(version.to_string())
            }
            BuildMode::Snapshot => {
                let revision = self
                    .source
                    .short_revision()
                    .inspect_err(|e| {
                        debug!("Using revision '{}': {}", FALLBACK_REVISION, e);
                    })
                    .ok();

                Ok(compute_snapshot_version(date, revision.as_deref()))
            }
        }
    }
}

/// Resolve the build version for `config`
///
/// An explicit version override wins over any computation.
pub fn resolve_plugin_version<S: TagSource + RevisionSource>(
    config: &BuildConfig,
    resolver: &PluginVersionResolver<S>,
    date: &DatePart,
) -> Result<String, VersionError> {
    if let Some(version) = &config.version_override {
        info!("Using explicit version override {}", version);
        return Ok(version.clone());
    }

    let mode = BuildMode::from_release_flag(config.release);
    let version = resolver.resolve(mode, date)?;
    info!("Resolved {:?} version {}", mode, version);
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::SourceError;
    use crate::version::source::{MockRevisionSource, MockTagSource};
    use rstest::rstest;

    /// Combines the two generated mocks into one source
    struct MockSource {
        tags: MockTagSource,
        revision: MockRevisionSource,
    }

    impl MockSource {
        fn new() -> Self {
            Self {
                tags: MockTagSource::new(),
                revision: MockRevisionSource::new(),
            }
        }
    }

    impl TagSource for MockSource {
        fn tags_for(&self, date: &DatePart) -> Result<Vec<String>, SourceError> {
            self.tags.tags_for(date)
        }
    }

    impl RevisionSource for MockSource {
        fn short_revision(&self) -> Result<String, SourceError> {
            self.revision.short_revision()
        }
    }

    fn date() -> DatePart {
        "2024.06.01".parse().unwrap()
    }

    #[rstest]
    #[case(vec![], "2024.06.01")]
    #[case(vec!["2024.06.01"], "2024.06.01-A")]
    #[case(vec!["2024.06.01", "2024.06.01-A"], "2024.06.01-B")]
    fn release_mode_uses_tags(#[case] tags: Vec<&'static str>, #[case] expected: &str) {
        let mut source = MockSource::new();
        source
            .tags
            .expect_tags_for()
            .times(1)
            .returning(move |_| Ok(tags.iter().map(|t| t.to_string()).collect()));
        source.revision.expect_short_revision().never();

        let resolver = PluginVersionResolver::new(source);

        assert_eq!(resolver.resolve(BuildMode::Release, &date()).unwrap(), expected);
    }

    #[test]
    fn release_mode_treats_tag_failure_as_no_tags() {
        let mut source = MockSource::new();
        source
            .tags
            .expect_tags_for()
            .returning(|_| Err(SourceError::Unavailable("not a repository".to_string())));

        let resolver = PluginVersionResolver::new(source);

        assert_eq!(
            resolver.resolve(BuildMode::Release, &date()).unwrap(),
            "2024.06.01"
        );
    }

    #[test]
    fn release_mode_propagates_capacity_exceeded() {
        let mut source = MockSource::new();
        source
            .tags
            .expect_tags_for()
            .returning(|_| Ok(vec!["2024.06.01-Z".to_string()]));

        let resolver = PluginVersionResolver::new(source);
        let result = resolver.resolve(BuildMode::Release, &date());

        assert!(matches!(
            result,
            Err(VersionError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn snapshot_mode_uses_revision() {
        let mut source = MockSource::new();
        source.tags.expect_tags_for().never();
        source
            .revision
            .expect_short_revision()
            .times(1)
            .returning(|| Ok("abc12345".to_string()));

        let resolver = PluginVersionResolver::new(source);

        assert_eq!(
            resolver.resolve(BuildMode::Snapshot, &date()).unwrap(),
            "2024.06.01-abc12345"
        );
    }

    #[test]
    fn snapshot_mode_falls_back_without_revision() {
        let mut source = MockSource::new();
        source
            .revision
            .expect_short_revision()
            .returning(|| Err(SourceError::Unavailable("shallow checkout".to_string())));

        let resolver = PluginVersionResolver::new(source);

        assert_eq!(
            resolver.resolve(BuildMode::Snapshot, &date()).unwrap(),
            "2024.06.01-nogit"
        );
    }

    #[test]
    fn explicit_override_bypasses_sources() {
        let mut source = MockSource::new();
        source.tags.expect_tags_for().never();
        source.revision.expect_short_revision().never();
        let resolver = PluginVersionResolver::new(source);
        let config = BuildConfig {
            release: true,
            version_override: Some("1.2.3-custom".to_string()),
            ..BuildConfig::default()
        };

        let version = resolve_plugin_version(&config, &resolver, &date()).unwrap();

        assert_eq!(version, "1.2.3-custom");
    }

    #[rstest]
    #[case(true, BuildMode::Release)]
    #[case(false, BuildMode::Snapshot)]
    fn build_mode_follows_release_flag(#[case] release: bool, #[case] expected: BuildMode) {
        assert_eq!(BuildMode::from_release_flag(release), expected);
    }
}
