//! Git-backed tag and revision sources

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::version::date::DatePart;
use crate::version::error::SourceError;
use crate::version::snapshot::REVISION_LENGTH;
use crate::version::source::{RevisionSource, TagSource};

/// A git checkout queried through the `git` executable
pub struct GitRepository {
    workdir: PathBuf,
}

impl GitRepository {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run git with `args` and return its trimmed stdout
    fn run(&self, args: &[&str]) -> Result<String, SourceError> {
        debug!("Running git {:?} in {:?}", args, self.workdir);

        let output = Command::new("git")
            .current_dir(&self.workdir)
            .args(args)
            .output()
            .map_err(|e| SourceError::Unavailable(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::Unavailable(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| SourceError::InvalidOutput(e.to_string()))?;
        Ok(stdout.trim().to_string())
    }
}

impl TagSource for GitRepository {
    fn tags_for(&self, date: &DatePart) -> Result<Vec<String>, SourceError> {
        let pattern = format!("{}*", date);
        let stdout = self.run(&["tag", "--list", &pattern])?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

impl RevisionSource for GitRepository {
    fn short_revision(&self) -> Result<String, SourceError> {
        let short = format!("--short={}", REVISION_LENGTH);
        let revision = self.run(&["rev-parse", &short, "HEAD"])?;

        if revision.is_empty() {
            return Err(SourceError::Unavailable(
                "git rev-parse returned no revision".to_string(),
            ));
        }
        Ok(revision)
    }
}
