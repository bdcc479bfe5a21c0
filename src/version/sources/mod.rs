//! Source control implementations of the tag and revision sources

pub mod git;

pub use git::GitRepository;
