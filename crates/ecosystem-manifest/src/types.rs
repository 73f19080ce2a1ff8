//! Data types for `ecosystem.manifest.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Package name (e.g. `@mark1russell7/cue`).
pub type PackageName = String;

/// Git reference (e.g. `github:mark1russell7/cue#main`).
pub type GitRef = String;

/// The ecosystem manifest: every package, where it lives, and the project template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemManifest {
    /// Manifest version. Informational only.
    pub version: String,
    /// Root directory for all packages (e.g. `~/git`).
    pub root: String,
    /// Package entries, keyed by package name.
    pub packages: BTreeMap<PackageName, PackageEntry>,
    /// Template for new projects.
    pub project_template: ProjectTemplate,
}

/// A single package in the ecosystem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PackageEntry {
    /// Remote source. Opaque to this crate.
    pub repo: GitRef,
    /// Path relative to the manifest root (e.g. `cue` or `docker/sqlite`).
    pub path: String,
    /// Branch name, if the manifest sets one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl PackageEntry {
    /// Branch consumers should assume when `branch` is absent.
    pub const DEFAULT_BRANCH: &'static str = "main";

    /// The entry's branch, or [`Self::DEFAULT_BRANCH`].
    pub fn branch_or_default(&self) -> &str {
        self.branch.as_deref().unwrap_or(Self::DEFAULT_BRANCH)
    }
}

/// Files and directories every project should have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectTemplate {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
}
