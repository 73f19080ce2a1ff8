//! Manifest loading and lookups.

use crate::env::{Environment, ProcessEnv, expand_home};
use crate::types::{EcosystemManifest, PackageEntry};
use std::path::{Path, PathBuf};

/// Formats a manifest file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
    Yaml,
}

impl ManifestFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Errors that can occur when loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse manifest: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("failed to parse manifest: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("failed to parse manifest: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("unsupported manifest format: {0} (expected .json, .toml, .yaml)")]
    UnsupportedFormat(PathBuf),
    #[error("package names must not be empty")]
    EmptyPackageName,
}

impl EcosystemManifest {
    /// Load a manifest from a file path. The format follows the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let format = ManifestFormat::from_path(path)
            .ok_or_else(|| ManifestError::UnsupportedFormat(path.to_path_buf()))?;
        let contents = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&contents, format)?;
        tracing::info!(
            "Loaded ecosystem manifest {:?}: {} packages",
            path,
            manifest.packages.len()
        );
        Ok(manifest)
    }

    /// Parse a manifest from a JSON string.
    pub fn from_str(s: &str) -> Result<Self, ManifestError> {
        Self::parse(s, ManifestFormat::Json)
    }

    /// Parse a manifest in the given format.
    pub fn parse(s: &str, format: ManifestFormat) -> Result<Self, ManifestError> {
        let manifest: Self = match format {
            ManifestFormat::Json => serde_json::from_str(s)?,
            ManifestFormat::Toml => toml::from_str(s)?,
            ManifestFormat::Yaml => serde_yaml::from_str(s)?,
        };

        if manifest.packages.keys().any(String::is_empty) {
            return Err(ManifestError::EmptyPackageName);
        }

        Ok(manifest)
    }

    /// All package names.
    pub fn package_names(&self) -> Vec<&str> {
        self.packages.keys().map(String::as_str).collect()
    }

    /// Look up a package by exact name.
    pub fn package(&self, name: &str) -> Option<&PackageEntry> {
        self.packages.get(name)
    }

    /// The root path with `~/` expanded against the process environment.
    pub fn root_path(&self) -> String {
        self.root_path_with(&ProcessEnv)
    }

    /// The root path with `~/` expanded against `env`.
    pub fn root_path_with(&self, env: &dyn Environment) -> String {
        expand_home(&self.root, env)
    }

    /// Absolute path of a package: `<root>/<path>`.
    pub fn package_path(&self, name: &str) -> Option<String> {
        self.package_path_with(name, &ProcessEnv)
    }

    /// Like [`Self::package_path`], resolving `~/` against `env`.
    ///
    /// The two parts are joined with a single `/` and nothing is normalised.
    pub fn package_path_with(&self, name: &str, env: &dyn Environment) -> Option<String> {
        let entry = self.package(name)?;
        Some(format!("{}/{}", self.root_path_with(env), entry.path))
    }
}
