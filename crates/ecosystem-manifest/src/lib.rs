//! Ecosystem manifest: the source of truth for every package in the ecosystem.
//!
//! The manifest bundled with this crate (`ecosystem.manifest.json`) is parsed
//! once, on first access, and never changes afterwards.
//!
//! ```no_run
//! use ecosystem_manifest::{manifest, package_names, package_path};
//!
//! // ["@mark1russell7/client", "@mark1russell7/cue", ...]
//! println!("{:?}", package_names());
//!
//! // Some("/Users/mark/git/docker/sqlite")
//! println!("{:?}", package_path("@mark1russell7/docker-sqlite"));
//!
//! // "1.0.0"
//! println!("{}", manifest().version);
//! ```

mod env;
mod manifest;
mod types;

pub use env::{Environment, HOME_VAR, PROFILE_VAR, ProcessEnv, expand_home, home_dir};
pub use manifest::{ManifestError, ManifestFormat};
pub use types::{EcosystemManifest, GitRef, PackageEntry, PackageName, ProjectTemplate};

use std::sync::LazyLock;

const BUNDLED_MANIFEST: &str = include_str!("../ecosystem.manifest.json");

static MANIFEST: LazyLock<Result<EcosystemManifest, ManifestError>> = LazyLock::new(|| {
    let result = EcosystemManifest::from_str(BUNDLED_MANIFEST);
    match &result {
        Ok(m) => tracing::debug!(
            "Parsed bundled ecosystem manifest v{}: {} packages",
            m.version,
            m.packages.len()
        ),
        Err(e) => tracing::error!("Failed to parse bundled ecosystem manifest: {e}"),
    }
    result
});

/// The bundled manifest, or the error it failed to load with.
pub fn try_manifest() -> Result<&'static EcosystemManifest, &'static ManifestError> {
    MANIFEST.as_ref()
}

/// The bundled manifest.
///
/// # Panics
///
/// If the bundled document cannot be parsed.
pub fn manifest() -> &'static EcosystemManifest {
    match try_manifest() {
        Ok(m) => m,
        Err(e) => panic!("bundled ecosystem manifest is invalid: {e}"),
    }
}

/// All package names in the ecosystem.
pub fn package_names() -> Vec<&'static str> {
    manifest().package_names()
}

/// Package entry by name, or `None` if the ecosystem has no such package.
pub fn package(name: &str) -> Option<&'static PackageEntry> {
    manifest().package(name)
}

/// The root path, with a leading `~/` resolved against the current environment.
pub fn root_path() -> String {
    manifest().root_path()
}

/// Full path of a package, or `None` if the ecosystem has no such package.
pub fn package_path(name: &str) -> Option<String> {
    manifest().package_path(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::tests::MapEnv;

    #[test]
    fn bundled_manifest_loads() {
        let manifest = try_manifest().unwrap();
        assert!(!manifest.packages.is_empty());
        assert!(!manifest.version.is_empty());
    }

    #[test]
    fn singleton_is_shared() {
        assert!(std::ptr::eq(manifest(), manifest()));
    }

    #[test]
    fn accessors_agree_with_manifest() {
        let names = package_names();
        assert_eq!(names.len(), manifest().packages.len());
        for name in names {
            assert_eq!(package(name), manifest().packages.get(name));
            assert!(package_path(name).is_some());
        }
    }

    #[test]
    fn unknown_package_is_absent() {
        assert_eq!(package("@mark1russell7/does-not-exist"), None);
        assert_eq!(package_path("@mark1russell7/does-not-exist"), None);
    }

    #[test]
    fn bundled_paths_resolve_under_root() {
        let env = MapEnv::default().with("HOME", "/Users/mark");
        assert_eq!(manifest().root_path_with(&env), "/Users/mark/git");
        assert_eq!(
            manifest().package_path_with("@mark1russell7/docker-sqlite", &env),
            Some("/Users/mark/git/docker/sqlite".to_string())
        );
    }

    #[test]
    fn root_path_is_idempotent() {
        assert_eq!(root_path(), root_path());
    }
}
