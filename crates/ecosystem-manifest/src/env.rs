//! Home-directory resolution from the process environment.

/// Primary home-directory variable.
pub const HOME_VAR: &str = "HOME";

/// Fallback profile-directory variable (Windows).
pub const PROFILE_VAR: &str = "USERPROFILE";

/// Read access to environment variables.
pub trait Environment {
    /// Look up a variable. `None` if unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the live process environment on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// The user's home directory: `HOME`, then `USERPROFILE`, then `""`.
///
/// A variable that is set to an empty string still counts as set.
pub fn home_dir(env: &dyn Environment) -> String {
    env.var(HOME_VAR)
        .or_else(|| env.var(PROFILE_VAR))
        .unwrap_or_default()
}

/// Replace a leading `~` with the home directory.
///
/// Only the exact `~/` prefix is recognised; the `/` and everything after it
/// are kept as-is. Any other string is returned unchanged.
pub fn expand_home(path: &str, env: &dyn Environment) -> String {
    match path.strip_prefix('~') {
        Some(rest) if rest.starts_with('/') => format!("{}{rest}", home_dir(env)),
        _ => path.to_string(),
    }
}
