use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::prefs::FileStore;

/// Environment variable naming the preferences file explicitly.
pub const PREFS_ENV: &str = "ALARM_THEME_PREFS";

const PREFS_RELATIVE: &str = "alarm-theme/preferences.toml";

/// Locate the preferences file and open a store on it.
///
/// Priority:
/// 1. `--prefs` flag (explicit path)
/// 2. `$ALARM_THEME_PREFS`
/// 3. `$XDG_CONFIG_HOME/alarm-theme/preferences.toml`
/// 4. `~/.config/alarm-theme/preferences.toml`
///
/// The file does not need to exist yet; it is created on the first commit.
pub fn open_store(explicit_path: Option<&Path>) -> Result<FileStore> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => find_prefs_path(|name| std::env::var(name).ok())?,
    };
    tracing::debug!("prefs: using {}", path.display());
    Ok(FileStore::new(path))
}

/// Resolve the default preferences location from the given environment.
pub fn find_prefs_path(env: impl Fn(&str) -> Option<String>) -> Result<PathBuf> {
    let non_empty = |name: &str| env(name).filter(|v| !v.is_empty());

    if let Some(path) = non_empty(PREFS_ENV) {
        return Ok(PathBuf::from(path));
    }
    if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(PREFS_RELATIVE));
    }
    if let Some(home) = non_empty("HOME") {
        return Ok(PathBuf::from(home).join(".config").join(PREFS_RELATIVE));
    }
    bail!("cannot locate preferences: set {PREFS_ENV}, XDG_CONFIG_HOME or HOME, or pass --prefs")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_owned())
        }
    }

    #[test]
    fn explicit_env_wins() {
        let vars = [
            (PREFS_ENV, "/tmp/p.toml"),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/u"),
        ];
        let path = find_prefs_path(env_of(&vars)).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/p.toml"));
    }

    #[test]
    fn xdg_before_home() {
        let vars = [("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/u")];
        let path = find_prefs_path(env_of(&vars)).unwrap();
        assert_eq!(path, PathBuf::from("/xdg/alarm-theme/preferences.toml"));
    }

    #[test]
    fn home_fallback_skips_empty_values() {
        let vars = [(PREFS_ENV, ""), ("XDG_CONFIG_HOME", ""), ("HOME", "/home/u")];
        let path = find_prefs_path(env_of(&vars)).unwrap();
        assert_eq!(
            path,
            PathBuf::from("/home/u/.config/alarm-theme/preferences.toml")
        );
    }

    #[test]
    fn nothing_resolvable() {
        let err = find_prefs_path(env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("--prefs"));
    }

    #[test]
    fn explicit_path_is_used_verbatim() {
        let store = open_store(Some(Path::new("custom/prefs.toml"))).unwrap();
        assert_eq!(store.path(), Path::new("custom/prefs.toml"));
    }
}
