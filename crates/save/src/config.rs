//! Where the save file lives.

use std::env;
use std::path::PathBuf;

pub const SAVE_FILE_NAME: &str = "soliterminal.sav";

/// Save file configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConfig {
    pub path: PathBuf,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(SAVE_FILE_NAME),
        }
    }
}

impl SaveConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create from environment variables.
    ///
    /// `SOLITERMINAL_SAVE_PATH` wins; otherwise the file goes into the
    /// platform data directory (`APPDATA`, `XDG_DATA_HOME`, then
    /// `HOME/.local/share`), falling back to the working directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SaveConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(path) = var("SOLITERMINAL_SAVE_PATH") {
            return Self::new(path);
        }

        let data_dir = var("APPDATA")
            .map(PathBuf::from)
            .or_else(|| var("XDG_DATA_HOME").map(PathBuf::from))
            .or_else(|| var("HOME").map(|home| PathBuf::from(home).join(".local").join("share")));

        match data_dir {
            Some(dir) => Self::new(dir.join("soliterminal").join(SAVE_FILE_NAME)),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> SaveConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SaveConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn explicit_path_wins() {
        let config = lookup(&[("SOLITERMINAL_SAVE_PATH", "/tmp/x.sav"), ("HOME", "/home/u")]);
        assert_eq!(config.path, PathBuf::from("/tmp/x.sav"));
    }

    #[test]
    fn data_dir_fallbacks() {
        let config = lookup(&[("XDG_DATA_HOME", "/data"), ("HOME", "/home/u")]);
        assert_eq!(config.path, PathBuf::from("/data/soliterminal/soliterminal.sav"));

        let config = lookup(&[("HOME", "/home/u")]);
        assert_eq!(
            config.path,
            PathBuf::from("/home/u/.local/share/soliterminal/soliterminal.sav")
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = lookup(&[("SOLITERMINAL_SAVE_PATH", "  "), ("HOME", "")]);
        assert_eq!(config, SaveConfig::default());
    }
}
