//! Runtime configuration, read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::save::SaveConfig;

pub const DEFAULT_LOG_FILTER: &str = "soliterminal=info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub save: SaveConfig,
    /// Fixed deal seed; `None` picks one from the clock for every deal
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    /// Start with a fresh deal even if a save file exists
    pub no_load: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save: SaveConfig::default(),
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            no_load: false,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("SOLITERMINAL_SEED").and_then(|s| s.parse().ok());
        let log_path = var("SOLITERMINAL_LOG_PATH").map(PathBuf::from);
        let log_filter = var("SOLITERMINAL_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let no_load = var("SOLITERMINAL_NO_LOAD")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            save: SaveConfig::from_lookup(&lookup),
            seed,
            log_path,
            log_filter,
            no_load,
        }
    }

    /// Seed for the next deal
    pub fn deal_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    (nanos ^ (nanos >> 32)) as u32
}
