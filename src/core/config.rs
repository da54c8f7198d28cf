//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Roster file used when nothing else is configured
pub const DEFAULT_ROSTER_FILE: &str = "Enrollments.json";

/// Registrar configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Roster file used when no --file flag is given
    pub file: Option<PathBuf>,

    /// Pretty-print the JSON roster when saving
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/registrar/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(file) = std::env::var("REGISTRAR_FILE") {
            config.file = Some(PathBuf::from(file));
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "registrar")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.file.is_some() {
            self.file = other.file;
        }
        if other.pretty.is_some() {
            self.pretty = other.pretty;
        }
    }

    /// Roster path, falling back to Enrollments.json in the working directory
    pub fn roster_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_FILE))
    }

    /// Whether saves should pretty-print the JSON
    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }
}
