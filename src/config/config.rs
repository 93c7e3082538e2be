// SPDX-License-Identifier: GPL-3.0-only
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file read when `DEPOT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "depot.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Colored log output on stderr
    pub log_ansi: bool,

    /// Print the current table contents every time a table menu is shown
    pub show_tables: bool,
}

impl Config {
    /// Load configuration from TOML file with environment variable overrides
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with a custom environment lookup
    pub fn load_with<F>(env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = env("DEPOT_CONFIG").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let mut config: Config = if Path::new(&config_path).exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file {}", config_path))?;
            toml::from_str(&contents)
                .with_context(|| format!("Invalid config file {}", config_path))?
        } else {
            Config::default()
        };

        if let Some(val) = env("DEPOT_LOG_LEVEL") {
            config.log_level = val;
        }
        if let Some(val) = env("DEPOT_LOG_ANSI") {
            config.log_ansi = val
                .parse()
                .with_context(|| format!("DEPOT_LOG_ANSI must be true or false, got {}", val))?;
        }
        if let Some(val) = env("DEPOT_SHOW_TABLES") {
            config.show_tables = val
                .parse()
                .with_context(|| format!("DEPOT_SHOW_TABLES must be true or false, got {}", val))?;
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: String::from("warn"),
            log_ansi: true,
            show_tables: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::NamedTempFile;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert!(config.log_ansi);
        assert!(config.show_tables);
    }

    #[test]
    fn test_load_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let config = Config::load_with(env_of(&[("DEPOT_CONFIG", missing.to_str().unwrap())])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
log_level = "debug"
log_ansi = false
show_tables = false
"#;
        fs::write(temp_file.path(), config_content).unwrap();

        let config =
            Config::load_with(env_of(&[("DEPOT_CONFIG", temp_file.path().to_str().unwrap())])).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.log_ansi);
        assert!(!config.show_tables);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "show_tables = false\n").unwrap();

        let config =
            Config::load_with(env_of(&[("DEPOT_CONFIG", temp_file.path().to_str().unwrap())])).unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(config.log_ansi);
        assert!(!config.show_tables);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "show_tables = \"sometimes\"\n").unwrap();

        let result = Config::load_with(env_of(&[("DEPOT_CONFIG", temp_file.path().to_str().unwrap())]));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_var_overrides() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "log_level = \"debug\"\n").unwrap();

        let config = Config::load_with(env_of(&[
            ("DEPOT_CONFIG", temp_file.path().to_str().unwrap()),
            ("DEPOT_LOG_LEVEL", "trace"),
            ("DEPOT_LOG_ANSI", "false"),
            ("DEPOT_SHOW_TABLES", "false"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "trace");
        assert!(!config.log_ansi);
        assert!(!config.show_tables);
    }

    #[test]
    fn test_env_var_override_rejects_non_bool() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let result = Config::load_with(env_of(&[
            ("DEPOT_CONFIG", missing.to_str().unwrap()),
            ("DEPOT_SHOW_TABLES", "yes"),
        ]));
        assert!(result.is_err());
    }
}
